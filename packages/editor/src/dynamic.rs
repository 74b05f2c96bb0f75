//! # Dynamic Subschema Resolution
//!
//! Swaps an alternate sub-schema into a subtree whenever a sibling trigger
//! value changes.
//!
//! The transition is two discrete, ordered steps: first invalidate every
//! previously materialized field under the owning address (so validators and
//! effects bound to the old subtree cannot fire against the new one), then
//! install the newly selected schema. Installation replaces the schema
//! wholesale; an installed schema is never mutated in place.
//!
//! A repeated, identical trigger value still runs the full transition — the
//! driver is the trigger event, not a change-detection diff.

use formweave_evaluator::{FieldRenderer, RecursionOptions, VNode};
use formweave_schema::{AddressPattern, FieldAddress, SchemaNode};
use serde_json::Value;
use tracing::debug;

/// Invalidation surface of the externally owned field-state graph.
/// `clear` is a request to the owner, not an in-process lock.
pub trait FieldGraph {
    /// Remove all field state whose address matches the pattern
    fn clear(&mut self, pattern: &AddressPattern);
}

/// Resolver state: idle until a mapped trigger value is observed
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverState {
    /// No usable trigger yet; renders a prompt
    Idle,
    Active { trigger: Value, schema: SchemaNode },
}

/// Trigger-driven schema selector for one subtree
pub struct SubschemaResolver {
    address: FieldAddress,
    /// Closed, caller-supplied mapping from trigger value to schema
    table: Vec<(Value, SchemaNode)>,
    state: ResolverState,
    prompt: String,
}

impl SubschemaResolver {
    pub fn new(address: FieldAddress) -> Self {
        Self {
            address,
            table: Vec::new(),
            state: ResolverState::Idle,
            prompt: "select a value first".to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Register one trigger → schema mapping
    pub fn map(mut self, trigger: Value, schema: SchemaNode) -> Self {
        self.table.push((trigger, schema));
        self
    }

    pub fn address(&self) -> &FieldAddress {
        &self.address
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ResolverState::Idle)
    }

    /// Run one transition for an observed trigger value.
    ///
    /// Invalidation always happens, even when the value is unchanged or
    /// unmapped; an unmapped or absent value lands back in the idle state.
    pub fn on_trigger(
        &mut self,
        value: Option<&Value>,
        graph: &mut dyn FieldGraph,
    ) -> &ResolverState {
        let pattern = self.address.wildcard();
        debug!(%pattern, trigger = ?value, "invalidating subtree before installing subschema");
        graph.clear(&pattern);

        self.state = match value {
            Some(value) => match self.lookup(value) {
                Some(schema) => ResolverState::Active {
                    trigger: value.clone(),
                    schema,
                },
                None => ResolverState::Idle,
            },
            None => ResolverState::Idle,
        };
        &self.state
    }

    /// Render the subtree: a prompt while idle, the installed schema's named
    /// children (properties-only, based at the owning address) once active.
    pub fn render(&self, renderer: &FieldRenderer) -> VNode {
        match &self.state {
            ResolverState::Idle => VNode::text(self.prompt.clone()),
            ResolverState::Active { schema, .. } => {
                let children = renderer.render_with(
                    schema,
                    &self.address.to_string(),
                    &RecursionOptions::properties_only(),
                );
                VNode::field(self.address.to_string()).with_children(children)
            }
        }
    }

    fn lookup(&self, value: &Value) -> Option<SchemaNode> {
        self.table
            .iter()
            .find(|(trigger, _)| trigger == value)
            .map(|(_, schema)| schema.clone())
    }
}
