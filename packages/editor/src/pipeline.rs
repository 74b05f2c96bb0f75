//! # Editing Pipeline
//!
//! Coordinates the full list lifecycle: Mutate → Re-render.
//!
//! The reactivity boundary is explicit here: the host observes mutations by
//! applying them through the pipeline, which re-derives the virtual tree
//! after every change instead of relying on an implicit subscription.

use crate::controller::{ArrayController, ArrayEvents, OpOutcome};
use crate::errors::EditorError;
use crate::mutations::ArrayOp;
use crate::store::ValueList;
use formweave_evaluator::{ListRenderer, VNode};
use formweave_schema::{Pattern, SchemaNode};
use serde_json::Value;

/// Manages the full mutate → render pipeline for one repeating list
pub struct Pipeline {
    name: String,
    schema: SchemaNode,
    controller: ArrayController<ValueList>,
    renderer: ListRenderer,
    version: u64,
    last_vdom: Option<VNode>,
}

impl Pipeline {
    /// Create a pipeline over an initial collection. The edit pattern is
    /// shared by the controller (gating) and the renderer (control
    /// visibility) so the two can never disagree.
    pub fn new(
        name: impl Into<String>,
        schema: SchemaNode,
        values: Vec<Value>,
        pattern: Pattern,
    ) -> Self {
        Self {
            name: name.into(),
            schema,
            controller: ArrayController::new(ValueList::from_values(values))
                .with_pattern(pattern),
            renderer: ListRenderer::new().with_pattern(pattern),
            version: 0,
            last_vdom: None,
        }
    }

    pub fn with_events(mut self, events: Box<dyn ArrayEvents>) -> Self {
        self.controller = self.controller.with_events(events);
        self
    }

    pub fn with_renderer(mut self, renderer: ListRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Apply one operation and re-render.
    ///
    /// Refused and no-op requests still return the (unchanged) tree so the
    /// caller always holds a current view.
    pub fn apply(&mut self, op: ArrayOp) -> Result<PipelineResult, EditorError> {
        let outcome = self.controller.apply(op);
        if matches!(outcome, OpOutcome::Applied(_)) {
            self.version += 1;
        }

        let vdom = self
            .renderer
            .render(&self.name, &self.schema, self.controller.values())?;
        self.last_vdom = Some(vdom.clone());

        Ok(PipelineResult {
            version: self.version,
            outcome,
            vdom,
        })
    }

    /// Append a synthesized item through the pipeline. The addition control
    /// is looked up among the array schema's own properties.
    pub fn add_item(&mut self) -> Result<PipelineResult, EditorError> {
        let value = self.synthesize_for_addition();
        self.apply(ArrayOp::Push { value })
    }

    /// Prepend a synthesized item through the pipeline
    pub fn add_item_at_head(&mut self) -> Result<PipelineResult, EditorError> {
        let value = self.synthesize_for_addition();
        self.apply(ArrayOp::Unshift { value })
    }

    /// Full re-render without a mutation (initial render, recovery)
    pub fn full_render(&mut self) -> Result<VNode, EditorError> {
        let vdom = self
            .renderer
            .render(&self.name, &self.schema, self.controller.values())?;
        self.last_vdom = Some(vdom.clone());
        Ok(vdom)
    }

    pub fn controller(&self) -> &ArrayController<ValueList> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ArrayController<ValueList> {
        &mut self.controller
    }

    pub fn schema(&self) -> &SchemaNode {
        &self.schema
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn last_vdom(&self) -> Option<&VNode> {
        self.last_vdom.as_ref()
    }

    fn synthesize_for_addition(&self) -> Value {
        let explicit = self
            .schema
            .addition_child()
            .and_then(|(_, node)| node.default.as_ref());
        formweave_schema::synthesize(explicit, Some(&self.schema)).unwrap_or(Value::Null)
    }
}

/// Result of one pipeline step
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Version counter, bumped once per applied mutation
    pub version: u64,
    /// What became of the requested operation
    pub outcome: OpOutcome,
    /// Re-derived virtual tree
    pub vdom: VNode,
}
