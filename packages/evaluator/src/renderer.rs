//! Whole-list rendering.
//!
//! Walks the backing collection, composes one item view per entry, threads
//! the addition control in at index 0 only, and falls back to a placeholder
//! when the collection is empty.

use crate::composer::{ComposerOptions, ItemComposer};
use crate::recursion::FieldRenderer;
use crate::vdom::VNode;
use formweave_schema::{Pattern, SchemaNode, SchemaType};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The rendering context has no usable array schema. Fatal for the
    /// render pass; every other condition degrades locally.
    #[error("missing array schema: {context}")]
    MissingSchema { context: String },
}

/// Renders a schema-driven repeating list over a backing collection
pub struct ListRenderer {
    renderer: FieldRenderer,
    options: ComposerOptions,
    pattern: Pattern,
    empty_message: String,
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ListRenderer {
    pub fn new() -> Self {
        Self {
            renderer: FieldRenderer::new(),
            options: ComposerOptions::default(),
            pattern: Pattern::Editable,
            empty_message: "no entries".to_string(),
        }
    }

    pub fn with_options(mut self, options: ComposerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Render the full list.
    ///
    /// The placeholder branch is taken exactly when the collection is empty.
    #[instrument(skip(self, schema, collection), fields(len = collection.len()))]
    pub fn render(
        &self,
        name: &str,
        schema: &SchemaNode,
        collection: &[Value],
    ) -> EvalResult<VNode> {
        if schema.ty != SchemaType::Array {
            return Err(EvalError::MissingSchema {
                context: format!("field '{name}' is not backed by an array schema"),
            });
        }

        let mut list = VNode::field(name);
        if let Some(component) = &schema.component {
            list = list.with_component(component.clone());
        }
        if let Some(title) = &schema.title {
            list = list.with_title(title.clone());
        }

        if collection.is_empty() {
            debug!("collection empty, rendering placeholder");
            return Ok(list.with_child(VNode::placeholder(self.empty_message.clone())));
        }

        let composer = ItemComposer::new(&self.renderer).with_options(self.options.clone());
        let controls_admitted = self.pattern.allows_mutation();
        let addition = schema.addition_child();

        let mut items = Vec::with_capacity(collection.len());
        for index in 0..collection.len() {
            let Some(item_schema) = schema.item_at(index) else {
                warn!(index, "no item schema for index, skipping entry");
                continue;
            };
            let views = composer.compose(index, item_schema);

            let mut item = VNode::field(index.to_string());
            item = item.with_children(views.title);
            if controls_admitted {
                if index == 0 {
                    if let Some((key, node)) = addition {
                        item = item.with_child(self.renderer.render(node, key));
                    }
                } else {
                    item = item.with_children(views.operations);
                }
            }
            item = item.with_children(views.content);
            items.push(item);
        }

        Ok(list.with_children(items))
    }
}
