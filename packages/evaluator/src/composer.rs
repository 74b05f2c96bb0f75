//! Per-item view composition.
//!
//! Every collection index gets three disjoint views of the same item schema:
//! the header (index markers plus label), the operation controls, and the
//! content. The three views partition the schema's direct children — each
//! child lands in exactly one view.

use crate::recursion::{FieldRenderer, RecursionOptions};
use crate::vdom::VNode;
use formweave_schema::{classify, OperationRole, SchemaNode};
use serde::{Deserialize, Serialize};

/// Composition options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerOptions {
    /// Extra label appended to every item header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_label: Option<String>,
    /// Prefix each header with a 1-based ordinal
    #[serde(default = "default_show_ordinal")]
    pub show_ordinal: bool,
}

fn default_show_ordinal() -> bool {
    true
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            item_label: None,
            show_ordinal: true,
        }
    }
}

/// The three views of one item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemViews {
    pub title: Vec<VNode>,
    pub operations: Vec<VNode>,
    pub content: Vec<VNode>,
}

/// Composes the per-item views for a collection index
pub struct ItemComposer<'a> {
    renderer: &'a FieldRenderer,
    options: ComposerOptions,
}

impl<'a> ItemComposer<'a> {
    pub fn new(renderer: &'a FieldRenderer) -> Self {
        Self {
            renderer,
            options: ComposerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ComposerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    /// Compose the three views of the item at `index`
    pub fn compose(&self, index: usize, item_schema: &SchemaNode) -> ItemViews {
        let name = index.to_string();

        let mut title = Vec::new();
        if self.options.show_ordinal {
            title.push(VNode::text(format!("#{}", index + 1)));
        }
        let is_index = |child: &SchemaNode| classify(child) == OperationRole::Index;
        title.extend(self.renderer.render_with(
            item_schema,
            &name,
            &RecursionOptions::properties_only().with_filter(&is_index),
        ));
        if let Some(label) = &self.options.item_label {
            title.push(VNode::text(label.clone()));
        }

        let is_op = |child: &SchemaNode| classify(child).is_operation();
        let operations = self.renderer.render_with(
            item_schema,
            &name,
            &RecursionOptions::properties_only().with_filter(&is_op),
        );

        // Exact complement of the other two views
        let is_content = |child: &SchemaNode| {
            let role = classify(child);
            role != OperationRole::Index && !role.is_operation()
        };
        let content = self.renderer.render_with(
            item_schema,
            &name,
            &RecursionOptions {
                only_render_properties: false,
                filter: Some(&is_content),
            },
        );

        ItemViews {
            title,
            operations,
            content,
        }
    }
}
