//! Schema recursion runtime.
//!
//! The host form engine owns the real recursion machinery; this is the
//! in-crate substitute the renderer and composer are written against. It
//! supports the two modes the repeating-item engine needs: rendering a node
//! itself, and a properties-only mode that materializes just the named
//! children. A caller-supplied predicate scopes which direct children render.

use crate::vdom::VNode;
use formweave_schema::SchemaNode;
use tracing::trace;

/// Options controlling one recursion step
#[derive(Default)]
pub struct RecursionOptions<'a> {
    /// Render only the node's named children, not the node itself
    pub only_render_properties: bool,
    /// Keep a direct child only when the predicate accepts it. Applies to
    /// direct children, not the whole subtree.
    pub filter: Option<&'a dyn Fn(&SchemaNode) -> bool>,
}

impl<'a> RecursionOptions<'a> {
    pub fn properties_only() -> Self {
        Self {
            only_render_properties: true,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: &'a dyn Fn(&SchemaNode) -> bool) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Renders schema nodes into the virtual form tree
#[derive(Debug, Default, Clone)]
pub struct FieldRenderer;

impl FieldRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a node and its whole subtree
    pub fn render(&self, schema: &SchemaNode, name: &str) -> VNode {
        self.render_node(schema, name, None)
    }

    /// Render a node under the given options, producing zero or more roots
    /// (properties-only mode yields one root per accepted child).
    pub fn render_with(
        &self,
        schema: &SchemaNode,
        name: &str,
        options: &RecursionOptions<'_>,
    ) -> Vec<VNode> {
        if options.only_render_properties {
            self.render_properties(schema, options.filter)
        } else {
            vec![self.render_node(schema, name, options.filter)]
        }
    }

    fn render_properties(
        &self,
        schema: &SchemaNode,
        filter: Option<&dyn Fn(&SchemaNode) -> bool>,
    ) -> Vec<VNode> {
        schema
            .properties
            .iter()
            .filter(|property| filter.map_or(true, |keep| keep(&property.node)))
            .map(|property| self.render_node(&property.node, &property.name, None))
            .collect()
    }

    fn render_node(
        &self,
        schema: &SchemaNode,
        name: &str,
        filter: Option<&dyn Fn(&SchemaNode) -> bool>,
    ) -> VNode {
        trace!(name, component = ?schema.component, "rendering field");
        let mut node = VNode::field(name);
        if let Some(component) = &schema.component {
            node = node.with_component(component.clone());
        }
        if let Some(title) = &schema.title {
            node = node.with_title(title.clone());
        }
        node.with_children(self.render_properties(schema, filter))
    }
}
