use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Virtual form tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// A materialized field, rendered by the named component
    Field {
        name: String,
        /// Component identifier the host maps to a concrete widget; `None`
        /// for purely structural nodes
        #[serde(skip_serializing_if = "Option::is_none", default)]
        component: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        title: Option<String>,
        #[serde(skip_serializing_if = "HashMap::is_empty", default)]
        attributes: HashMap<String, String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        children: Vec<VNode>,
    },

    /// Plain text: labels, ordinals, prompts
    Text { content: String },

    /// Empty-state placeholder, emitted when the collection has no entries
    Placeholder { message: String },
}

impl VNode {
    pub fn field(name: impl Into<String>) -> Self {
        VNode::Field {
            name: name.into(),
            component: None,
            title: None,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn placeholder(message: impl Into<String>) -> Self {
        VNode::Placeholder {
            message: message.into(),
        }
    }

    pub fn with_component(mut self, new_component: impl Into<String>) -> Self {
        if let VNode::Field {
            ref mut component, ..
        } = self
        {
            *component = Some(new_component.into());
        }
        self
    }

    pub fn with_title(mut self, new_title: impl Into<String>) -> Self {
        if let VNode::Field { ref mut title, .. } = self {
            *title = Some(new_title.into());
        }
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Field {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Field {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Field {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Children of a field node; empty for leaves
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Field { children, .. } => children,
            _ => &[],
        }
    }

    pub fn component(&self) -> Option<&str> {
        match self {
            VNode::Field { component, .. } => component.as_deref(),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            VNode::Field { name, .. } => Some(name),
            _ => None,
        }
    }
}
