use crate::role::OperationRole;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field kind of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    /// Transparent container: carries properties but no data of its own
    Void,
}

/// A named child of an object or void node. Declaration order is preserved
/// and is meaningful (default synthesis and rendering scan in order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub node: SchemaNode,
}

/// Item schema of an array node: one schema for every entry, or a positional
/// tuple of schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaItems {
    Single(Box<SchemaNode>),
    Tuple(Vec<SchemaNode>),
}

impl SchemaItems {
    /// Item schema for a concrete index. A tuple falls back to its first
    /// entry when the index runs past the declared schemas.
    pub fn at(&self, index: usize) -> Option<&SchemaNode> {
        match self {
            SchemaItems::Single(node) => Some(node),
            SchemaItems::Tuple(nodes) => nodes.get(index).or_else(|| nodes.first()),
        }
    }

    /// The schema new insertions are synthesized from.
    pub fn head(&self) -> Option<&SchemaNode> {
        self.at(0)
    }
}

/// Declarative description of one field: its type, the component that renders
/// it, and its nested structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub ty: SchemaType,

    /// Identifier of the component that renders this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Structural role assigned at construction time. When present it takes
    /// precedence over marker matching on `component`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<OperationRole>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Explicit default for values synthesized from this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Named children. Only meaningful when `ty` is `Object` or `Void`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    /// Per-entry schema. Only meaningful when `ty` is `Array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaItems>,
}

impl SchemaNode {
    pub fn new(ty: SchemaType) -> Self {
        Self {
            ty,
            component: None,
            role: None,
            title: None,
            default: None,
            properties: Vec::new(),
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    pub fn array() -> Self {
        Self::new(SchemaType::Array)
    }

    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    pub fn void() -> Self {
        Self::new(SchemaType::Void)
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_role(mut self, role: OperationRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.push(Property {
            name: name.into(),
            node,
        });
        self
    }

    pub fn with_items(mut self, items: SchemaNode) -> Self {
        self.items = Some(SchemaItems::Single(Box::new(items)));
        self
    }

    pub fn with_tuple_items(mut self, items: Vec<SchemaNode>) -> Self {
        self.items = Some(SchemaItems::Tuple(items));
        self
    }

    /// Look up a direct child by name
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| &property.node)
    }

    /// Item schema for a concrete collection index
    pub fn item_at(&self, index: usize) -> Option<&SchemaNode> {
        self.items.as_ref().and_then(|items| items.at(index))
    }

    /// The addition control of an array node, declared among its own
    /// properties next to `items` (not inside the item schema). The last
    /// declared match wins.
    pub fn addition_child(&self) -> Option<(&str, &SchemaNode)> {
        self.properties
            .iter()
            .filter(|property| crate::role::classify(&property.node) == OperationRole::Addition)
            .last()
            .map(|property| (property.name.as_str(), &property.node))
    }
}
