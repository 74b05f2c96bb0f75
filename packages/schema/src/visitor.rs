use crate::node::{Property, SchemaItems, SchemaNode};

/// Visitor pattern for traversing schema trees immutably
///
/// Default implementations walk the entire tree; override specific visit_*
/// methods to act on nodes of interest. Properties are visited in declaration
/// order, then array items.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &SchemaNode) {
        walk_node(self, node);
    }

    fn visit_property(&mut self, property: &Property) {
        walk_property(self, property);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &SchemaNode) {
    for property in &node.properties {
        visitor.visit_property(property);
    }
    match &node.items {
        Some(SchemaItems::Single(item)) => visitor.visit_node(item),
        Some(SchemaItems::Tuple(items)) => {
            for item in items {
                visitor.visit_node(item);
            }
        }
        None => {}
    }
}

pub fn walk_property<V: Visitor>(visitor: &mut V, property: &Property) {
    visitor.visit_node(&property.node);
}
