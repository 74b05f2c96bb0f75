use crate::node::SchemaNode;
use serde::{Deserialize, Serialize};

/// Structural purpose of a schema node inside a repeating-item layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationRole {
    /// Control that inserts a new item
    Addition,
    /// Control that deletes the item it belongs to
    Remove,
    /// Control that duplicates the item it belongs to
    Copy,
    /// Control that swaps the item with its predecessor
    MoveUp,
    /// Control that swaps the item with its successor
    MoveDown,
    /// Positional label rendered in the item header
    Index,
    /// Anything else: ordinary data-bearing content
    Content,
}

impl OperationRole {
    /// True for the five structural mutation controls
    pub fn is_operation(self) -> bool {
        matches!(
            self,
            OperationRole::Addition
                | OperationRole::Remove
                | OperationRole::Copy
                | OperationRole::MoveUp
                | OperationRole::MoveDown
        )
    }
}

/// Marker substrings checked against a component identifier. The order is a
/// compatibility constraint: an identifier containing two markers resolves to
/// the earlier entry, and existing schemas rely on that tie-break.
const MARKERS: &[(&str, OperationRole)] = &[
    ("Addition", OperationRole::Addition),
    ("Remove", OperationRole::Remove),
    ("Copy", OperationRole::Copy),
    ("MoveDown", OperationRole::MoveDown),
    ("MoveUp", OperationRole::MoveUp),
    ("Index", OperationRole::Index),
];

/// Classify a schema node into its structural role.
///
/// An explicit `role` tag assigned at construction wins. Nodes that arrive
/// with only a component identifier fall back to case-sensitive substring
/// matching against the fixed markers; anything unmatched is `Content`.
pub fn classify(node: &SchemaNode) -> OperationRole {
    if let Some(role) = node.role {
        return role;
    }
    let Some(component) = node.component.as_deref() else {
        return OperationRole::Content;
    };
    for (marker, role) in MARKERS {
        if component.contains(marker) {
            return *role;
        }
    }
    OperationRole::Content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_component(component: &str) -> SchemaNode {
        SchemaNode::void().with_component(component)
    }

    #[test]
    fn classifies_each_marker() {
        assert_eq!(
            classify(&with_component("List.Addition")),
            OperationRole::Addition
        );
        assert_eq!(
            classify(&with_component("List.Remove")),
            OperationRole::Remove
        );
        assert_eq!(classify(&with_component("List.Copy")), OperationRole::Copy);
        assert_eq!(
            classify(&with_component("List.MoveUp")),
            OperationRole::MoveUp
        );
        assert_eq!(
            classify(&with_component("List.MoveDown")),
            OperationRole::MoveDown
        );
        assert_eq!(
            classify(&with_component("List.Index")),
            OperationRole::Index
        );
    }

    #[test]
    fn unmatched_and_absent_identifiers_are_content() {
        assert_eq!(classify(&with_component("Input")), OperationRole::Content);
        assert_eq!(classify(&SchemaNode::string()), OperationRole::Content);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify(&with_component("remove")), OperationRole::Content);
    }

    #[test]
    fn classifier_priority_order_is_fixed() {
        // Ambiguous identifiers resolve to the first marker in priority order.
        assert_eq!(
            classify(&with_component("AdditionRemove")),
            OperationRole::Addition
        );
        assert_eq!(
            classify(&with_component("CopyRemove")),
            OperationRole::Remove
        );
        assert_eq!(
            classify(&with_component("MoveUpMoveDown")),
            OperationRole::MoveDown
        );
    }

    #[test]
    fn explicit_role_tag_wins_over_marker() {
        let node = with_component("List.Remove").with_role(OperationRole::Index);
        assert_eq!(classify(&node), OperationRole::Index);
    }

    #[test]
    fn classification_is_idempotent() {
        let node = with_component("List.MoveDown");
        assert_eq!(classify(&node), classify(&node));
    }
}
