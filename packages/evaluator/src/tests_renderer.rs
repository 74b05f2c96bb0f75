/// Tests for whole-list rendering
use crate::renderer::{EvalError, ListRenderer};
use crate::vdom::VNode;
use formweave_schema::{Pattern, SchemaNode};
use serde_json::{json, Value};

fn list_schema() -> SchemaNode {
    SchemaNode::array()
        .with_component("RepeatList")
        .with_title("Categories")
        .with_items(
            SchemaNode::object()
                .with_property("categoryId", SchemaNode::string().with_component("Select"))
                .with_property("remove", SchemaNode::void().with_component("List.Remove")),
        )
        .with_property(
            "add",
            SchemaNode::void()
                .with_component("List.Addition")
                .with_title("add entry"),
        )
}

fn components(nodes: &[VNode]) -> Vec<&str> {
    nodes.iter().filter_map(VNode::component).collect()
}

#[test]
fn non_array_schema_is_a_fatal_configuration_error() {
    let renderer = ListRenderer::new();
    let result = renderer.render("items", &SchemaNode::object(), &[]);
    assert!(matches!(result, Err(EvalError::MissingSchema { .. })));
}

// The observed behavior this engine replaces had an unreachable empty-state
// branch; the corrected contract is pinned here: placeholder exactly when
// the collection is empty.
#[test]
fn renders_placeholder_only_when_empty() {
    let renderer = ListRenderer::new().with_empty_message("nothing yet");
    let schema = list_schema();

    let empty = renderer.render("items", &schema, &[]).unwrap();
    assert_eq!(
        empty.children(),
        &[VNode::placeholder("nothing yet")]
    );

    let populated = renderer
        .render("items", &schema, &[json!({"categoryId": "1"})])
        .unwrap();
    assert!(!populated
        .children()
        .iter()
        .any(|child| matches!(child, VNode::Placeholder { .. })));
}

#[test]
fn addition_renders_at_index_zero_only() {
    let renderer = ListRenderer::new();
    let collection = vec![json!({}), json!({}), json!({})];
    let list = renderer.render("items", &list_schema(), &collection).unwrap();

    assert_eq!(list.children().len(), 3);
    let first = &list.children()[0];
    assert!(components(first.children()).contains(&"List.Addition"));
    assert!(!components(first.children()).contains(&"List.Remove"));

    for item in &list.children()[1..] {
        assert!(components(item.children()).contains(&"List.Remove"));
        assert!(!components(item.children()).contains(&"List.Addition"));
    }
}

#[test]
fn last_declared_addition_wins() {
    let schema = list_schema().with_property(
        "add2",
        SchemaNode::void()
            .with_component("List.Addition")
            .with_title("second"),
    );
    let renderer = ListRenderer::new();
    let list = renderer.render("items", &schema, &[json!({})]).unwrap();

    let addition = list.children()[0]
        .children()
        .iter()
        .find(|child| child.component() == Some("List.Addition"))
        .unwrap();
    assert_eq!(addition.name(), Some("add2"));
}

#[test]
fn read_only_pattern_hides_all_mutation_controls() {
    let renderer = ListRenderer::new().with_pattern(Pattern::ReadOnly);
    let collection = vec![json!({}), json!({})];
    let list = renderer.render("items", &list_schema(), &collection).unwrap();

    for item in list.children() {
        assert!(!components(item.children()).contains(&"List.Addition"));
        assert!(!components(item.children()).contains(&"List.Remove"));
    }
}

#[test]
fn disabled_pattern_still_renders_controls() {
    let renderer = ListRenderer::new().with_pattern(Pattern::Disabled);
    let collection = vec![json!({}), json!({})];
    let list = renderer.render("items", &list_schema(), &collection).unwrap();

    assert!(components(list.children()[0].children()).contains(&"List.Addition"));
    assert!(components(list.children()[1].children()).contains(&"List.Remove"));
}

#[test]
fn tuple_items_use_positional_schema_with_head_fallback() {
    let schema = SchemaNode::array().with_tuple_items(vec![
        SchemaNode::object().with_property("first", SchemaNode::string().with_component("Input")),
        SchemaNode::object().with_property("second", SchemaNode::string().with_component("Select")),
    ]);
    let renderer = ListRenderer::new();
    let collection = vec![json!({}), json!({}), json!({})];
    let list = renderer.render("items", &schema, &collection).unwrap();

    let content_component = |item: &VNode| {
        item.children()
            .iter()
            .find_map(|child| child.children().first())
            .and_then(VNode::component)
            .map(str::to_string)
    };
    assert_eq!(content_component(&list.children()[0]), Some("Input".into()));
    assert_eq!(content_component(&list.children()[1]), Some("Select".into()));
    // Index 2 runs past the tuple and falls back to the first entry.
    assert_eq!(content_component(&list.children()[2]), Some("Input".into()));
}

#[test]
fn entries_without_item_schema_are_skipped() {
    let schema = SchemaNode::array().with_component("RepeatList");
    let renderer = ListRenderer::new();
    let list = renderer
        .render("items", &schema, &[json!({}), json!({})])
        .unwrap();
    assert!(list.children().is_empty());
}

#[test]
fn null_item_values_render_without_content_loss() {
    // A value synthesized to nothing is a legal entry; rendering is keyed
    // off the schema, not the value.
    let renderer = ListRenderer::new();
    let collection = vec![Value::Null];
    let list = renderer.render("items", &list_schema(), &collection).unwrap();
    assert_eq!(list.children().len(), 1);
}

#[test]
fn item_count_always_equals_collection_length() {
    let renderer = ListRenderer::new();
    for len in [1usize, 2, 5, 9] {
        let collection: Vec<Value> = (0..len).map(|i| json!({ "categoryId": i })).collect();
        let list = renderer.render("items", &list_schema(), &collection).unwrap();
        assert_eq!(list.children().len(), len);
    }
}
