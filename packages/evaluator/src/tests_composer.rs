/// Tests for per-item view composition
use crate::composer::{ComposerOptions, ItemComposer};
use crate::recursion::FieldRenderer;
use crate::vdom::VNode;
use formweave_schema::{OperationRole, SchemaNode};
use std::collections::HashSet;

fn item_schema() -> SchemaNode {
    SchemaNode::object()
        .with_property("ordinal", SchemaNode::void().with_component("List.Index"))
        .with_property("categoryId", SchemaNode::string().with_component("Select"))
        .with_property("detail", SchemaNode::string().with_component("DetailPanel"))
        .with_property("remove", SchemaNode::void().with_component("List.Remove"))
        .with_property("up", SchemaNode::void().with_component("List.MoveUp"))
        .with_property("down", SchemaNode::void().with_component("List.MoveDown"))
}

fn field_names(nodes: &[VNode]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(VNode::name)
        .map(str::to_string)
        .collect()
}

#[test]
fn views_partition_the_direct_children() {
    let renderer = FieldRenderer::new();
    let composer = ItemComposer::new(&renderer);
    let schema = item_schema();
    let views = composer.compose(0, &schema);

    let title = field_names(&views.title);
    let operations = field_names(&views.operations);
    // The content view renders the item node itself; its children carry the
    // surviving properties.
    assert_eq!(views.content.len(), 1);
    let content = field_names(views.content[0].children());

    let mut seen = HashSet::new();
    for name in title.iter().chain(&operations).chain(&content) {
        assert!(seen.insert(name.clone()), "child '{name}' appears twice");
    }

    let all: HashSet<String> = schema
        .properties
        .iter()
        .map(|property| property.name.clone())
        .collect();
    assert_eq!(seen, all);
}

#[test]
fn title_view_keeps_index_components_and_ordinal() {
    let renderer = FieldRenderer::new();
    let composer = ItemComposer::new(&renderer);
    let views = composer.compose(2, &item_schema());

    assert_eq!(views.title[0], VNode::text("#3"));
    assert_eq!(views.title[1].component(), Some("List.Index"));
}

#[test]
fn label_is_appended_after_index_components() {
    let renderer = FieldRenderer::new();
    let composer = ItemComposer::new(&renderer).with_options(ComposerOptions {
        item_label: Some("secondary category".to_string()),
        show_ordinal: false,
    });
    let views = composer.compose(0, &item_schema());

    assert_eq!(views.title.len(), 2);
    assert_eq!(views.title[1], VNode::text("secondary category"));
}

#[test]
fn operations_view_collects_every_control_child() {
    let renderer = FieldRenderer::new();
    let composer = ItemComposer::new(&renderer);
    let schema = item_schema().with_property(
        "dup",
        SchemaNode::void().with_component("List.Copy"),
    );
    let views = composer.compose(0, &schema);

    assert_eq!(field_names(&views.operations), vec!["remove", "up", "down", "dup"]);
}

#[test]
fn explicit_role_tags_drive_the_partition() {
    // Components with neutral identifiers, roles assigned at construction.
    let schema = SchemaNode::object()
        .with_property(
            "pos",
            SchemaNode::void()
                .with_component("Badge")
                .with_role(OperationRole::Index),
        )
        .with_property("body", SchemaNode::string().with_component("Input"))
        .with_property(
            "delete",
            SchemaNode::void()
                .with_component("IconButton")
                .with_role(OperationRole::Remove),
        );

    let renderer = FieldRenderer::new();
    let composer = ItemComposer::new(&renderer);
    let views = composer.compose(0, &schema);

    assert_eq!(field_names(&views.title), vec!["pos"]);
    assert_eq!(field_names(&views.operations), vec!["delete"]);
    assert_eq!(field_names(views.content[0].children()), vec!["body"]);
}

#[test]
fn content_view_names_the_item_by_its_index() {
    let renderer = FieldRenderer::new();
    let composer = ItemComposer::new(&renderer);
    let views = composer.compose(4, &item_schema());
    assert_eq!(views.content[0].name(), Some("4"));
}
