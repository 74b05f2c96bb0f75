use crate::node::{SchemaNode, SchemaType};
use serde_json::{Map, Value};

/// Derive the value a freshly inserted item starts with.
///
/// An explicit, non-null default wins and is deep-cloned so later mutation of
/// the schema-level default cannot leak into already inserted items. Without
/// one, the value is synthesized from the shape of the array's item schema
/// (tuple items use the first entry). `None` means no concrete default could
/// be produced; the caller still inserts, and rendering tolerates the hole.
pub fn synthesize(explicit: Option<&Value>, array_schema: Option<&SchemaNode>) -> Option<Value> {
    if let Some(value) = explicit {
        if !value.is_null() {
            return Some(value.clone());
        }
    }
    let target = array_schema?.items.as_ref()?.head()?;
    shape_default(target)
}

/// Blank value for a single schema node, derived purely from its type.
///
/// Void nodes are transparent containers, not data-bearing: they yield the
/// first property (in declaration order) whose own synthesis is defined.
pub fn shape_default(schema: &SchemaNode) -> Option<Value> {
    match schema.ty {
        SchemaType::Array => Some(Value::Array(Vec::new())),
        SchemaType::Object => Some(Value::Object(Map::new())),
        SchemaType::Void => schema
            .properties
            .iter()
            .find_map(|property| shape_default(&property.node)),
        _ => None,
    }
}
