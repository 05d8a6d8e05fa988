//! JSON rendering of a subtree, for debugging and snapshot tests.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::SlotRef;
use crate::property::PropertyValue;
use serde_json::{Map, Value, json};

/// Render `node` and its descendants.
///
/// Each node becomes an object with `kind`, an optional `range`, one entry per
/// scalar and one entry per slot (`null` for an empty optional slot, an array
/// for a list). Keys use the camelCase property names.
pub fn to_json(arena: &NodeArena, node: NodeIndex) -> Value {
    let Some(target) = arena.get(node) else {
        return Value::Null;
    };
    let mut object = Map::new();
    object.insert("kind".into(), Value::String(target.kind().name().into()));
    if let Some(range) = target.range() {
        object.insert("range".into(), json!({ "pos": range.pos, "end": range.end }));
    }
    for &tag in target.kind().scalars() {
        if let Some(value) = target.data().scalar(tag) {
            object.insert(tag.name().into(), scalar_to_json(&value));
        }
    }
    for (tag, slot) in target.data().slots() {
        let value = match slot {
            SlotRef::Single(child) => to_json(arena, child),
            SlotRef::List(list) => Value::Array(list.iter().map(|c| to_json(arena, c)).collect()),
        };
        object.insert(tag.name().into(), value);
    }
    Value::Object(object)
}

fn scalar_to_json(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Bool(b) => Value::Bool(*b),
        PropertyValue::Text(text) => Value::String(text.clone()),
        PropertyValue::Keyword(keyword) => Value::String(keyword.as_str().into()),
        PropertyValue::BinaryOperator(op) => Value::String(op.as_str().into()),
        PropertyValue::UnaryOperator(op) => Value::String(op.as_str().into()),
        PropertyValue::AssignOperator(op) => Value::String(op.as_str().into()),
        PropertyValue::Primitive(primitive) => Value::String(primitive.as_str().into()),
        PropertyValue::Node(node) => node.into_option().map_or(Value::Null, |n| json!(n.0)),
        PropertyValue::Range(range) => range.map_or(Value::Null, |r| json!({ "pos": r.pos, "end": r.end })),
    }
}
