//! Bolt value conversion.
//!
//! Centralizes the neo4rs property-access API so the store operations deal
//! only in wire-model types. Conversion to JSON is total: property shapes
//! the façade cannot represent come back as JSON null instead of erroring.

use neo4rs::{BoltBoolean, BoltFloat, BoltInteger, BoltList, BoltMap, BoltString, BoltType};
use serde_json::{Map, Number, Value};

use neogate_core::{Node, Relationship};

/// Convert a Bolt value into its JSON wire representation.
pub fn bolt_to_json(value: &BoltType) -> Value {
    match value {
        BoltType::Null(_) => Value::Null,
        BoltType::Boolean(b) => Value::Bool(b.value),
        BoltType::Integer(i) => Value::Number(Number::from(i.value)),
        BoltType::Float(f) => Number::from_f64(f.value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        BoltType::String(s) => Value::String(s.value.clone()),
        BoltType::List(l) => Value::Array(l.value.iter().map(bolt_to_json).collect()),
        BoltType::Map(m) => {
            let mut out = Map::new();
            for (key, entry) in &m.value {
                out.insert(key.value.clone(), bolt_to_json(entry));
            }
            Value::Object(out)
        }
        // Temporal, spatial, byte, and graph-entity values have no place in
        // a property map on this wire format.
        _ => Value::Null,
    }
}

/// Convert a JSON value into a Bolt value.
///
/// Returns `None` for JSON null: Neo4j cannot store null properties or null
/// list elements, so null entries are dropped by the callers.
pub fn json_to_bolt(value: &Value) -> Option<BoltType> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(BoltType::Boolean(BoltBoolean::new(*b))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(BoltType::Integer(BoltInteger::new(i)))
            } else {
                n.as_f64().map(|f| BoltType::Float(BoltFloat::new(f)))
            }
        }
        Value::String(s) => Some(BoltType::String(BoltString::new(s))),
        Value::Array(items) => {
            let mut list = BoltList::default();
            for item in items {
                if let Some(entry) = json_to_bolt(item) {
                    list.push(entry);
                }
            }
            Some(BoltType::List(list))
        }
        Value::Object(entries) => Some(BoltType::Map(props_to_bolt(entries))),
    }
}

/// Convert a JSON property map into a Bolt map parameter.
pub fn props_to_bolt(props: &Map<String, Value>) -> BoltMap {
    let mut map = BoltMap::default();
    for (key, value) in props {
        if let Some(entry) = json_to_bolt(value) {
            map.put(BoltString::new(key), entry);
        }
    }
    map
}

/// Map a result node onto the wire model.
pub fn node_to_wire(node: &neo4rs::Node) -> Node {
    let mut attributes = Map::new();
    for key in node.keys() {
        if let Ok(value) = node.get::<BoltType>(key) {
            attributes.insert(key.to_string(), bolt_to_json(&value));
        }
    }

    Node {
        id: node.id(),
        labels: node.labels().iter().map(|l| l.to_string()).collect(),
        attributes,
    }
}

/// Map a result relationship onto the wire model.
pub fn relation_to_wire(rel: &neo4rs::Relation) -> Relationship {
    let mut attributes = Map::new();
    for key in rel.keys() {
        if let Ok(value) = rel.get::<BoltType>(key) {
            attributes.insert(key.to_string(), bolt_to_json(&value));
        }
    }

    Relationship {
        rel_type: rel.typ().to_string(),
        attributes,
    }
}
