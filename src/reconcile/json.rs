use crate::error::{BifrostError, Result};
use serde_json::{Map, Value};
use std::path::Path;

pub fn already_applied(existing: &str, fragment: &str) -> bool {
    let (Ok(existing), Ok(fragment)) = (
        serde_json::from_str::<Value>(existing),
        serde_json::from_str::<Value>(fragment),
    ) else {
        return false;
    };

    deep_includes(&existing, &fragment)
}

pub fn apply(target: &Path, existing: &str, fragment: &str) -> Result<String> {
    let existing_tree = parse(target, existing)?;
    let fragment_tree = parse(target, fragment)?;

    let merged = deep_merge(&existing_tree, &fragment_tree);
    let mut rendered = serde_json::to_string_pretty(&merged).map_err(|e| BifrostError::ParseError {
        file: target.display().to_string(),
        message: e.to_string(),
    })?;

    if existing.ends_with('\n') {
        rendered.push('\n');
    }

    Ok(rendered)
}

fn parse(target: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| BifrostError::ParseError {
        file: target.display().to_string(),
        message: e.to_string(),
    })
}

/// Containment test over JSON trees.
///
/// Objects must contain every fragment key recursively, arrays must hold every
/// fragment element (any order, superset allowed), scalars and `null` compare
/// by value. Array elements are matched by whole-value equality only.
pub fn deep_includes(existing: &Value, fragment: &Value) -> bool {
    match fragment {
        Value::Object(wanted) => {
            let Value::Object(have) = existing else {
                return false;
            };
            wanted.iter().all(|(key, value)| {
                have.get(key)
                    .is_some_and(|current| deep_includes(current, value))
            })
        }
        Value::Array(wanted) => {
            let Value::Array(have) = existing else {
                return false;
            };
            wanted
                .iter()
                .all(|item| have.iter().any(|current| values_equal(current, item)))
        }
        scalar => values_equal(existing, scalar),
    }
}

/// Asymmetric recursive merge: `source` wins on scalars, objects merge key by
/// key, arrays are unioned target-first. Keys only in `target` are kept.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => Value::Object(merge_objects(target, source)),
        (Value::Array(target), Value::Array(source)) => Value::Array(union_arrays(target, source)),
        (_, source) => source.clone(),
    }
}

fn merge_objects(target: &Map<String, Value>, source: &Map<String, Value>) -> Map<String, Value> {
    let mut output = target.clone();

    for (key, value) in source {
        let merged = match (target.get(key), value) {
            (Some(current @ Value::Object(_)), Value::Object(_)) => deep_merge(current, value),
            (Some(Value::Array(current)), Value::Array(incoming)) => {
                Value::Array(union_arrays(current, incoming))
            }
            _ => value.clone(),
        };
        output.insert(key.clone(), merged);
    }

    output
}

fn union_arrays(target: &[Value], source: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(target.len() + source.len());
    for item in target.iter().chain(source) {
        if !out.iter().any(|seen| values_equal(seen, item)) {
            out.push(item.clone());
        }
    }
    out
}

/// Structural equality where `1` and `1.0` are the same number.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| values_equal(l, r)))
        }
        _ => a == b,
    }
}
