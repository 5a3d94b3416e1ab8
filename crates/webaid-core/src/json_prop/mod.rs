//! Dotted-path property lookup in JSON values and JSON files.
//!
//! `user.name` walks object keys (and array indices) one segment at a time.
//! Traversal uses a truthy chain: an intermediate segment that is absent or
//! falsy (`null`, `false`, `0`, `""`) ends the walk with no value. Only the
//! terminal segment may hold a falsy value.

mod loader;

pub use loader::{JsonLoader, JsonSource};

use serde_json::Value;

use crate::UtilError;

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Walk `property` (dot-separated, surrounding whitespace ignored) through `value`.
///
/// Returns `None` for a blank path, a falsy root, a missing segment, or a
/// falsy intermediate value.
pub fn get_property<'a>(value: &'a Value, property: &str) -> Option<&'a Value> {
    let property = property.trim();
    if property.is_empty() || !is_truthy(value) {
        return None;
    }

    let mut segments = property.split('.').peekable();
    let mut current = value;
    while let Some(segment) = segments.next() {
        let next = child(current, segment)?;
        if segments.peek().is_some() && !is_truthy(next) {
            return None;
        }
        current = next;
    }
    Some(current)
}

/// [`JsonLoader::get_json_prop`] with no root directory: only in-memory
/// values and absolute file paths resolve.
pub fn get_json_prop<'a>(
    source: impl Into<JsonSource<'a>>,
    property: &str,
) -> Result<Option<Value>, UtilError> {
    JsonLoader::default().get_json_prop(source, property)
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
