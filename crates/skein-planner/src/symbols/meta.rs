//! Symbol metadata and its flattened index form.
//!
//! Metadata is an arbitrary JSON object. For indexing it is flattened into
//! `(dotted.path, value)` entries: nested objects recurse, everything else
//! (arrays, strings, numbers, booleans, null) is a leaf. An entry serializes
//! as `path:json`, and a filter's cache key is its sorted serialized entries
//! joined by `|`, so key order never matters.

use serde_json::Value;

pub type Meta = serde_json::Map<String, Value>;

/// Build metadata from a JSON value. Non-objects yield empty metadata.
pub fn meta_from(value: Value) -> Meta {
    match value {
        Value::Object(map) => map,
        _ => Meta::new(),
    }
}

pub(crate) type IndexEntry = (String, Value);

pub(crate) fn index_entries(meta: &Meta) -> Vec<IndexEntry> {
    let mut out = Vec::new();
    flatten("", meta, &mut out);
    out
}

fn flatten(prefix: &str, meta: &Meta, out: &mut Vec<IndexEntry>) {
    for (key, value) in meta {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten(&path, nested, out),
            leaf => out.push((path, leaf.clone())),
        }
    }
}

pub(crate) fn serialize_entry((path, value): &IndexEntry) -> String {
    format!("{path}:{value}")
}

pub(crate) fn serialize_value(value: &Value) -> String {
    value.to_string()
}

pub(crate) fn cache_key(entries: &[IndexEntry]) -> String {
    let mut parts: Vec<String> = entries.iter().map(serialize_entry).collect();
    parts.sort();
    parts.join("|")
}

/// Every entry of `sub` appears in `sup` with an equal value.
pub(crate) fn is_subset(sub: &[IndexEntry], sup: &[IndexEntry]) -> bool {
    sub.iter().all(|(path, value)| {
        sup.iter()
            .any(|(other_path, other_value)| other_path == path && other_value == value)
    })
}
