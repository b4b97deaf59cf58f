use serde_json::json;

use super::meta::{cache_key, index_entries, is_subset, meta_from, serialize_entry};

#[test]
fn nested_objects_flatten_to_dotted_paths() {
    let meta = meta_from(json!({
        "resource": { "kind": "schema", "ref": { "name": "Pet" } },
        "tags": ["a", "b"],
    }));

    let serialized: Vec<String> = index_entries(&meta).iter().map(serialize_entry).collect();

    assert!(serialized.contains(&r#"resource.kind:"schema""#.to_string()));
    assert!(serialized.contains(&r#"resource.ref.name:"Pet""#.to_string()));
    assert!(serialized.contains(&r#"tags:["a","b"]"#.to_string()));
    assert_eq!(serialized.len(), 3);
}

#[test]
fn cache_key_ignores_key_order() {
    let a = meta_from(json!({ "x": 1, "y": true }));
    let b = meta_from(json!({ "y": true, "x": 1 }));

    assert_eq!(
        cache_key(&index_entries(&a)),
        cache_key(&index_entries(&b))
    );
    assert_eq!(cache_key(&index_entries(&a)), "x:1|y:true");
}

#[test]
fn subset_compares_values() {
    let full = index_entries(&meta_from(json!({ "a": 1, "b": { "c": "d" } })));
    let partial = index_entries(&meta_from(json!({ "b": { "c": "d" } })));
    let other = index_entries(&meta_from(json!({ "a": 2 })));

    assert!(is_subset(&partial, &full));
    assert!(!is_subset(&full, &partial));
    assert!(!is_subset(&other, &full));
    assert!(is_subset(&[], &full));
}

#[test]
fn non_object_yields_empty_meta() {
    assert!(meta_from(json!("scalar")).is_empty());
}
