//! JSON tree operations shared by the in-process backends
//!
//! Both `MemoryStore` and `JsonFileStore` hold the whole document tree as one
//! `serde_json::Value` object and navigate slash-separated paths through it.
//! Overwrite semantics follow the document-database model: `set` replaces the
//! subtree at the path, creating (or overwriting) intermediate nodes as
//! objects on the way down.

use serde_json::{Map, Value};

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Read the value at `path`. Returns `None` if any segment is absent or a
/// non-object is traversed.
pub(crate) fn get_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments(path) {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Overwrite the value at `path`, materializing intermediate objects.
pub(crate) fn set_at(root: &mut Value, path: &str, value: Value) {
    let parts: Vec<&str> = segments(path).collect();
    if parts.is_empty() {
        *root = value;
        return;
    }

    let mut current = root;
    for segment in &parts[..parts.len() - 1] {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = current
            .as_object_mut()
            .expect("just materialized an object")
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    current
        .as_object_mut()
        .expect("just materialized an object")
        .insert(parts[parts.len() - 1].to_string(), value);
}

/// Remove the value at `path`. Absent paths are left untouched.
pub(crate) fn remove_at(root: &mut Value, path: &str) {
    let parts: Vec<&str> = segments(path).collect();
    if parts.is_empty() {
        return;
    }

    let mut current = root;
    for segment in &parts[..parts.len() - 1] {
        match current.as_object_mut().and_then(|o| o.get_mut(*segment)) {
            Some(next) => current = next,
            None => return,
        }
    }

    if let Some(obj) = current.as_object_mut() {
        obj.remove(parts[parts.len() - 1]);
    }
}

/// Order the children of a collection node by a numeric child field.
///
/// Children missing the field (or whose field is non-numeric) sort before all
/// children that have it. Ties break by key order ascending regardless of
/// direction, matching the deterministic key assignment of `push`.
pub(crate) fn ordered_children(
    collection: &Value,
    order_field: &str,
    limit: usize,
    descending: bool,
) -> Vec<(String, Value)> {
    let Some(children) = collection.as_object() else {
        return Vec::new();
    };

    let mut entries: Vec<(Option<f64>, String, Value)> = children
        .iter()
        .map(|(key, value)| {
            let order = value.get(order_field).and_then(Value::as_f64);
            (order, key.clone(), value.clone())
        })
        .collect();

    entries.sort_by(|(a_ord, a_key, _), (b_ord, b_key, _)| {
        let ord = match (a_ord, b_ord) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal),
        };
        let ord = if descending { ord.reverse() } else { ord };
        ord.then_with(|| a_key.cmp(b_key))
    });

    entries
        .into_iter()
        .take(limit)
        .map(|(_, key, value)| (key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get_nested() {
        let mut root = json!({});
        set_at(&mut root, "a/b/c", json!(42));

        assert_eq!(get_at(&root, "a/b/c"), Some(&json!(42)));
        assert_eq!(get_at(&root, "a/b"), Some(&json!({"c": 42})));
        assert!(get_at(&root, "a/b/missing").is_none());
    }

    #[test]
    fn test_set_replaces_subtree() {
        let mut root = json!({"a": {"b": 1, "keep": 2}});
        set_at(&mut root, "a/b", json!({"x": 3}));

        assert_eq!(root, json!({"a": {"b": {"x": 3}, "keep": 2}}));
    }

    #[test]
    fn test_set_overwrites_scalar_intermediate() {
        let mut root = json!({"a": 7});
        set_at(&mut root, "a/b", json!(1));

        assert_eq!(root, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_remove_leaf_and_absent() {
        let mut root = json!({"a": {"b": 1, "c": 2}});
        remove_at(&mut root, "a/b");
        assert_eq!(root, json!({"a": {"c": 2}}));

        // Absent path: no-op, no panic
        remove_at(&mut root, "a/missing/deeper");
        assert_eq!(root, json!({"a": {"c": 2}}));
    }

    #[test]
    fn test_empty_segments_ignored() {
        let mut root = json!({});
        set_at(&mut root, "/a//b/", json!(1));
        assert_eq!(get_at(&root, "a/b"), Some(&json!(1)));
    }

    #[test]
    fn test_ordered_children_ascending_with_ties() {
        let collection = json!({
            "k-b": {"timestamp": 100},
            "k-a": {"timestamp": 100},
            "k-c": {"timestamp": 50},
        });

        let ordered = ordered_children(&collection, "timestamp", 10, false);
        let keys: Vec<&str> = ordered.iter().map(|(k, _)| k.as_str()).collect();
        // Minimum timestamp first; the tie at 100 breaks by key order
        assert_eq!(keys, vec!["k-c", "k-a", "k-b"]);
    }

    #[test]
    fn test_ordered_children_missing_field_sorts_first() {
        let collection = json!({
            "k-1": {"timestamp": 10},
            "k-2": {},
        });

        let ordered = ordered_children(&collection, "timestamp", 1, false);
        assert_eq!(ordered[0].0, "k-2");
    }

    #[test]
    fn test_ordered_children_limit_and_descending() {
        let collection = json!({
            "k-1": {"timestamp": 1},
            "k-2": {"timestamp": 2},
            "k-3": {"timestamp": 3},
        });

        let ordered = ordered_children(&collection, "timestamp", 2, true);
        let keys: Vec<&str> = ordered.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["k-3", "k-2"]);
    }
}
