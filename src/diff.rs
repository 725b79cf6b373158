use serde_json::Value;
use std::collections::BTreeSet;

// Collect every key path, nested objects included, joined with '.'
pub fn collect_keys(v: &Value) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut stack: Vec<(Option<String>, &Value)> = vec![(None, v)];
    while let Some((prefix, node)) = stack.pop() {
        let Value::Object(obj) = node else { continue };
        for (k, val) in obj.iter() {
            let key = match prefix.as_deref() {
                Some(p) => format!("{}.{}", p, k),
                None => k.clone(),
            };
            if val.is_object() {
                stack.push((Some(key.clone()), val));
            }
            keys.insert(key);
        }
    }
    keys
}

/// Keys present in `reference` but absent from `target`, sorted.
pub fn missing_keys(reference: &BTreeSet<String>, target: &BTreeSet<String>) -> Vec<String> {
    // BTreeSet iterates in order, so the difference is already sorted
    reference.difference(target).cloned().collect()
}
