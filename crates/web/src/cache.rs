use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

/// Application-lifetime cache of list payloads, keyed by collection name plus
/// filter parameters (e.g. `routines:<competition-id>`). Mutating handlers
/// invalidate whole collections rather than patching entries in place; the
/// next read refetches from the database.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

/// Build a cache key from a collection name and its filter parameters.
pub fn key(collection: &str, params: &[&str]) -> String {
    if params.is_empty() {
        collection.to_string()
    } else {
        format!("{}:{}", collection, params.join(":"))
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    pub fn put(&self, key: &str, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }

    /// Drop every entry belonging to a collection: the bare collection key
    /// and all parameterized keys under it.
    pub fn invalidate(&self, collection: &str) {
        let prefix = format!("{}:", collection);
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|key, _| key != collection && !key.starts_with(&prefix));
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_key_with_and_without_params() {
        assert_eq!(key("athletes", &[]), "athletes");
        assert_eq!(key("routines", &["abc"]), "routines:abc");
        assert_eq!(key("events", &["female"]), "events:female");
    }

    #[test]
    fn test_get_returns_stored_payload() {
        let cache = QueryCache::new();
        cache.put("athletes", json!([{"first_name": "Anna"}]));

        assert_eq!(cache.get("athletes"), Some(json!([{"first_name": "Anna"}])));
        assert_eq!(cache.get("events"), None);
    }

    #[test]
    fn test_invalidate_drops_collection_and_parameterized_keys() {
        let cache = QueryCache::new();
        cache.put("routines", json!([]));
        cache.put("routines:comp-1", json!([1]));
        cache.put("routines:comp-2", json!([2]));
        cache.put("athletes", json!([3]));

        cache.invalidate("routines");

        assert_eq!(cache.get("routines"), None);
        assert_eq!(cache.get("routines:comp-1"), None);
        assert_eq!(cache.get("routines:comp-2"), None);
        assert_eq!(cache.get("athletes"), Some(json!([3])));
    }

    #[test]
    fn test_invalidate_does_not_match_other_collections_by_prefix() {
        let cache = QueryCache::new();
        cache.put("events", json!([1]));
        cache.put("events:female", json!([2]));

        cache.invalidate("event");

        assert_eq!(cache.get("events"), Some(json!([1])));
        assert_eq!(cache.get("events:female"), Some(json!([2])));
    }
}
