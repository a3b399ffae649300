use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

/// Process-wide read-through cache of raw entities, keyed by kind and id.
///
/// List fetches fill it, detail forms read through it for instant prefill,
/// and mutating operations keep it honest with explicit `insert`/`remove`.
/// It is provided once at the app root and passed to collaborators
/// explicitly, never reached for as ambient state.
#[derive(Clone, Copy)]
pub struct EntityCache {
    entries: RwSignal<HashMap<(&'static str, String), Value>>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get(&self, kind: &'static str, id: &str) -> Option<Value> {
        self.entries
            .with_untracked(|entries| entries.get(&(kind, id.to_string())).cloned())
    }

    pub fn insert(&self, kind: &'static str, id: &str, value: Value) {
        self.entries.update_untracked(|entries| {
            entries.insert((kind, id.to_string()), value);
        });
    }

    pub fn remove(&self, kind: &'static str, id: &str) {
        self.entries.update_untracked(|entries| {
            entries.remove(&(kind, id.to_string()));
        });
    }
}

impl Default for EntityCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_entity_cache() -> EntityCache {
    let cache = EntityCache::new();
    provide_context(cache);
    cache
}

pub fn use_entity_cache() -> EntityCache {
    use_context::<EntityCache>().expect("EntityCache not provided in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_get_remove_roundtrip() {
        let cache = EntityCache::new();
        cache.insert("category", "c-1", json!({"id": "c-1", "name": "Напитки"}));

        let cached = cache.get("category", "c-1").unwrap();
        assert_eq!(cached["name"], "Напитки");
        // other kinds do not collide on the same id
        assert!(cache.get("supplier", "c-1").is_none());

        cache.remove("category", "c-1");
        assert!(cache.get("category", "c-1").is_none());
    }

    #[test]
    fn deleted_entity_stays_gone_after_same_key_lookup() {
        let cache = EntityCache::new();
        cache.insert("supplier", "s-9", json!({"id": "s-9"}));
        cache.remove("supplier", "s-9");
        assert!(cache.get("supplier", "s-9").is_none());
    }
}
