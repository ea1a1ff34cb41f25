//! In-memory entity collections.
//!
//! One `Store` instance exists per entity kind, held behind an
//! `Arc<RwLock<_>>` in the application state. Records keep insertion order,
//! which is also the default listing order; lookups are linear, fine at the
//! collection sizes this service is built for.

/// Anything stored in a [`Store`] exposes its string identifier.
pub trait Keyed {
    fn id(&self) -> &str;
}

#[derive(Debug, Default)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T: Keyed + Clone> Store<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a store pre-populated with seed records.
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn insert(&mut self, item: T) -> T {
        let stored = item.clone();
        self.items.push(item);
        stored
    }

    /// Applies `f` to the record with the given id, returning the updated
    /// record, or `None` if no record has that id.
    pub fn update<F>(&mut self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        f(item);
        Some(item.clone())
    }

    /// Removes the record with the given id. Returns `false` (and leaves the
    /// collection untouched) if the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec {
        id: String,
        value: i64,
    }

    impl Keyed for Rec {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn rec(id: &str, value: i64) -> Rec {
        Rec {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn insert_then_get_returns_equal_record() {
        let mut store = Store::new();
        let inserted = store.insert(rec("a1", 10));
        assert_eq!(store.get("a1"), Some(inserted));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = Store::new();
        store.insert(rec("a", 1));
        store.insert(rec("b", 2));
        store.insert(rec("c", 3));
        let ids: Vec<_> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_applies_in_place_and_returns_new_value() {
        let mut store = Store::new();
        store.insert(rec("a", 1));
        let updated = store.update("a", |r| r.value = 99).unwrap();
        assert_eq!(updated.value, 99);
        assert_eq!(store.get("a").unwrap().value, 99);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let mut store: Store<Rec> = Store::new();
        assert!(store.update("missing", |r| r.value = 1).is_none());
    }

    #[test]
    fn remove_then_get_is_none() {
        let mut store = Store::new();
        store.insert(rec("a", 1));
        assert!(store.remove("a"));
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn remove_unknown_id_leaves_collection_untouched() {
        let mut store = Store::new();
        store.insert(rec("a", 1));
        assert!(!store.remove("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn len_tracks_inserts_and_removes() {
        let mut store = Store::new();
        for i in 0..5 {
            store.insert(rec(&format!("id{i}"), i));
        }
        store.remove("id0");
        store.remove("id3");
        assert_eq!(store.len(), 3);
    }
}
