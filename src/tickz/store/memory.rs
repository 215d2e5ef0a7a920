use super::StorageBackend;
use crate::error::{Result, TickzError};
use crate::model::Collection;

/// In-memory storage for testing.
///
/// Keeps the serialized blob, not the typed collection, so every load/save
/// goes through the real codec exactly like the file backend does.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw persisted blob, if anything was saved yet.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl StorageBackend for InMemoryStore {
    fn load(&self) -> Result<Collection> {
        match &self.blob {
            None => Ok(Collection::default()),
            Some(blob) => serde_json::from_str(blob).map_err(TickzError::Serialization),
        }
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.blob = Some(serde_json::to_string(collection).map_err(TickzError::Serialization)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Item, TodoList};

    /// A backend pre-seeded with the given collection.
    pub fn seeded(collection: &Collection) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save(collection).expect("seeding cannot fail");
        store
    }

    /// A backend holding one list per name, each list empty.
    ///
    /// Millisecond ids collide when records are created back to back, so the
    /// fixture spreads them to keep every record individually addressable.
    pub fn with_lists(names: &[&str]) -> InMemoryStore {
        let lists = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let mut list = TodoList::new((*n).into());
                list.id += i as i64;
                list
            })
            .collect();
        seeded(&Collection { lists })
    }

    /// A backend holding one list with the given (text, done) items.
    /// Returns the backend and the list id.
    pub fn with_items(name: &str, items: &[(&str, Option<bool>)]) -> (InMemoryStore, i64) {
        let mut list = TodoList::new(name.into());
        for (i, (text, done)) in items.iter().enumerate() {
            let mut item = Item::new((*text).into());
            item.id += i as i64;
            item.done = *done;
            list.items.push(item);
        }
        let id = list.id;
        let collection = Collection { lists: vec![list] };
        (seeded(&collection), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoList;

    #[test]
    fn unsaved_store_loads_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.blob().is_none());
    }

    #[test]
    fn round_trips_through_the_real_codec() {
        let collection = Collection {
            lists: vec![TodoList::new("A".into()), TodoList::new("B".into())],
        };
        let mut store = InMemoryStore::new();
        store.save(&collection).unwrap();
        assert_eq!(store.load().unwrap(), collection);
    }
}
