//! The Collection-of-Lists store: the top-level model of the application.
//!
//! Every operation follows the same discipline: mutate the in-memory
//! collection, persist the whole blob through the backend, then notify every
//! subscriber with a fresh snapshot. Notification happens even when the
//! mutation was a no-op (unknown id); subscribers see an identical re-render
//! rather than silence.
//!
//! The store performs NO input validation. An empty name passed directly to
//! [`CollectionStore::create`] is accepted; rejecting whitespace-only input
//! is the component layer's job, and that boundary is deliberate.

use crate::error::Result;
use crate::model::{Collection, RecordId, TodoList};
use crate::store::StorageBackend;
use chrono::Utc;
use std::sync::mpsc;

pub struct CollectionStore<S: StorageBackend> {
    backend: S,
    collection: Collection,
    listeners: Vec<mpsc::Sender<Collection>>,
}

impl<S: StorageBackend> CollectionStore<S> {
    /// Loads the collection once; an absent blob yields an empty collection.
    pub fn new(backend: S) -> Result<Self> {
        let collection = backend.load()?;
        Ok(Self {
            backend,
            collection,
            listeners: Vec::new(),
        })
    }

    /// Registers a subscriber. Each mutation sends the post-mutation
    /// collection; the receiver is dropped silently when it goes away.
    pub fn subscribe(&mut self) -> mpsc::Receiver<Collection> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Appends a new list. Name is taken as-is; `done` starts at
    /// `Some(false)`, both optional timestamps unset.
    pub fn create(&mut self, name: &str) -> Result<()> {
        self.collection.lists.push(TodoList::new(name.to_string()));
        self.commit()
    }

    /// Renames the first list with the given id and stamps `last_renamed`.
    /// Silent no-op when the id is unknown.
    pub fn rename(&mut self, id: RecordId, new_name: &str) -> Result<()> {
        if let Some(list) = self.collection.find_mut(id) {
            list.last_renamed = Some(Utc::now());
            list.name = new_name.to_string();
        }
        self.commit()
    }

    /// Removes the first list with the given id; no-op when absent.
    pub fn delete(&mut self, id: RecordId) -> Result<()> {
        if let Some(pos) = self.collection.lists.iter().position(|l| l.id == id) {
            self.collection.lists.remove(pos);
        }
        self.commit()
    }

    /// Flips the done flag on the matching list. An unset flag flips to
    /// `Some(true)`, same as the browser's `!undefined`.
    pub fn toggle(&mut self, id: RecordId) -> Result<()> {
        if let Some(list) = self.collection.find_mut(id) {
            list.done = Some(!list.done.unwrap_or(false));
        }
        self.commit()
    }

    /// Flips every list's done flag unconditionally. A pure per-list flip,
    /// not "set all to one value": applying it twice restores the original.
    pub fn toggle_all(&mut self) -> Result<()> {
        for list in &mut self.collection.lists {
            list.done = Some(!list.done.unwrap_or(false));
        }
        self.commit()
    }

    /// Removes every list whose done flag is strictly `Some(true)`.
    pub fn clear_done(&mut self) -> Result<()> {
        self.collection.lists.retain(|l| l.done != Some(true));
        self.commit()
    }

    fn commit(&mut self) -> Result<()> {
        self.backend.save(&self.collection)?;
        let snapshot = self.collection.clone();
        self.listeners.retain(|tx| tx.send(snapshot.clone()).is_ok());
        Ok(())
    }
}
