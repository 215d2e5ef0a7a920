use super::{Delay, SettleQueue, ViewHost};
use crate::error::Result;
use crate::list::{ListSnapshot, ListStore};
use crate::model::RecordId;
use crate::store::StorageBackend;
use crate::view::{Filter, ListView};
use std::sync::mpsc;

/// Everything the host can ask of a single list.
///
/// `Clear` is direct: the confirmation step exists at the collection level
/// only.
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    Add(String),
    Edit(RecordId, String),
    Remove(RecordId),
    Toggle(RecordId),
    ToggleAll,
    Clear,
    SetFilter(Filter),
}

/// Mediator for the List-of-Items component.
pub struct ListComponent<S: StorageBackend, H: ViewHost<View = ListView>> {
    store: ListStore<S>,
    host: H,
    filter: Filter,
    changes: mpsc::Receiver<ListSnapshot>,
    last_seen: ListSnapshot,
    settle: SettleQueue,
}

impl<S: StorageBackend, H: ViewHost<View = ListView>> ListComponent<S, H> {
    pub fn new(mut store: ListStore<S>, host: H) -> Self {
        let changes = store.subscribe();
        let last_seen = store.snapshot();
        let mut component = Self {
            store,
            host,
            filter: Filter::default(),
            changes,
            last_seen,
            settle: SettleQueue::new(),
        };
        component.render();
        component
    }

    pub fn dispatch(&mut self, intent: ListIntent) -> Result<()> {
        match intent {
            ListIntent::Add(text) => {
                let text = text.trim();
                if text.is_empty() {
                    self.host.focus_input();
                    return Ok(());
                }
                self.store.add(text)?;
            }
            ListIntent::Edit(id, text) => {
                let text = text.trim();
                if text.is_empty() {
                    self.host.focus_input();
                    return Ok(());
                }
                self.store.update(id, text)?;
            }
            ListIntent::Remove(id) => self.store.delete(id)?,
            ListIntent::Toggle(id) => {
                self.host.flip_row(id);
                self.settle.schedule(Delay::Short, id);
            }
            ListIntent::ToggleAll => self.store.toggle_all()?,
            ListIntent::Clear => self.store.clear_done()?,
            ListIntent::SetFilter(filter) => {
                self.filter = filter;
                self.render();
            }
        }
        self.drain_changes();
        Ok(())
    }

    pub fn advance(&mut self, ms: u64) -> Result<()> {
        for id in self.settle.advance(ms) {
            self.store.toggle(id)?;
        }
        self.drain_changes();
        Ok(())
    }

    pub fn settle_pending(&self) -> bool {
        !self.settle.is_empty()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &ListStore<S> {
        &self.store
    }

    fn drain_changes(&mut self) {
        while let Ok(snapshot) = self.changes.try_recv() {
            self.last_seen = snapshot;
            self.render();
        }
    }

    fn render(&mut self) {
        let view = ListView::build(&self.last_seen, self.filter);
        self.host.mount(&view);
        self.host.focus_input();
    }
}
