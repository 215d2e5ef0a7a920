use super::{Delay, SettleQueue, ViewHost};
use crate::collection::CollectionStore;
use crate::error::Result;
use crate::model::{Collection, RecordId};
use crate::store::StorageBackend;
use crate::view::{CollectionView, Filter};
use std::sync::mpsc;

/// Everything the host can ask of the lists overview.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionIntent {
    Create(String),
    Rename(RecordId, String),
    Delete(RecordId),
    Toggle(RecordId),
    ToggleAll,
    ClearDone,
    ConfirmClear,
    CancelClear,
    SetFilter(Filter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClearState {
    Idle,
    AwaitingConfirmation,
}

/// Mediator for the Collection-of-Lists component.
pub struct CollectionComponent<S: StorageBackend, H: ViewHost<View = CollectionView>> {
    store: CollectionStore<S>,
    host: H,
    filter: Filter,
    changes: mpsc::Receiver<Collection>,
    last_seen: Collection,
    settle: SettleQueue,
    clear_state: ClearState,
}

impl<S: StorageBackend, H: ViewHost<View = CollectionView>> CollectionComponent<S, H> {
    /// Subscribes to the store and mounts the initial view.
    pub fn new(mut store: CollectionStore<S>, host: H) -> Self {
        let changes = store.subscribe();
        let last_seen = store.collection().clone();
        let mut component = Self {
            store,
            host,
            filter: Filter::default(),
            changes,
            last_seen,
            settle: SettleQueue::new(),
            clear_state: ClearState::Idle,
        };
        component.render();
        component
    }

    pub fn dispatch(&mut self, intent: CollectionIntent) -> Result<()> {
        match intent {
            CollectionIntent::Create(name) => {
                let name = name.trim();
                if name.is_empty() {
                    // Rejected here; the store itself would accept it
                    self.host.focus_input();
                    return Ok(());
                }
                self.store.create(name)?;
            }
            CollectionIntent::Rename(id, name) => {
                let name = name.trim();
                if name.is_empty() {
                    self.host.focus_input();
                    return Ok(());
                }
                self.store.rename(id, name)?;
            }
            CollectionIntent::Delete(id) => self.store.delete(id)?,
            CollectionIntent::Toggle(id) => {
                // Optimistic visual flip now, authoritative commit after the
                // settle delay. The commit-triggered render confirms the
                // flip or flips it back.
                self.host.flip_row(id);
                self.settle.schedule(Delay::Short, id);
            }
            CollectionIntent::ToggleAll => self.store.toggle_all()?,
            CollectionIntent::ClearDone => {
                if self.clear_state == ClearState::Idle {
                    self.clear_state = ClearState::AwaitingConfirmation;
                    self.host.prompt_clear();
                }
            }
            CollectionIntent::ConfirmClear => {
                if self.clear_state == ClearState::AwaitingConfirmation {
                    self.clear_state = ClearState::Idle;
                    self.store.clear_done()?;
                }
            }
            CollectionIntent::CancelClear => self.clear_state = ClearState::Idle,
            CollectionIntent::SetFilter(filter) => {
                // The one render trigger without a store round trip: reuse
                // the last snapshot.
                self.filter = filter;
                self.render();
            }
        }
        self.drain_changes();
        Ok(())
    }

    /// Advances the settle clock and commits whatever toggles came due.
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

    pub fn awaiting_clear_confirmation(&self) -> bool {
        self.clear_state == ClearState::AwaitingConfirmation
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &CollectionStore<S> {
        &self.store
    }

    fn drain_changes(&mut self) {
        while let Ok(snapshot) = self.changes.try_recv() {
            self.last_seen = snapshot;
            self.render();
        }
    }

    fn render(&mut self) {
        let view = CollectionView::build(&self.last_seen, self.filter);
        self.host.mount(&view);
        self.host.focus_input();
    }
}
