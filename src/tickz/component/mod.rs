//! # Component Layer
//!
//! Mediators wire the stores to a host. The host raises intents; the mediator
//! validates them, runs them through the store (directly, or via the settle
//! queue for row toggles), then drains the store's change channel and mounts
//! a freshly built view for every notification. Mounting replaces the whole
//! region, so the host re-binds its input handlers to the new row
//! descriptors each time—mediators call `focus_input` after every mount to
//! restore the primary text entry.
//!
//! ## The Settle Delay
//!
//! A row toggle flips the host's visual immediately and commits to the store
//! only after a fixed delay, leaving room for the host's transition to play.
//! The delay is a logical clock, advanced by the host, not a thread or
//! timer: the [`SettleQueue`] holds `(due, id)` pairs and `advance` returns
//! whatever came due. There is no cancellation and no deduplication; a
//! second toggle inside the window queues a second commit, and both fire.

use crate::model::RecordId;

pub mod collection;
pub mod list;
pub mod preview;

pub use collection::{CollectionComponent, CollectionIntent};
pub use list::{ListComponent, ListIntent};
pub use preview::preview_list;

/// The two standard settle delays; the long one is twice the short one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    Short,
    Long,
}

pub const SETTLE_SHORT_MS: u64 = 250;

impl Delay {
    pub fn as_millis(self) -> u64 {
        match self {
            Delay::Short => SETTLE_SHORT_MS,
            Delay::Long => SETTLE_SHORT_MS * 2,
        }
    }
}

/// Pending toggle commits on a logical clock.
#[derive(Default)]
pub struct SettleQueue {
    now_ms: u64,
    pending: Vec<(u64, RecordId)>,
}

impl SettleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Delay, id: RecordId) {
        self.pending.push((self.now_ms + delay.as_millis(), id));
    }

    /// Moves the clock forward and returns the ids that came due, in
    /// scheduling order.
    pub fn advance(&mut self, ms: u64) -> Vec<RecordId> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due = Vec::new();
        self.pending.retain(|(at, id)| {
            if *at <= now {
                due.push(*id);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// The seam between a mediator and whatever UI hosts it.
///
/// `mount` receives a complete view value and replaces the visible region
/// with it. `flip_row` is the optimistic visual acknowledgment of a toggle,
/// applied before the store commit. `prompt_clear` asks the host to show the
/// clear-done confirmation; only the collection component uses it.
pub trait ViewHost {
    type View;

    fn mount(&mut self, view: &Self::View);
    fn flip_row(&mut self, id: RecordId);
    fn focus_input(&mut self);
    fn prompt_clear(&mut self) {}
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod recording {
    use super::*;

    /// A host that records everything the mediator does to it.
    pub struct RecordingHost<V> {
        pub mounts: Vec<V>,
        pub flips: Vec<RecordId>,
        pub focus_count: usize,
        pub clear_prompts: usize,
    }

    impl<V> Default for RecordingHost<V> {
        fn default() -> Self {
            Self {
                mounts: Vec::new(),
                flips: Vec::new(),
                focus_count: 0,
                clear_prompts: 0,
            }
        }
    }

    impl<V> RecordingHost<V> {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last_mount(&self) -> &V {
            self.mounts.last().expect("nothing mounted yet")
        }
    }

    impl<V: Clone> ViewHost for RecordingHost<V> {
        type View = V;

        fn mount(&mut self, view: &V) {
            self.mounts.push(view.clone());
        }

        fn flip_row(&mut self, id: RecordId) {
            self.flips.push(id);
        }

        fn focus_input(&mut self) {
            self.focus_count += 1;
        }

        fn prompt_clear(&mut self) {
            self.clear_prompts += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_delay_is_twice_the_short_one() {
        assert_eq!(Delay::Long.as_millis(), 2 * Delay::Short.as_millis());
    }

    #[test]
    fn queue_releases_only_what_came_due() {
        let mut queue = SettleQueue::new();
        queue.schedule(Delay::Short, 1);
        queue.schedule(Delay::Long, 2);

        assert_eq!(queue.advance(Delay::Short.as_millis()), vec![1]);
        assert!(!queue.is_empty());
        assert_eq!(queue.advance(Delay::Short.as_millis()), vec![2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn double_schedule_of_one_id_yields_two_commits() {
        let mut queue = SettleQueue::new();
        queue.schedule(Delay::Short, 7);
        queue.schedule(Delay::Short, 7);
        assert_eq!(queue.advance(Delay::Short.as_millis()), vec![7, 7]);
    }

    #[test]
    fn clock_accumulates_across_advances() {
        let mut queue = SettleQueue::new();
        queue.schedule(Delay::Long, 3);
        assert!(queue.advance(100).is_empty());
        queue.schedule(Delay::Short, 4);
        // 100 + 400 = 500: both the long (due 500) and the short (due 350)
        assert_eq!(queue.advance(400), vec![3, 4]);
    }
}
