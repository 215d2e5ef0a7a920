//! # View Derivation
//!
//! Pure functions from store snapshots to view values. A view value carries
//! everything a host needs to mount the visible region: row descriptors, the
//! summary counts, the placeholder state, whether the clear-done action is
//! visible, and the filter to highlight as selected.
//!
//! ## Full-Replace Contract
//!
//! Every `build` call produces a brand-new value with no identity tying it
//! to earlier renders. The host replaces the whole region and re-binds input
//! handlers to the new rows; nothing is patched in place.
//!
//! ## The Two Independent Partitions
//!
//! Pending and done are computed by two separate predicates, not one boolean
//! split: pending is `done != Some(true)`, done is `done != Some(false)`. A
//! legacy record whose flag was never set satisfies BOTH, so it appears in
//! both counts and `total == pending + done` does not hold for it. That is
//! observed production behavior and it is kept, not fixed.
//!
//! Filtering affects displayed rows only; the three summary counts always
//! reflect the unfiltered sequence.

use crate::model::{Item, TodoList};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub mod collection;
pub mod list;
pub mod preview;

pub use collection::{CollectionView, ListRow};
pub use list::{ItemRow, ListView};
pub use preview::{PreviewRow, PreviewView};

/// The status filter selected by the router hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Done,
}

impl FromStr for Filter {
    type Err = Infallible;

    /// Anything unrecognized (including the empty hash) selects `All`.
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s {
            "pending" => Filter::Pending,
            "done" => Filter::Done,
            _ => Filter::All,
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Pending => write!(f, "pending"),
            Filter::Done => write!(f, "done"),
        }
    }
}

/// A record is pending unless its flag is strictly set.
pub fn is_pending(done: Option<bool>) -> bool {
    done != Some(true)
}

/// A record is done unless its flag is strictly unset.
/// An absent flag passes both this and [`is_pending`].
pub fn is_done(done: Option<bool>) -> bool {
    done != Some(false)
}

/// Access to the done flag, shared by the two record levels.
pub trait HasDone {
    fn done_flag(&self) -> Option<bool>;
}

impl HasDone for TodoList {
    fn done_flag(&self) -> Option<bool> {
        self.done
    }
}

impl HasDone for Item {
    fn done_flag(&self) -> Option<bool> {
        self.done
    }
}

/// Unfiltered counts for the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

impl Summary {
    pub fn of<T: HasDone>(records: &[T]) -> Self {
        Self {
            total: records.len(),
            pending: records.iter().filter(|r| is_pending(r.done_flag())).count(),
            done: records.iter().filter(|r| is_done(r.done_flag())).count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.total, self.pending, self.done)
    }
}

/// The displayed subset for a filter. Borrowed: views copy what they need
/// into row descriptors.
pub fn apply_filter<T: HasDone>(records: &[T], filter: Filter) -> Vec<&T> {
    records
        .iter()
        .filter(|r| match filter {
            Filter::All => true,
            Filter::Pending => is_pending(r.done_flag()),
            Filter::Done => is_done(r.done_flag()),
        })
        .collect()
}

/// Shown when there is nothing to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The backing sequence is genuinely empty.
    Empty,
    /// The addressed list does not exist in the collection.
    UnknownList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn item(done: Option<bool>) -> Item {
        let mut item = Item::new("x".into());
        item.done = done;
        item
    }

    #[test]
    fn filter_parses_hash_values_and_defaults_to_all() {
        assert_eq!("pending".parse::<Filter>().unwrap(), Filter::Pending);
        assert_eq!("done".parse::<Filter>().unwrap(), Filter::Done);
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("garbage".parse::<Filter>().unwrap(), Filter::All);
    }

    #[test]
    fn counts_add_up_when_every_flag_is_set() {
        let records = vec![item(Some(false)), item(Some(true)), item(Some(false))];
        let summary = Summary::of(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.pending + summary.done, summary.total);
    }

    #[test]
    fn unset_flag_is_counted_in_both_partitions() {
        let records = vec![item(Some(false)), item(Some(true)), item(None)];
        let summary = Summary::of(&records);
        assert_eq!(summary.total, 3);
        // The None record inflates both counts by one
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.done, 2);
        assert_eq!(summary.pending + summary.done, summary.total + 1);
    }

    #[test]
    fn unset_flag_is_displayed_under_both_filters() {
        let records = vec![item(None)];
        assert_eq!(apply_filter(&records, Filter::Pending).len(), 1);
        assert_eq!(apply_filter(&records, Filter::Done).len(), 1);
        assert_eq!(apply_filter(&records, Filter::All).len(), 1);
    }

    #[test]
    fn summary_display_format() {
        let summary = Summary {
            total: 2,
            pending: 1,
            done: 1,
        };
        assert_eq!(summary.to_string(), "2 (1/1)");
    }
}
