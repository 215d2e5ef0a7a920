//! The read-only preview: a tooltip-sized rendering of one list.
//!
//! Store + view only; there is no mutation path and no mediator. Rows are
//! unfiltered and capped, with the remainder reported as a count.

use super::Summary;
use crate::list::ListSnapshot;

/// Default row cap for hosts that don't pick their own.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub text: String,
    pub done: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    /// `None` when the addressed list does not exist.
    pub name: Option<String>,
    pub rows: Vec<PreviewRow>,
    pub truncated_count: Option<usize>,
    pub summary: Summary,
}

impl PreviewView {
    pub fn build(snapshot: &ListSnapshot, max_rows: usize) -> Self {
        let summary = Summary::of(&snapshot.items);
        let total = snapshot.items.len();

        let rows = snapshot
            .items
            .iter()
            .take(max_rows)
            .map(|item| PreviewRow {
                text: item.text.clone(),
                done: item.done,
            })
            .collect();

        let truncated_count = if total > max_rows {
            Some(total - max_rows)
        } else {
            None
        };

        Self {
            name: snapshot.name.clone(),
            rows,
            truncated_count,
            summary,
        }
    }
}
