use super::{apply_filter, Filter, Placeholder, Summary};
use crate::model::{Collection, RecordId};
use chrono::{DateTime, Utc};

/// Row descriptor for one list in the overview.
///
/// Carries the toggle state, the label with its timestamp metadata, and the
/// item count for the embedded preview hint. Hosts attach edit/delete/toggle
/// bindings to these rows after every mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: RecordId,
    pub name: String,
    pub done: Option<bool>,
    pub created: DateTime<Utc>,
    pub last_renamed: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub item_count: usize,
}

/// The fully rebuilt overview region.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView {
    pub rows: Vec<ListRow>,
    pub summary: Summary,
    pub filter: Filter,
    pub placeholder: Option<Placeholder>,
    pub clear_action_visible: bool,
}

impl CollectionView {
    pub fn build(collection: &Collection, filter: Filter) -> Self {
        // Counts come from the unfiltered sequence; the filter only decides
        // which rows get rendered.
        let summary = Summary::of(&collection.lists);

        let rows = apply_filter(&collection.lists, filter)
            .into_iter()
            .map(|list| ListRow {
                id: list.id,
                name: list.name.clone(),
                done: list.done,
                created: list.created,
                last_renamed: list.last_renamed,
                last_updated: list.last_updated,
                item_count: list.items.len(),
            })
            .collect();

        let placeholder = if collection.is_empty() {
            Some(Placeholder::Empty)
        } else {
            None
        };

        Self {
            rows,
            summary,
            filter,
            placeholder,
            clear_action_visible: summary.done > 0,
        }
    }
}
