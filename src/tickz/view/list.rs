use super::{apply_filter, Filter, Placeholder, Summary};
use crate::list::ListSnapshot;
use crate::model::RecordId;
use chrono::{DateTime, Utc};

/// Row descriptor for one item of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: RecordId,
    pub text: String,
    pub done: Option<bool>,
    pub created: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// The fully rebuilt single-list region.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub list_id: Option<RecordId>,
    pub name: Option<String>,
    pub rows: Vec<ItemRow>,
    pub summary: Summary,
    pub filter: Filter,
    pub placeholder: Option<Placeholder>,
    pub clear_action_visible: bool,
}

impl ListView {
    pub fn build(snapshot: &ListSnapshot, filter: Filter) -> Self {
        let summary = Summary::of(&snapshot.items);

        let rows = apply_filter(&snapshot.items, filter)
            .into_iter()
            .map(|item| ItemRow {
                id: item.id,
                text: item.text.clone(),
                done: item.done,
                created: item.created,
                last_updated: item.last_updated,
            })
            .collect();

        // An empty sequence needs the placeholder, and the snapshot's id
        // tells genuinely-empty apart from invalid addressing.
        let placeholder = if snapshot.items.is_empty() {
            Some(if snapshot.list_id.is_none() {
                Placeholder::UnknownList
            } else {
                Placeholder::Empty
            })
        } else {
            None
        };

        Self {
            list_id: snapshot.list_id,
            name: snapshot.name.clone(),
            rows,
            summary,
            filter,
            placeholder,
            clear_action_visible: summary.done > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn snapshot(items: &[(&str, Option<bool>)]) -> ListSnapshot {
        let items = items
            .iter()
            .enumerate()
            .map(|(i, (text, done))| {
                let mut item = Item::new((*text).into());
                item.id += i as i64;
                item.done = *done;
                item
            })
            .collect();
        ListSnapshot {
            list_id: Some(1),
            name: Some("L".into()),
            items,
        }
    }

    #[test]
    fn pending_filter_scenario_from_two_items() {
        let view = ListView::build(
            &snapshot(&[("A", Some(false)), ("B", Some(true))]),
            Filter::Pending,
        );
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].text, "A");
        assert_eq!(view.summary.to_string(), "2 (1/1)");
    }

    #[test]
    fn empty_backing_list_shows_empty_placeholder() {
        let view = ListView::build(&snapshot(&[]), Filter::All);
        assert_eq!(view.placeholder, Some(Placeholder::Empty));
        assert_eq!(view.list_id, Some(1));
    }

    #[test]
    fn invalid_addressing_shows_unknown_list_placeholder() {
        let invalid = ListSnapshot {
            list_id: None,
            name: None,
            items: Vec::new(),
        };
        let view = ListView::build(&invalid, Filter::All);
        assert_eq!(view.placeholder, Some(Placeholder::UnknownList));
        assert_eq!(view.name, None);
    }

    #[test]
    fn done_filter_includes_legacy_unset_flags() {
        let view = ListView::build(
            &snapshot(&[("a", Some(false)), ("b", None)]),
            Filter::Done,
        );
        // The unset record passes the done predicate too
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].text, "b");
        assert_eq!(view.summary.pending, 2);
        assert_eq!(view.summary.done, 1);
    }

    #[test]
    fn clear_action_visible_only_with_done_items() {
        let view = ListView::build(&snapshot(&[("a", Some(false))]), Filter::All);
        assert!(!view.clear_action_visible);
        let view = ListView::build(&snapshot(&[("a", Some(true))]), Filter::All);
        assert!(view.clear_action_visible);
    }
}
