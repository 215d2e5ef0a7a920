use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record ids are the millisecond count since the Unix epoch at creation
/// instant. Uniqueness is probabilistic: two creations inside the same
/// millisecond collide silently, and lookups resolve to the first match.
pub type RecordId = i64;

pub fn stamp_id(at: DateTime<Utc>) -> RecordId {
    at.timestamp_millis()
}

/// A single actionable entry inside a list.
///
/// `done` is `Option<bool>` rather than `bool`: records persisted before the
/// flag existed carry no value, and the view layer counts such records in
/// both the pending and the done partition (see `view::is_pending` /
/// `view::is_done`). Fresh items always start at `Some(false)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl Item {
    pub fn new(text: String) -> Self {
        let now = Utc::now();
        Self {
            id: stamp_id(now),
            created: now,
            last_updated: None,
            text,
            done: Some(false),
        }
    }
}

/// A named, ordered group of items with its own done flag.
///
/// The list-level `done` is independent of the items' flags; nothing derives
/// one from the other. `last_renamed` and `last_updated` start unset, are
/// written only by the corresponding mutation and are never cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: RecordId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_renamed: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: stamp_id(now),
            created: now,
            last_renamed: None,
            last_updated: None,
            name,
            done: Some(false),
            items: Vec::new(),
        }
    }
}

/// The full persisted root: every list, serialized as one unit.
///
/// Insertion order is display order for the "all" filter. Serde-transparent,
/// so the blob is a bare JSON array of lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub lists: Vec<TodoList>,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// First list with the given id, if any.
    pub fn find(&self, id: RecordId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_has_created_and_unset_timestamps() {
        let list = TodoList::new("Groceries".into());
        assert_eq!(list.id, stamp_id(list.created));
        assert_eq!(list.last_renamed, None);
        assert_eq!(list.last_updated, None);
        assert_eq!(list.done, Some(false));
        assert!(list.items.is_empty());
    }

    #[test]
    fn new_item_has_created_and_unset_last_updated() {
        let item = Item::new("Milk".into());
        assert_eq!(item.id, stamp_id(item.created));
        assert_eq!(item.last_updated, None);
        assert_eq!(item.done, Some(false));
    }

    #[test]
    fn serializes_with_browser_field_names() {
        let mut list = TodoList::new("A".into());
        list.items.push(Item::new("x".into()));
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.get("id").unwrap().is_i64());
        assert!(json.get("created").unwrap().is_i64());
        // Unset timestamps are omitted entirely, not serialized as null
        assert!(json.get("lastRenamed").is_none());
        assert!(json.get("lastUpdated").is_none());
        assert_eq!(json.get("done").unwrap(), &serde_json::json!(false));
    }

    #[test]
    fn deserializes_legacy_record_without_done_flag() {
        let json = r#"{"id": 1700000000000, "created": 1700000000000, "text": "old"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.done, None);
        assert_eq!(item.last_updated, None);
    }

    #[test]
    fn collection_blob_is_a_bare_array() {
        let collection = Collection {
            lists: vec![TodoList::new("A".into())],
        };
        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn find_resolves_first_match_on_id_collision() {
        let mut a = TodoList::new("first".into());
        let mut b = TodoList::new("second".into());
        a.id = 42;
        b.id = 42;
        let collection = Collection { lists: vec![a, b] };
        assert_eq!(collection.find(42).unwrap().name, "first");
    }
}
