//! The preview component: store + view, nothing else.

use crate::error::Result;
use crate::list::ListStore;
use crate::model::RecordId;
use crate::store::StorageBackend;
use crate::view::PreviewView;

/// Loads one list and builds its tooltip preview. Read-only: there is no
/// mediator and no mutation path; a missing id previews as nameless and
/// empty rather than failing.
pub fn preview_list<S: StorageBackend>(
    backend: S,
    id: RecordId,
    max_rows: usize,
) -> Result<PreviewView> {
    let store = ListStore::new(backend, id)?;
    Ok(PreviewView::build(&store.snapshot(), max_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn previews_an_existing_list() {
        let (backend, id) = fixtures::with_items(
            "Groceries",
            &[("Milk", Some(false)), ("Eggs", Some(true))],
        );
        let view = preview_list(backend, id, 5).unwrap();
        assert_eq!(view.name.as_deref(), Some("Groceries"));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.summary.to_string(), "2 (1/1)");
    }

    #[test]
    fn previews_a_missing_list_without_failing() {
        let (backend, _) = fixtures::with_items("L", &[("a", Some(false))]);
        let view = preview_list(backend, 404, 5).unwrap();
        assert_eq!(view.name, None);
        assert!(view.rows.is_empty());
    }
}
