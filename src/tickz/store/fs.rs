use super::StorageBackend;
use crate::error::{Result, TickzError};
use crate::model::Collection;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "todos.json";

/// File-based storage: the whole collection in one JSON file.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TickzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileStore {
    fn load(&self) -> Result<Collection> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(Collection::default());
        }
        let content = fs::read_to_string(data_file).map_err(TickzError::Io)?;
        let collection: Collection =
            serde_json::from_str(&content).map_err(TickzError::Serialization)?;
        Ok(collection)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(collection).map_err(TickzError::Serialization)?;
        fs::write(self.data_path(), content).map_err(TickzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoList;

    #[test]
    fn missing_file_loads_as_empty_collection() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp.path().join("nested"));
        let collection = store.load().unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        let collection = Collection {
            lists: vec![TodoList::new("Groceries".into())],
        };
        store.save(&collection).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, collection);
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("a").join("b");
        let mut store = FileStore::new(dir.clone());
        store.save(&Collection::default()).unwrap();
        assert!(dir.join("todos.json").exists());
    }

    #[test]
    fn corrupt_blob_surfaces_serialization_error() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("todos.json"), "not json").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.load(),
            Err(TickzError::Serialization(_))
        ));
    }
}
