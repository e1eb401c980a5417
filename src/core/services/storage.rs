use thiserror::Error;

use crate::core::models::Board;

/// Local storage key holding the JSON array of columns.
pub const STORAGE_KEY: &str = "task_manager_columns";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available in this context")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
    #[error("failed to encode board: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode board: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Key-value store the board snapshot is written to.
pub trait SnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl SnapshotStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

pub fn encode_board(board: &Board) -> Result<String, StorageError> {
    serde_json::to_string(board).map_err(StorageError::Encode)
}

pub fn decode_board(raw: &str) -> Result<Board, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

/// Loads the saved board, falling back to [`Board::seed`] when nothing is
/// stored or the stored value cannot be read. Never fails.
pub fn restore_board(store: &impl SnapshotStore) -> Board {
    let saved = match store.read(STORAGE_KEY) {
        Ok(Some(saved)) => saved,
        Ok(None) => {
            log::info!("No saved board, starting from the default columns");
            return Board::seed();
        }
        Err(e) => {
            log::error!("Failed to load tasks: {}", e);
            return Board::seed();
        }
    };

    match decode_board(&saved) {
        Ok(board) => {
            log::info!("Restored board with {} tasks", board.total_tasks());
            board
        }
        Err(e) => {
            log::error!("Failed to load tasks: {}", e);
            Board::seed()
        }
    }
}

/// Writes the whole board snapshot under [`STORAGE_KEY`].
pub fn persist_board(store: &impl SnapshotStore, board: &Board) -> Result<(), StorageError> {
    let json = encode_board(board)?;
    store.write(STORAGE_KEY, &json)?;
    log::debug!("Saved board with {} tasks", board.total_tasks());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::core::models::{Priority, TaskDraft};
    use pretty_assertions::assert_eq;

    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Access("SecurityError".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        let board = Board::seed()
            .create_task(&TaskDraft::new("Ship v2", Priority::High, Some("2024-11-02".into())), 7)
            .move_task("todo", 0, "done", 1);

        persist_board(&store, &board).unwrap();
        assert_eq!(restore_board(&store), board);
    }

    #[test]
    fn empty_store_yields_seed() {
        assert_eq!(restore_board(&MemoryStore::default()), Board::seed());
    }

    #[test]
    fn corrupted_value_falls_back_to_seed() {
        let store = MemoryStore::with(STORAGE_KEY, "{not json");
        assert_eq!(restore_board(&store), Board::seed());

        let wrong_shape = MemoryStore::with(STORAGE_KEY, r#"{"columns": 3}"#);
        assert_eq!(restore_board(&wrong_shape), Board::seed());
    }

    #[test]
    fn unreadable_store_falls_back_to_seed() {
        assert_eq!(restore_board(&BrokenStore), Board::seed());
    }

    #[test]
    fn saved_board_overrides_seed() {
        let saved = r#"[{"id":"todo","title":"To Do","tasks":[{"id":"x","content":"Only","priority":"low","date":"No Date"}]}]"#;
        let restored = restore_board(&MemoryStore::with(STORAGE_KEY, saved));
        assert_eq!(restored.total_tasks(), 1);
        assert_eq!(restored.columns[0].tasks[0].content, "Only");
    }

    #[test]
    fn persist_writes_column_array_under_key() {
        let store = MemoryStore::default();
        persist_board(&store, &Board::seed()).unwrap();
        let raw = store.get(STORAGE_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert_eq!(decode_board(&raw).unwrap(), Board::seed());
    }

    #[test]
    fn persist_surfaces_write_failures() {
        let err = persist_board(&BrokenStore, &Board::seed()).unwrap_err();
        assert!(matches!(err, StorageError::Access(_)));
    }
}
