use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyValueError {
    #[error("key_value.read_error")]
    ReadError,
    #[error("key_value.write_error")]
    WriteError,
}

/// Directory-backed string slots, one file per key. The Rust stand-in
/// for the browser's localStorage: whole-value reads and last-write-wins
/// overwrites, nothing else.
pub struct KeyValueStorage {
    dir: PathBuf,
}

impl KeyValueStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads the slot for `key`. A missing slot is a normal first run
    /// and reads as `None`.
    pub async fn read(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        match tokio::fs::read_to_string(self.slot_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(_) => Err(KeyValueError::ReadError),
        }
    }

    /// Overwrites the slot for `key`, creating the storage directory on
    /// first use.
    pub async fn write(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|_| KeyValueError::WriteError)?;

        tokio::fs::write(self.slot_path(key), value)
            .await
            .map_err(|_| KeyValueError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_read_back_written_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorage::new(dir.path().join("store"));

        storage.write("cart", "[1,2,3]").await.unwrap();
        let value = storage.read("cart").await.unwrap();

        assert_eq!(value.as_deref(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn should_read_none_for_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorage::new(dir.path());

        let value = storage.read("cart").await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn should_overwrite_slot_on_second_write() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorage::new(dir.path());

        storage.write("cart", "first").await.unwrap();
        storage.write("cart", "second").await.unwrap();

        assert_eq!(storage.read("cart").await.unwrap().as_deref(), Some("second"));
    }
}
