//! File-backed key-value store keeping one JSON document per key.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokenfield_storage::{KeyValueStore, StorageError};

/// Key-value store persisting each key as a file under one directory.
#[derive(Debug)]
pub(crate) struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at the directory, creating it when absent.
    pub(crate) fn open(root: &Path) -> Self {
        if let Err(error) = fs::create_dir_all(root) {
            log::warn!(
                "could not create data directory {}: {error}",
                root.display()
            );
        }

        Self {
            root: root.to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|error| StorageError::WriteFailed {
            key: key.to_owned(),
            message: error.to_string(),
        })
    }

    fn load(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::ReadFailed {
                key: key.to_owned(),
                message: error.to_string(),
            }),
        }
    }
}
