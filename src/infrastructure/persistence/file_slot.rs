//! File-backed durable slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::repositories::StorageSlot;
use crate::error::AppError;

/// Durable slot stored as `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file that is then renamed over the slot,
/// so a crash mid-write leaves the previous contents intact.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot for `key` inside `dir`. Nothing is touched on disk
    /// until the first write.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Storage slot not found");
                Ok(None)
            }
            Err(e) => Err(AppError::storage(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write(&self, contents: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| AppError::storage(format!("failed to write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::storage(format!("failed to replace {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), bytes = contents.len(), "Storage slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path(), "shortened-urls");

        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path(), "shortened-urls");

        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));

        slot.write("[1]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_slot_file_name_follows_key() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path(), "my-history");

        slot.write("[]").unwrap();
        assert_eq!(slot.path(), dir.path().join("my-history.json"));
        assert!(dir.path().join("my-history.json").exists());
        assert!(!dir.path().join("my-history.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let slot = FileSlot::new(&nested, "shortened-urls");

        slot.write("[]").unwrap();
        assert!(nested.join("shortened-urls.json").exists());
    }

    #[test]
    fn test_unreadable_slot_is_storage_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as a string.
        std::fs::create_dir(dir.path().join("shortened-urls.json")).unwrap();
        let slot = FileSlot::new(dir.path(), "shortened-urls");

        assert!(matches!(slot.read(), Err(AppError::Storage(_))));
    }
}
