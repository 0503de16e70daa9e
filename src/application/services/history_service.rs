//! History store: the ordered collection of shortened URLs and its durable mirror.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::StorageSlot;
use crate::error::AppError;

/// Owns the session's shortened URLs, newest first.
///
/// The storage slot is a mirror, not a second owner: [`HistoryService::load`]
/// replaces the in-memory records with the slot contents, and every mutation
/// overwrites the slot with the full collection.
///
/// Uniqueness of `long_url` is enforced by
/// [`crate::application::services::LinkService`], not here.
pub struct HistoryService<S: StorageSlot> {
    slot: Arc<S>,
    records: Vec<ShortenedUrl>,
}

impl<S: StorageSlot> HistoryService<S> {
    /// Creates an empty history backed by `slot` without reading it.
    pub fn new(slot: Arc<S>) -> Self {
        Self {
            slot,
            records: Vec::new(),
        }
    }

    /// Creates a history and loads it from `slot`.
    pub fn open(slot: Arc<S>) -> Self {
        let mut history = Self::new(slot);
        history.load();
        history
    }

    /// Replaces the in-memory records with the slot contents.
    ///
    /// A missing slot, an unreadable slot or malformed contents leave the
    /// records untouched; the failure is logged and not propagated.
    pub fn load(&mut self) {
        let contents = match self.slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("No stored history, starting empty");
                return;
            }
            Err(e) => {
                error!(error = %e, "Error loading URLs from storage");
                return;
            }
        };

        match decode_records(&contents) {
            Ok(records) => {
                info!(count = records.len(), "Loaded URL history");
                self.records = records;
            }
            Err(e) => {
                error!(error = %e, "Error loading URLs from storage");
            }
        }
    }

    /// Serializes the full collection and overwrites the slot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the slot rejects the write.
    pub fn persist(&self) -> Result<(), AppError> {
        let json = serde_json::to_string(&self.records)
            .map_err(|e| AppError::storage(format!("failed to encode history: {e}")))?;
        self.slot.write(&json)
    }

    /// Persists after a mutation. The in-memory records stay authoritative
    /// when the write fails.
    fn sync(&self) {
        if let Err(e) = self.persist() {
            error!(error = %e, count = self.records.len(), "Failed to persist URL history");
        }
    }

    /// Inserts `record` at the front, then persists.
    pub fn add(&mut self, record: ShortenedUrl) {
        debug!(id = %record.id, long_url = %record.long_url, "Adding record");
        self.records.insert(0, record);
        self.sync();
    }

    /// Removes the record with `id`, then persists.
    ///
    /// Returns `true` if a record was removed. Removing an unknown id is a
    /// no-op apart from the persist.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;

        if removed {
            info!(id, "Deleted URL");
        } else {
            warn!(id, "Delete requested for unknown id");
        }

        self.sync();
        removed
    }

    /// Removes every record, then persists.
    ///
    /// Callers confirm intent before invoking this.
    pub fn clear_all(&mut self) {
        let count = self.records.len();
        self.records.clear();
        info!(count, "Cleared URL history");
        self.sync();
    }

    /// Finds the record whose original URL equals `long_url` exactly.
    pub fn find_by_long_url(&self, long_url: &str) -> Option<&ShortenedUrl> {
        self.records.iter().find(|r| r.long_url == long_url)
    }

    /// Finds a record by id.
    pub fn get(&self, id: &str) -> Option<&ShortenedUrl> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose original or short URL contains `term`, ignoring case.
    ///
    /// Order follows the history (newest first). An empty term matches all.
    pub fn search(&self, term: &str) -> Vec<&ShortenedUrl> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches_lowercase(&needle))
            .collect()
    }

    /// All records, newest first.
    pub fn records(&self) -> &[ShortenedUrl] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Final persist at shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the slot rejects the write.
    pub fn close(self) -> Result<(), AppError> {
        self.persist()
    }
}

/// Parses the slot contents into records.
///
/// Entries that do not decode as a record are logged and skipped, so one
/// damaged entry does not cost the rest of the history.
///
/// # Errors
///
/// Returns [`AppError::StorageParse`] if the contents are not a JSON array.
pub fn decode_records(contents: &str) -> Result<Vec<ShortenedUrl>, AppError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(contents)?;

    let records = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable history entry");
                None
            }
        })
        .collect();

    Ok(records)
}
