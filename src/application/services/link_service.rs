//! Shortening workflow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};

use crate::application::services::HistoryService;
use crate::domain::entities::ShortenedUrl;
use crate::domain::latency::Latency;
use crate::domain::repositories::StorageSlot;
use crate::error::AppError;
use crate::utils::code_generator::generate_short_url;
use crate::utils::url_validator::validate_url;

/// Largest id taken from stored history: 9999-12-31T23:59:59.999Z in epoch
/// milliseconds. Larger or non-positive ids are ignored when seeding.
const MAX_SEED_ID: i64 = 253_402_300_799_999;

/// Turns submitted URLs into history records.
///
/// Methods that shorten take `&mut self`, so a second shortening cannot start
/// while one is suspended on the simulated latency.
pub struct LinkService<S: StorageSlot, L: Latency, R: Rng> {
    history: HistoryService<S>,
    latency: Arc<L>,
    rng: R,
    last_id: i64,
}

impl<S: StorageSlot, L: Latency, R: Rng> LinkService<S, L, R> {
    /// Creates the workflow around an already loaded history.
    pub fn new(history: HistoryService<S>, latency: Arc<L>, rng: R) -> Self {
        // Numeric ids from earlier sessions seed the id sequence.
        let last_id = history
            .records()
            .iter()
            .filter_map(|r| r.id.parse::<i64>().ok())
            .filter(|id| (1..=MAX_SEED_ID).contains(id))
            .max()
            .unwrap_or(0);

        Self {
            history,
            latency,
            rng,
            last_id,
        }
    }

    /// Shortens raw user input.
    ///
    /// Surrounding whitespace is trimmed before [`Self::shorten`] runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] if nothing is left after trimming,
    /// otherwise see [`Self::shorten`].
    pub async fn submit(&mut self, input: &str) -> Result<String, AppError> {
        let long_url = input.trim();
        if long_url.is_empty() {
            debug!("Rejected empty input");
            return Err(AppError::EmptyInput);
        }
        self.shorten(long_url).await
    }

    /// Creates a short URL for `long_url` and records it.
    ///
    /// # Flow
    ///
    /// 1. Validate `long_url` (absolute http/https)
    /// 2. Reject if the history already holds `long_url`
    /// 3. Await the simulated latency
    /// 4. Generate the short URL
    /// 5. Prepend a new record to the history (persisted)
    ///
    /// Rejections happen strictly before step 3 and leave the history
    /// untouched. Steps 4 and 5 cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation fails.
    /// Returns [`AppError::DuplicateUrl`] if `long_url` was already shortened.
    pub async fn shorten(&mut self, long_url: &str) -> Result<String, AppError> {
        if !validate_url(long_url) {
            debug!(long_url, "Rejected invalid URL");
            return Err(AppError::invalid_url(long_url));
        }

        if let Some(existing) = self.history.find_by_long_url(long_url) {
            debug!(long_url, id = %existing.id, "Rejected duplicate URL");
            return Err(AppError::duplicate_url(long_url));
        }

        self.latency.wait().await;

        let short_url = generate_short_url(&mut self.rng);
        let created_at = Utc::now();
        let id = self.next_id(created_at);

        let record = ShortenedUrl::new(id, long_url, short_url.clone(), created_at);
        info!(id = %record.id, long_url, short_url = %short_url, "Shortened URL");
        self.history.add(record);

        Ok(short_url)
    }

    /// Removes a record by id. See [`HistoryService::remove`].
    pub fn delete(&mut self, id: &str) -> bool {
        self.history.remove(id)
    }

    /// Removes every record. Callers confirm intent first.
    pub fn clear_history(&mut self) {
        self.history.clear_all();
    }

    pub fn history(&self) -> &HistoryService<S> {
        &self.history
    }

    /// Hands the history back, e.g. for the final persist at shutdown.
    pub fn into_history(self) -> HistoryService<S> {
        self.history
    }

    /// Epoch milliseconds of `now`, bumped past the previous id if needed.
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let id = now.timestamp_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id.to_string()
    }
}
