//! Shortened URL entity, one entry of the history.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_with::formats::Flexible;
use serde_with::{DeserializeAs, PickFirst, TimestampMilliSeconds, serde_as};

/// A shortened URL with its creation metadata.
///
/// Records are immutable once created. The serialized form uses camelCase
/// field names and writes `createdAt` as RFC 3339. When reading, `createdAt`
/// may also be epoch milliseconds (as a number or a string), an ISO 8601
/// date-time without an offset, a bare date, or an RFC 2822 date. Values
/// without an offset are taken as UTC.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrl {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
    #[serde_as(as = "PickFirst<(_, TimestampMilliSeconds<String, Flexible>, LenientDateTime)>")]
    pub created_at: DateTime<Utc>,
    /// Never incremented; kept for compatibility with stored histories.
    #[serde(default)]
    pub click_count: u64,
}

impl ShortenedUrl {
    /// Creates a new record with a zero click count.
    pub fn new(
        id: impl Into<String>,
        long_url: impl Into<String>,
        short_url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            long_url: long_url.into(),
            short_url: short_url.into(),
            created_at,
            click_count: 0,
        }
    }

    /// Case-insensitive substring match on the original or short URL.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.long_url.to_lowercase().contains(needle)
            || self.short_url.to_lowercase().contains(needle)
    }
}

/// Date strings that carry no offset, or use the RFC 2822 layout.
struct LenientDateTime;

impl<'de> DeserializeAs<'de, DateTime<Utc>> for LenientDateTime {
    fn deserialize_as<D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_lenient(&text)
            .ok_or_else(|| de::Error::custom(format!("unrecognized date '{text}'")))
    }
}

fn parse_lenient(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
