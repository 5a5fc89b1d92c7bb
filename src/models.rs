//! Link records and click events
//!
//! The on-disk schema uses camelCase field names and ISO-8601 timestamps.
//! `clickCount`, `clickHistory` and `createdBy` default-fill when absent so
//! older slots deserialize without silent gaps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded redirect resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Environment descriptor, truncated to 50 characters at capture time
    pub client_agent: String,
    /// Incoming referrer, or the sentinel "direct"
    pub referrer: String,
}

/// One shortened URL.
///
/// Created exactly once by the allocator; mutated only by the resolver
/// (append a click event, increment the count); never deleted. Expiry is
/// derived from `expires_at` at read time, never stored as a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,

    #[serde(default)]
    pub click_count: usize,

    #[serde(default)]
    pub click_history: Vec<ClickEvent>,

    #[serde(default)]
    pub created_by: String,
}

impl LinkRecord {
    /// A record is expired once `now` reaches `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
