//! Short code allocation
//!
//! Validates a submission, settles on a short code (user alias or
//! generated), builds the record and inserts it into the store. The
//! uniqueness check and the append happen under one mutable borrow of the
//! store, so the code is re-checked against the state it is inserted into.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use crate::errors::{Result, SnaplinkError};
use crate::models::LinkRecord;
use crate::store::LinkStore;
use crate::utils::clock::Clock;
use crate::utils::url_validator::{UrlValidationError, validate_url};
use crate::utils::{generate_short_code, normalize_alias};

pub const MIN_EXPIRATION_MINUTES: i64 = 1;
/// One week
pub const MAX_EXPIRATION_MINUTES: i64 = 10_080;

pub const MIN_ALIAS_LENGTH: usize = 3;
pub const MAX_ALIAS_LENGTH: usize = 20;

/// One form submission.
#[derive(Debug, Clone)]
pub struct ShortenRequest {
    pub original_url: String,
    pub expiration_minutes: i64,
    /// Custom alias; empty or whitespace-only means "generate one"
    pub custom_alias: Option<String>,
    /// Input-slot tag recorded on the link, presentation metadata only
    pub created_by: String,
}

/// Result of link creation.
#[derive(Debug, Clone)]
pub struct LinkCreateResult {
    pub link: LinkRecord,
    /// Whether the short code was auto-generated
    pub generated_code: bool,
}

pub struct LinkService {
    clock: Arc<dyn Clock>,
}

impl LinkService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Create a new short link and append it to the store.
    ///
    /// Validation is fail-fast: each check short-circuits with its own
    /// error kind, and the form submission is rejected as a whole.
    pub fn create_link(
        &self,
        store: &mut LinkStore,
        req: ShortenRequest,
    ) -> Result<LinkCreateResult> {
        let target = req.original_url.trim();

        validate_url(target).map_err(|e| match e {
            UrlValidationError::EmptyUrl => SnaplinkError::empty_url(e.to_string()),
            other => SnaplinkError::invalid_url_format(other.to_string()),
        })?;

        if !(MIN_EXPIRATION_MINUTES..=MAX_EXPIRATION_MINUTES).contains(&req.expiration_minutes) {
            return Err(SnaplinkError::invalid_expiration(format!(
                "expiration must be between {} minute and {} minutes, got {}",
                MIN_EXPIRATION_MINUTES, MAX_EXPIRATION_MINUTES, req.expiration_minutes
            )));
        }

        let (code, generated) = match req
            .custom_alias
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(raw) => {
                let alias = normalize_alias(raw);
                if alias.len() < MIN_ALIAS_LENGTH || alias.len() > MAX_ALIAS_LENGTH {
                    return Err(SnaplinkError::invalid_alias_length(format!(
                        "custom alias must be between {} and {} characters, got {} after normalization ('{}')",
                        MIN_ALIAS_LENGTH,
                        MAX_ALIAS_LENGTH,
                        alias.len(),
                        alias
                    )));
                }
                if store.contains_code(&alias) {
                    return Err(SnaplinkError::alias_taken(format!(
                        "alias '{}' is already in use",
                        alias
                    )));
                }
                (alias, false)
            }
            None => {
                // Collision probability is ~1/62^4 per candidate; retry
                // until the candidate is free.
                let mut candidate = generate_short_code(self.clock.now());
                while store.contains_code(&candidate) {
                    candidate = generate_short_code(self.clock.now());
                }
                (candidate, true)
            }
        };

        let now = self.clock.now();
        let link = LinkRecord {
            id: format!("{}_{}", code, now.timestamp_millis()),
            original_url: target.to_string(),
            short_code: code,
            created_at: now,
            expires_at: now + Duration::minutes(req.expiration_minutes),
            click_count: 0,
            click_history: Vec::new(),
            created_by: req.created_by,
        };

        store.append(link.clone())?;

        info!(
            "created link '{}' -> '{}' (generated code: {})",
            link.short_code, link.original_url, generated
        );

        Ok(LinkCreateResult {
            link,
            generated_code: generated,
        })
    }
}
