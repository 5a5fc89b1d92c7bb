//! Redirect resolution
//!
//! Runs once per navigation: the path (stripped of its leading slash) is
//! the candidate short code. Four terminal outcomes: pass-through for app
//! views, not-found, expired, or a redirect that records a click. Only the
//! redirect outcome mutates the store, and the save completes before the
//! outcome is returned.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::errors::Result;
use crate::models::ClickEvent;
use crate::store::LinkStore;
use crate::utils::clock::Clock;

/// App view names that never resolve as short codes
pub static RESERVED_VIEWS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["generator", "analytics"].into_iter().collect());

/// Client agent descriptors are truncated to this many characters
pub const CLIENT_AGENT_MAX_LEN: usize = 50;

/// Sentinel referrer for navigations with no incoming referrer
pub const DIRECT_REFERRER: &str = "direct";

/// Click capture context supplied by the navigation surface.
#[derive(Debug, Clone)]
pub struct ClickContext {
    pub client_agent: String,
    pub referrer: Option<String>,
}

/// Terminal outcome of one resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Normal app view, not a redirect
    PassThrough,
    /// No record matches the path; store untouched
    NotFound,
    /// A record matches but has expired; store untouched
    Expired,
    /// Click recorded and persisted; caller performs a replace-style
    /// navigation that leaves no history entry for the short path
    Redirect { original_url: String },
}

pub struct RedirectService {
    clock: Arc<dyn Clock>,
}

impl RedirectService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn resolve(
        &self,
        store: &mut LinkStore,
        path: &str,
        ctx: &ClickContext,
    ) -> Result<Resolution> {
        let code = path.trim_start_matches('/');

        if code.is_empty() || RESERVED_VIEWS.contains(code) {
            return Ok(Resolution::PassThrough);
        }

        let (original_url, expired) = match store.find(code) {
            None => {
                debug!("no record for path '{}'", code);
                return Ok(Resolution::NotFound);
            }
            Some(record) => (
                record.original_url.clone(),
                record.is_expired(self.clock.now()),
            ),
        };

        if expired {
            info!("short link '{}' has expired", code);
            return Ok(Resolution::Expired);
        }

        let now = self.clock.now();
        let event = ClickEvent {
            id: format!("click_{}", now.timestamp_millis()),
            timestamp: now,
            client_agent: ctx.client_agent.chars().take(CLIENT_AGENT_MAX_LEN).collect(),
            referrer: ctx
                .referrer
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DIRECT_REFERRER.to_string()),
        };

        store.mutate_one(code, |record| {
            record.click_history.push(event);
            record.click_count += 1;
        })?;

        info!("redirecting '{}' -> '{}'", code, original_url);
        Ok(Resolution::Redirect { original_url })
    }
}
