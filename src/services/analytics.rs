//! Analytics over the link store
//!
//! Pure reads: filtered/sorted views and summary statistics. Active and
//! expired are evaluated against the injected clock at call time, so the
//! classification can change between calls without new data.

use std::sync::Arc;

use crate::models::LinkRecord;
use crate::store::LinkStore;
use crate::utils::clock::Clock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkFilter {
    #[default]
    All,
    ActiveOnly,
    ExpiredOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkSort {
    #[default]
    Newest,
    Oldest,
    MostClicked,
}

/// Summary statistics over the unfiltered store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSummary {
    pub total_links: usize,
    pub active_links: usize,
    pub total_clicks: usize,
    /// Clicks per record, rounded to the nearest integer; 0 for an empty
    /// store
    pub average_clicks: usize,
}

pub struct AnalyticsService {
    clock: Arc<dyn Clock>,
}

impl AnalyticsService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// A filtered, sorted view of the store. Sorts are stable: records
    /// that compare equal keep their store order.
    pub fn filtered_sorted(
        &self,
        store: &LinkStore,
        filter: LinkFilter,
        sort: LinkSort,
    ) -> Vec<LinkRecord> {
        let now = self.clock.now();

        let mut records: Vec<LinkRecord> = store
            .records()
            .iter()
            .filter(|r| match filter {
                LinkFilter::All => true,
                LinkFilter::ActiveOnly => !r.is_expired(now),
                LinkFilter::ExpiredOnly => r.is_expired(now),
            })
            .cloned()
            .collect();

        match sort {
            LinkSort::Newest => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            LinkSort::Oldest => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            LinkSort::MostClicked => records.sort_by(|a, b| b.click_count.cmp(&a.click_count)),
        }

        records
    }

    pub fn summary(&self, store: &LinkStore) -> LinkSummary {
        let now = self.clock.now();

        let total_links = store.len();
        let active_links = store
            .records()
            .iter()
            .filter(|r| !r.is_expired(now))
            .count();
        let total_clicks: usize = store.records().iter().map(|r| r.click_count).sum();
        let average_clicks = if total_links == 0 {
            0
        } else {
            (total_clicks as f64 / total_links as f64).round() as usize
        };

        LinkSummary {
            total_links,
            active_links,
            total_clicks,
            average_clicks,
        }
    }
}
