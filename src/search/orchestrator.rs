//! Quota-guarded pagination.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{DateRestrict, ResultItem, SearchProvider, SearchRequest};
use crate::error::XrayError;
use crate::quota::QuotaLedger;

/// How many pages of what size to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page_size: u32,
    pub pages: u32,
    pub date_restrict: Option<DateRestrict>,
}

impl PageSpec {
    pub const fn new(page_size: u32, pages: u32) -> Self {
        Self {
            page_size,
            pages,
            date_restrict: None,
        }
    }

    #[must_use]
    pub const fn with_date_restrict(mut self, restrict: Option<DateRestrict>) -> Self {
        self.date_restrict = restrict;
        self
    }

    /// 1-based offset of page `index` (0-based).
    pub const fn start_of(&self, index: u32) -> u32 {
        index.saturating_mul(self.page_size).saturating_add(1)
    }
}

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// All requested pages were fetched.
    PageLimit,
    /// A page came back with no results.
    EmptyPage,
    /// The daily budget ran out before a page could be requested.
    QuotaExhausted,
    /// A call failed.
    Failed,
}

/// Items gathered by one paginated search, plus how it ended.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub items: Vec<ResultItem>,
    pub pages_fetched: u32,
    pub stop: StopReason,
    /// Human-readable reason for an abnormal stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchOutcome {
    /// Whether the search stopped on quota or failure rather than naturally.
    pub const fn is_interrupted(&self) -> bool {
        matches!(self.stop, StopReason::QuotaExhausted | StopReason::Failed)
    }
}

pub struct SearchOrchestrator<'a> {
    provider: &'a dyn SearchProvider,
    ledger: &'a QuotaLedger<'a>,
}

impl<'a> SearchOrchestrator<'a> {
    pub fn new(provider: &'a dyn SearchProvider, ledger: &'a QuotaLedger<'a>) -> Self {
        Self { provider, ledger }
    }

    /// Fetch up to `spec.pages` pages of `query`.
    ///
    /// The ledger is checked before and charged after every call that
    /// succeeds, empty pages included. Failed calls are never charged.
    /// Items gathered before a stop are always returned.
    pub fn paginate(&self, query: &str, spec: &PageSpec) -> SearchOutcome {
        let mut items = Vec::new();
        let mut pages_fetched = 0;

        for index in 0..spec.pages {
            let status = self.ledger.status();
            if status.is_exhausted() {
                let err = XrayError::QuotaExhausted {
                    used: status.used,
                    limit: status.limit,
                };
                warn!(used = status.used, limit = status.limit, "quota exhausted, stopping");
                return SearchOutcome {
                    items,
                    pages_fetched,
                    stop: StopReason::QuotaExhausted,
                    message: Some(err.to_string()),
                };
            }

            let request = SearchRequest {
                query,
                page_size: spec.page_size,
                start: spec.start_of(index),
                date_restrict: spec.date_restrict,
            };

            let page = match self.provider.search(&request) {
                Ok(page) => page,
                Err(err) => {
                    warn!(error = %err, start = request.start, "search call failed");
                    return SearchOutcome {
                        items,
                        pages_fetched,
                        stop: StopReason::Failed,
                        message: Some(err.to_string()),
                    };
                }
            };

            if let Err(err) = self.ledger.increment() {
                warn!(error = %err, "failed to persist quota usage");
            }
            pages_fetched += 1;

            if page.is_empty() {
                debug!(start = request.start, "empty page, stopping");
                return SearchOutcome {
                    items,
                    pages_fetched,
                    stop: StopReason::EmptyPage,
                    message: None,
                };
            }
            items.extend(page);
        }

        info!(pages = pages_fetched, results = items.len(), "search complete");
        SearchOutcome {
            items,
            pages_fetched,
            stop: StopReason::PageLimit,
            message: None,
        }
    }
}
