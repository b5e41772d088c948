//! One user action, end to end: paginate, dedupe, persist.
//!
//! A [`SearchSession`] bundles the provider with the three persisted
//! containers for the duration of a command. It holds no state of its own
//! between runs.

use serde::Serialize;
use tracing::{info, warn};

use crate::dedup::dedupe;
use crate::error::{Result, XrayError};
use crate::history::{HistoryStore, SavedSearch, SavedSearchStore, SearchMode};
use crate::query::Query;
use crate::quota::{QuotaLedger, QuotaStatus};
use crate::search::{
    PageSpec, ResultItem, SearchOrchestrator, SearchProvider, StopReason, SweepPlan, SweepReport,
};

/// Cleaned result set of a single-query search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: Query,
    pub mode: SearchMode,
    pub items: Vec<ResultItem>,
    /// Hits before deduplication.
    pub raw_count: usize,
    pub pages_fetched: u32,
    pub stop: StopReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub quota: QuotaStatus,
}

/// Cleaned result set of a multi-company sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    pub mode: SearchMode,
    #[serde(flatten)]
    pub report: SweepReport,
    pub raw_count: usize,
    pub quota: QuotaStatus,
}

pub struct SearchSession<'a> {
    provider: &'a dyn SearchProvider,
    ledger: QuotaLedger<'a>,
    history: HistoryStore<'a>,
    saved: SavedSearchStore<'a>,
}

impl<'a> SearchSession<'a> {
    pub fn new(
        provider: &'a dyn SearchProvider,
        ledger: QuotaLedger<'a>,
        history: HistoryStore<'a>,
        saved: SavedSearchStore<'a>,
    ) -> Self {
        Self {
            provider,
            ledger,
            history,
            saved,
        }
    }

    pub fn quota(&self) -> QuotaStatus {
        self.ledger.status()
    }

    /// Run `query` over the pages in `spec` and keep the first of each
    /// duplicate. Non-empty results are recorded in history.
    pub fn run(&self, query: Query, mode: SearchMode, spec: &PageSpec) -> Result<SearchReport> {
        if query.is_empty() {
            return Err(XrayError::QueryInvalid(
                "nothing to search for; give at least one term, site, or phrase".to_string(),
            ));
        }

        info!(%mode, query = %query, pages = spec.pages, page_size = spec.page_size, "search started");
        let outcome = SearchOrchestrator::new(self.provider, &self.ledger).paginate(query.as_str(), spec);

        let raw_count = outcome.items.len();
        let items = dedupe(outcome.items);
        info!(raw = raw_count, unique = items.len(), stop = ?outcome.stop, "search finished");

        self.record(query.as_str(), mode, items.len());

        Ok(SearchReport {
            query,
            mode,
            items,
            raw_count,
            pages_fetched: outcome.pages_fetched,
            stop: outcome.stop,
            message: outcome.message,
            quota: self.ledger.status(),
        })
    }

    /// Run one query per cell of `plan`. `label` is what history shows
    /// for the whole sweep.
    pub fn sweep<F>(&self, plan: &SweepPlan, mode: SearchMode, label: &str, build: F) -> SweepOutcome
    where
        F: Fn(&str) -> Query,
    {
        let mut report = SearchOrchestrator::new(self.provider, &self.ledger).sweep(plan, build);
        let raw_count = report.items.len();
        report.items = dedupe(std::mem::take(&mut report.items));

        self.record(label, mode, report.items.len());

        SweepOutcome {
            mode,
            report,
            raw_count,
            quota: self.ledger.status(),
        }
    }

    /// Persist `items` as a named saved search of `mode`.
    ///
    /// An empty result set is not saved and yields `None`.
    pub fn save(&self, name: &str, mode: SearchMode, items: &[ResultItem]) -> Result<Option<SavedSearch>> {
        if items.is_empty() {
            info!(name, "nothing to save");
            return Ok(None);
        }
        self.saved.save(name, mode.label(), items.to_vec()).map(Some)
    }

    fn record(&self, query: &str, mode: SearchMode, results: usize) {
        if results == 0 {
            return;
        }
        if let Err(err) = self.history.record(query, mode.label(), results) {
            warn!(error = %err, "failed to record search history");
        }
    }
}
