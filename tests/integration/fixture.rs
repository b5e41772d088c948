//! Shared setup for integration tests.

use chrono::NaiveDate;
use httpmock::MockServer;
use xray::clock::FixedClock;
use xray::config::GoogleConfig;
use xray::history::{HistoryStore, SavedSearchStore};
use xray::quota::{DAILY_LIMIT, QuotaLedger};
use xray::search::{GoogleSearch, ResultItem, SearchProvider};
use xray::session::SearchSession;
use xray::storage::FileStore;
use xray::test_utils::DataDirFixture;

/// Assert that `$result` is an `Err` whose message contains `$needle`.
macro_rules! assert_err_contains {
    ($result:expr, $needle:expr) => {{
        match $result {
            Ok(_) => panic!("expected error containing {:?}, got Ok", $needle),
            Err(err) => {
                let text = err.to_string();
                println!("[ASSERT] error: {text}");
                assert!(
                    text.contains($needle),
                    "error {:?} does not contain {:?}",
                    text,
                    $needle
                );
            }
        }
    }};
}

/// A data directory, a file store over it, and a clock fixed on one day.
pub struct TestFixture {
    pub data: DataDirFixture,
    pub store: FileStore,
    pub clock: FixedClock,
}

impl TestFixture {
    pub fn new(test_name: &str) -> Self {
        println!("\n{}", "=".repeat(70));
        println!("[FIXTURE] Test: {test_name}");
        let data = DataDirFixture::new();
        let store = data.store();
        println!("{}", "=".repeat(70));
        Self {
            data,
            store,
            clock: FixedClock::on(day(12)),
        }
    }

    /// Move the fixture's clock to another day of the same month.
    pub fn on_day(mut self, d: u32) -> Self {
        self.clock = FixedClock::on(day(d));
        self
    }

    pub fn ledger(&self) -> QuotaLedger<'_> {
        QuotaLedger::new(&self.store, &self.clock, DAILY_LIMIT)
    }

    pub fn history(&self) -> HistoryStore<'_> {
        HistoryStore::new(&self.store, &self.clock)
    }

    pub fn saved(&self) -> SavedSearchStore<'_> {
        SavedSearchStore::new(&self.store, &self.clock)
    }

    pub fn session<'a>(&'a self, provider: &'a dyn SearchProvider) -> SearchSession<'a> {
        SearchSession::new(provider, self.ledger(), self.history(), self.saved())
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

/// Google config pointed at `server`.
pub fn google_config(server: &MockServer) -> GoogleConfig {
    GoogleConfig {
        api_key: Some("key-abc".to_string()),
        engine_id: Some("cx-xyz".to_string()),
        endpoint: server.url("/customsearch/v1"),
        timeout_secs: 5,
    }
}

pub fn google(server: &MockServer) -> GoogleSearch {
    GoogleSearch::from_config(&google_config(server)).unwrap()
}

/// `n` distinct items whose links and titles start with `prefix`.
pub fn items(prefix: &str, n: usize) -> Vec<ResultItem> {
    (0..n)
        .map(|i| {
            ResultItem::new(
                format!("{prefix} result {i}"),
                format!("https://example.com/{prefix}/{i}"),
            )
        })
        .collect()
}

/// Custom Search response body for `items`.
pub fn response_body(items: &[ResultItem]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|item| {
            serde_json::json!({
                "title": item.title,
                "link": item.link,
                "snippet": item.snippet,
            })
        })
        .collect();
    serde_json::json!({ "kind": "customsearch#search", "items": items })
}
