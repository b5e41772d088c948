//! Daily call budget.
//!
//! The ledger is one date-stamped counter. A stored date other than today
//! reads as a fresh day; the file itself is only rewritten on the next
//! increment, so a day with no searches never touches it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::error::Result;
use crate::storage::{self, DocumentStore, QUOTA_KEY};

/// Calls allowed per calendar day.
pub const DAILY_LIMIT: u32 = 100;

/// Persisted counter document: `{"date": "YYYY-MM-DD", "count": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaState {
    pub date: NaiveDate,
    pub count: u32,
}

/// Usage snapshot for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    pub remaining: u32,
    pub used: u32,
    pub limit: u32,
}

impl QuotaStatus {
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

pub struct QuotaLedger<'a> {
    store: &'a dyn DocumentStore,
    clock: &'a dyn Clock,
    daily_limit: u32,
}

impl<'a> QuotaLedger<'a> {
    pub fn new(store: &'a dyn DocumentStore, clock: &'a dyn Clock, daily_limit: u32) -> Self {
        Self {
            store,
            clock,
            daily_limit,
        }
    }

    /// Today's usage. Missing, corrupt, or stale state reads as unused.
    pub fn status(&self) -> QuotaStatus {
        let today = self.clock.today();
        let used = storage::load_typed::<QuotaState>(self.store, QUOTA_KEY)
            .filter(|state| state.date == today)
            .map_or(0, |state| state.count);

        QuotaStatus {
            remaining: self.daily_limit.saturating_sub(used),
            used,
            limit: self.daily_limit,
        }
    }

    /// Record one successful external call.
    pub fn increment(&self) -> Result<QuotaStatus> {
        let used = self.status().used + 1;
        let state = QuotaState {
            date: self.clock.today(),
            count: used,
        };
        storage::save_typed(self.store, QUOTA_KEY, &state)?;
        debug!(used, limit = self.daily_limit, "quota incremented");

        Ok(QuotaStatus {
            remaining: self.daily_limit.saturating_sub(used),
            used,
            limit: self.daily_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn fresh_store_has_full_budget() {
        let store = MemoryStore::new();
        let clock = FixedClock::on(day(1));
        let ledger = QuotaLedger::new(&store, &clock, DAILY_LIMIT);

        let status = ledger.status();
        assert_eq!((status.remaining, status.used), (DAILY_LIMIT, 0));
    }

    #[test]
    fn status_does_not_write() {
        let store = MemoryStore::new();
        let clock = FixedClock::on(day(1));
        let ledger = QuotaLedger::new(&store, &clock, DAILY_LIMIT);

        let _ = ledger.status();
        assert!(!store.contains(QUOTA_KEY));
    }

    #[test]
    fn k_increments_same_day() {
        let store = MemoryStore::new();
        let clock = FixedClock::on(day(1));
        let ledger = QuotaLedger::new(&store, &clock, DAILY_LIMIT);

        for _ in 0..7 {
            ledger.increment().unwrap();
        }
        let status = ledger.status();
        assert_eq!((status.remaining, status.used), (DAILY_LIMIT - 7, 7));
    }

    #[test]
    fn new_day_resets_logically() {
        let store = MemoryStore::new();
        let monday = FixedClock::on(day(4));
        QuotaLedger::new(&store, &monday, DAILY_LIMIT)
            .increment()
            .unwrap();

        let tuesday = FixedClock::on(day(5));
        let ledger = QuotaLedger::new(&store, &tuesday, DAILY_LIMIT);
        let status = ledger.status();
        assert_eq!((status.remaining, status.used), (DAILY_LIMIT, 0));

        // The stale document is left alone until the next increment.
        let stored = store.load(QUOTA_KEY).unwrap().unwrap();
        assert_eq!(stored["date"], "2026-05-04");

        let after = ledger.increment().unwrap();
        assert_eq!(after.used, 1);
        let stored = store.load(QUOTA_KEY).unwrap().unwrap();
        assert_eq!(stored, json!({ "date": "2026-05-05", "count": 1 }));
    }

    #[test]
    fn corrupt_document_is_permissive() {
        let store = MemoryStore::new();
        store.save(QUOTA_KEY, &json!({ "date": "yesterday-ish", "count": 99 })).unwrap();
        let clock = FixedClock::on(day(1));
        let ledger = QuotaLedger::new(&store, &clock, DAILY_LIMIT);

        assert_eq!(ledger.status().used, 0);
        assert_eq!(ledger.increment().unwrap().used, 1);
    }

    #[test]
    fn remaining_never_underflows() {
        let store = MemoryStore::new();
        store.save(QUOTA_KEY, &json!({ "date": "2026-05-01", "count": 140 })).unwrap();
        let clock = FixedClock::on(day(1));
        let ledger = QuotaLedger::new(&store, &clock, DAILY_LIMIT);

        let status = ledger.status();
        assert_eq!(status.remaining, 0);
        assert!(status.is_exhausted());
    }

    #[test]
    fn reaching_limit_exhausts() {
        let store = MemoryStore::new();
        let clock = FixedClock::on(day(2));
        let ledger = QuotaLedger::new(&store, &clock, 3);

        for _ in 0..3 {
            ledger.increment().unwrap();
        }
        assert!(ledger.status().is_exhausted());
    }
}
