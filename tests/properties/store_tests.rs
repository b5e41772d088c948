use chrono::NaiveDate;
use proptest::prelude::*;

use xray::clock::FixedClock;
use xray::history::{HistoryStore, SavedSearchStore};
use xray::quota::QuotaLedger;
use xray::search::ResultItem;
use xray::storage::MemoryStore;

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2026, 4, 20).unwrap())
}

proptest! {
    #[test]
    fn history_is_bounded_and_newest_first(
        queries in prop::collection::vec("[a-z]{1,12}", 0..40),
        cap in 1usize..25,
    ) {
        let store = MemoryStore::new();
        let clock = clock();
        let history = HistoryStore::with_capacity(&store, &clock, cap);
        for query in &queries {
            history.record(query, "Jobs", 1).unwrap();
        }

        let entries = history.list();
        prop_assert_eq!(entries.len(), queries.len().min(cap));
        if let Some(last) = queries.last() {
            prop_assert_eq!(&entries[0].query, last);
        }
    }

    #[test]
    fn ledger_counts_every_increment(calls in 0u32..130, limit in 1u32..120) {
        let store = MemoryStore::new();
        let clock = clock();
        let ledger = QuotaLedger::new(&store, &clock, limit);
        for _ in 0..calls {
            ledger.increment().unwrap();
        }

        let status = ledger.status();
        prop_assert_eq!(status.used, calls);
        prop_assert_eq!(status.remaining, limit.saturating_sub(calls));
        prop_assert_eq!(status.is_exhausted(), calls >= limit);
    }

    #[test]
    fn saved_delete_only_removes_in_range(count in 0usize..6, index in 0usize..10) {
        let store = MemoryStore::new();
        let clock = clock();
        let saved = SavedSearchStore::new(&store, &clock);
        for i in 0..count {
            saved
                .save(&format!("s{i}"), "Jobs", vec![ResultItem::new("t", "https://x.co")])
                .unwrap();
        }

        let removed = saved.delete_at(index).unwrap();
        prop_assert_eq!(removed.is_some(), index < count);
        let expected = if index < count { count - 1 } else { count };
        prop_assert_eq!(saved.list().len(), expected);
    }
}
