//! Property tests for query rendering, deduplication and the persisted stores.

mod dedup_tests;
mod query_tests;
mod store_tests;
