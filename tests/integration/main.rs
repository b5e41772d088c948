//! Integration tests for xray's library surface: the HTTP provider against a
//! mock server, and search sessions over a real data directory.

#[macro_use]
mod fixture;
mod provider_tests;
mod session_tests;
mod storage_tests;
