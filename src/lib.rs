pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod dedup;
pub mod error;
pub mod export;
pub mod history;
pub mod query;
pub mod quota;
pub mod search;
pub mod session;
pub mod storage;
pub mod test_utils;

pub use error::{Result, XrayError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
