//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 3xx: Config errors
//! - 4xx: Search errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `ConfigMissingRequired` -> E304).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing (API key, engine id)
    ConfigMissingRequired,

    // ========================================
    // Search errors (4xx)
    // ========================================
    /// E401: Query inputs are unusable (e.g. nothing to search for)
    SearchQueryInvalid,
    /// E404: The daily call budget is spent
    QuotaExhausted,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: The search provider could not complete the call
    SearchTransport,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Failed to read from storage
    StorageReadError,
    /// E602: Failed to write to storage
    StorageWriteError,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: Input validation failed
    ValidationFailed,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E905: Generic not found (catch-all)
    NotFound,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Numeric code; the hundreds digit is the category.
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,
            Self::SearchQueryInvalid => 401,
            Self::QuotaExhausted => 404,
            Self::SearchTransport => 501,
            Self::StorageReadError => 601,
            Self::StorageWriteError => 602,
            Self::SerializationError => 605,
            Self::ValidationFailed => 801,
            Self::NotFound => 905,
            Self::IoError => 906,
        }
    }

    /// `E`-prefixed form shown to users, e.g. `E304`.
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Static recovery hint. See `suggestions` for context-aware ones.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => "Check TOML syntax in the config file, or the value of the XRAY_* variable named above",
            Self::ConfigMissingRequired => "Set GOOGLE_API_KEY and GOOGLE_CX in the environment, a .env file, or the [google] section of the config",
            Self::SearchQueryInvalid => "Add at least one title, keyword or site so the query is not empty. Use --dry-run to inspect it",
            Self::QuotaExhausted => "The daily budget is spent. Run `xray quota` to check usage and try again tomorrow",
            Self::SearchTransport => "Check network connectivity and that the API key and engine id are valid",
            Self::StorageReadError => "Check that the data directory (XRAY_DATA_DIR) exists and is readable",
            Self::StorageWriteError => "Check disk space and write permissions on the data directory",
            Self::SerializationError => "A stored document could not be encoded or decoded. Remove the file named in the message to reset it",
            Self::ValidationFailed => "Review the arguments and fix each reported issue. Run with --help for usage",
            Self::NotFound => "The requested item was not found. Run `xray saved list` to see valid indexes",
            Self::IoError => "Check that the export path or data directory exists and is writable",
        }
    }

    /// Whether the user can fix this without a code change.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            3 => "config",
            4 => "search",
            5 => "network",
            6 => "storage",
            8 => "validation",
            9 => "internal",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code_string())
    }
}
