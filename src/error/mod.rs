//! Errors for xray.
//!
//! Every [`XrayError`] maps onto an [`ErrorCode`]; robot mode prints the
//! [`StructuredError`] form so scripts can branch on the code instead of
//! the message.

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

#[derive(Error, Debug)]
pub enum XrayError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Search request failed: {0}")]
    SearchTransport(String),

    #[error("Daily quota exceeded ({used}/{limit}). Try again tomorrow")]
    QuotaExhausted { used: u32, limit: u32 },

    #[error("Query error: {0}")]
    QueryInvalid(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Saved search not found at index {0}")]
    SavedSearchNotFound(usize),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl XrayError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Csv(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::SearchTransport(_) => ErrorCode::SearchTransport,
            Self::QuotaExhausted { .. } => ErrorCode::QuotaExhausted,
            Self::QueryInvalid(_) => ErrorCode::SearchQueryInvalid,
            Self::Storage(_) => ErrorCode::StorageWriteError,
            Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
            Self::SavedSearchNotFound(_) | Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Values worth echoing back to a script, if any.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            Self::QuotaExhausted { used, limit } => {
                Some(serde_json::json!({ "used": used, "limit": limit }))
            }
            Self::SavedSearchNotFound(index) => Some(serde_json::json!({ "index": index })),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_xray_error(self)
    }
}

/// Machine-readable view of an [`XrayError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "CONFIG_MISSING_REQUIRED")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 304)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "config", "network")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_xray_error(err: &XrayError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Result type alias using `XrayError`.
pub type Result<T> = std::result::Result<T, XrayError>;
