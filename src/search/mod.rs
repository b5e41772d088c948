//! Search execution for xray
//!
//! The core never talks HTTP directly. It is handed a [`SearchProvider`]
//! and drives it page by page through the [`SearchOrchestrator`], which is
//! the only place the daily quota is consulted and charged.

pub mod google;
pub mod orchestrator;
pub mod sweep;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use google::GoogleSearch;
pub use orchestrator::{PageSpec, SearchOrchestrator, SearchOutcome, StopReason};
pub use sweep::{EntityCount, SweepPlan, SweepReport, SweepSummary};

/// Tag key naming the company a sweep result was found for.
pub const TAG_ENTITY: &str = "search_company";
/// Tag key naming the date restriction a sweep result was found under.
pub const TAG_TIMEFRAME: &str = "timeframe";

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    /// Caller-attached labels, e.g. the originating company of a sweep.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: String::new(),
            tags: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, key: &str, value: impl Into<String>) -> Self {
        self.tags.insert(key.to_string(), value.into());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Freshness window understood by the search backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DateRestrict {
    /// Past 24 hours
    #[value(name = "d1", alias = "24h")]
    D1,
    /// Past 3 days
    #[value(name = "d3", alias = "3d")]
    D3,
    /// Past week
    #[value(name = "w1", alias = "week")]
    W1,
    /// Past month
    #[value(name = "m1", alias = "month")]
    M1,
    /// Past 3 months
    #[value(name = "m3", alias = "3months")]
    M3,
}

impl DateRestrict {
    /// Wire code passed to the backend.
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "d1",
            Self::D3 => "d3",
            Self::W1 => "w1",
            Self::M1 => "m1",
            Self::M3 => "m3",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::D1 => "24 Hours",
            Self::D3 => "3 Days",
            Self::W1 => "Past Week",
            Self::M1 => "Past Month",
            Self::M3 => "Past 3 Months",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "d1" => Some(Self::D1),
            "d3" => Some(Self::D3),
            "w1" => Some(Self::W1),
            "m1" => Some(Self::M1),
            "m3" => Some(Self::M3),
            _ => None,
        }
    }
}

/// Arguments for a single page request.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub page_size: u32,
    /// 1-based offset of the first result.
    pub start: u32,
    pub date_restrict: Option<DateRestrict>,
}

/// The external search capability.
///
/// `Ok(vec![])` means the backend answered with zero results; any failure
/// to complete the call must be an `Err`.
pub trait SearchProvider {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<ResultItem>>;
}

impl<P: SearchProvider + ?Sized> SearchProvider for &P {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<ResultItem>> {
        (**self).search(request)
    }
}
