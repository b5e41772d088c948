//! Recent-search history and saved result sets.

pub mod recent;
pub mod saved;

use std::fmt;

use serde::Serialize;

pub use recent::{HistoryEntry, HistoryStore, MAX_HISTORY};
pub use saved::{SavedSearch, SavedSearchStore};

/// Which kind of search produced a history entry or saved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchMode {
    Jobs,
    People,
    CompanyResearch,
    Boolean,
    Template,
    BatchCompany,
    Competitors,
}

impl SearchMode {
    /// Label persisted in the history and saved-search documents.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jobs => "Jobs",
            Self::People => "People",
            Self::CompanyResearch => "Company Research",
            Self::Boolean => "Boolean Builder",
            Self::Template => "Template",
            Self::BatchCompany => "Batch Company",
            Self::Competitors => "Competitor Analysis",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
