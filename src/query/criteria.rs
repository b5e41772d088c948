//! Structured inputs for each query kind.
//!
//! Criteria are plain data. Lists keep caller order so the rendered query
//! is reproducible.

use serde::Serialize;

use super::catalog::{
    AlumniField, ExperienceLevel, PlatformGroup, RecruiterKind, ResearchFocus, Seniority,
    SourceFilter,
};
use super::split_list;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobCriteria {
    pub sites: Vec<String>,
    pub titles: Vec<String>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub remote_only: bool,
    pub exclude: Vec<String>,
}

impl JobCriteria {
    /// Criteria scoped to a platform group's sites.
    pub fn for_platform(platform: PlatformGroup) -> Self {
        Self {
            sites: platform.sites().into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }
}

/// Who a people search is looking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum PeopleTarget {
    /// People working at a company.
    Company {
        company: String,
        role: Option<String>,
        seniority: Option<Seniority>,
        school: Option<String>,
    },
    /// Graduates of a school, optionally at given companies.
    Alumni {
        school: String,
        companies: Vec<String>,
        field: Option<AlumniField>,
        graduation_year: Option<String>,
    },
    /// Recruiters at a company.
    Recruiters {
        company: String,
        kind: RecruiterKind,
        focus: Option<String>,
        include_agency: bool,
    },
    /// Free keywords.
    Custom {
        keywords: String,
        company: Option<String>,
        location: Option<String>,
        school: Option<String>,
    },
}

impl PeopleTarget {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Company { .. } => "Company",
            Self::Alumni { .. } => "Alumni",
            Self::Recruiters { .. } => "Recruiters",
            Self::Custom { .. } => "Custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeopleCriteria {
    pub target: PeopleTarget,
    pub location: Option<String>,
    pub exclude: Vec<String>,
    pub open_to_work: bool,
}

impl PeopleCriteria {
    pub const fn new(target: PeopleTarget) -> Self {
        Self {
            target,
            location: None,
            exclude: Vec::new(),
            open_to_work: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyResearchCriteria {
    pub company: String,
    pub focus: ResearchFocus,
    pub source: SourceFilter,
    /// Extra free keywords, each required.
    pub keywords: Vec<String>,
}

/// Hand-assembled boolean search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BooleanCriteria {
    pub sites: Vec<String>,
    pub must_include: Vec<String>,
    pub should_include: Vec<String>,
    pub exact_phrases: Vec<String>,
    pub exclude: Vec<String>,
}

impl BooleanCriteria {
    /// Build from comma-separated text fields.
    pub fn from_lists(
        sites: Vec<String>,
        must_include: &str,
        should_include: &str,
        exact_phrases: &str,
        exclude: &str,
    ) -> Self {
        Self {
            sites,
            must_include: split_list(must_include),
            should_include: split_list(should_include),
            exact_phrases: split_list(exact_phrases),
            exclude: split_list(exclude),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
            && self.must_include.is_empty()
            && self.should_include.is_empty()
            && self.exact_phrases.is_empty()
            && self.exclude.is_empty()
    }
}
