//! Boolean query construction.
//!
//! Every query is assembled through [`QueryBuilder`], which collects clauses
//! into slots and renders them in one fixed order:
//!
//! 1. site scopes, as a single `( … OR … )` group
//! 2. required terms
//! 3. OR groups
//! 4. exact phrases
//! 5. exclusions
//!
//! Empty slots render nothing, so the output never carries empty
//! parentheses or stray whitespace. Inputs are ordered slices, which keeps
//! rendering byte-for-byte deterministic.

pub mod builders;
pub mod catalog;
pub mod criteria;
pub mod templates;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use builders::{
    build_boolean_query, build_company_query, build_entity_job_query, build_job_query,
    build_people_query,
};
pub use criteria::{
    BooleanCriteria, CompanyResearchCriteria, JobCriteria, PeopleCriteria, PeopleTarget,
};

/// A rendered search string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// Wrap a pre-authored query string as-is.
    pub fn raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    sites: Vec<String>,
    required: Vec<String>,
    groups: Vec<String>,
    phrases: Vec<String>,
    exclusions: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add site scopes such as `site:jobs.lever.co`.
    #[must_use]
    pub fn sites<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sites.extend(non_blank(sites));
        self
    }

    /// A required term, quoted only when it contains whitespace.
    #[must_use]
    pub fn term(mut self, term: impl AsRef<str>) -> Self {
        if let Some(term) = clean(term.as_ref()) {
            self.required.push(quote_if_spaced(term));
        }
        self
    }

    #[must_use]
    pub fn terms<I, S>(self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        terms.into_iter().fold(self, |builder, term| builder.term(term))
    }

    /// Titles or roles. Several become a quoted OR group; a lone one is a
    /// plain required term.
    #[must_use]
    pub fn titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let titles = non_blank(titles);
        match titles.as_slice() {
            [] => {}
            [single] => self.required.push(quote_if_spaced(single)),
            many => self.required.push(or_group(many.iter().map(|t| quote(t)))),
        }
        self
    }

    /// Free should-include terms. Every option is quoted.
    #[must_use]
    pub fn any_of<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let quoted: Vec<String> = non_blank(terms).iter().map(|t| quote(t)).collect();
        if let Some(group) = group_of(quoted) {
            self.groups.push(group);
        }
        self
    }

    /// A catalog preset group. Options are quoted only when spaced.
    #[must_use]
    pub fn preset<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered: Vec<String> = non_blank(options)
            .iter()
            .map(|o| quote_if_spaced(o))
            .collect();
        if let Some(group) = group_of(rendered) {
            self.groups.push(group);
        }
        self
    }

    /// An exact phrase, always quoted.
    #[must_use]
    pub fn phrase(mut self, phrase: impl AsRef<str>) -> Self {
        if let Some(phrase) = clean(phrase.as_ref()) {
            self.phrases.push(quote(phrase));
        }
        self
    }

    #[must_use]
    pub fn phrases<I, S>(self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phrases
            .into_iter()
            .fold(self, |builder, phrase| builder.phrase(phrase))
    }

    /// Optional phrase helper for criteria fields.
    #[must_use]
    pub fn phrase_opt(self, phrase: Option<&str>) -> Self {
        match phrase {
            Some(phrase) => self.phrase(phrase),
            None => self,
        }
    }

    #[must_use]
    pub fn exclude<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclusions.extend(
            non_blank(terms)
                .iter()
                .map(|t| format!("-{}", quote_if_spaced(t))),
        );
        self
    }

    pub fn build(self) -> Query {
        let mut clauses = Vec::with_capacity(
            1 + self.required.len() + self.groups.len() + self.phrases.len() + self.exclusions.len(),
        );
        if !self.sites.is_empty() {
            clauses.push(or_group(self.sites));
        }
        clauses.extend(self.required);
        clauses.extend(self.groups);
        clauses.extend(self.phrases);
        clauses.extend(self.exclusions);
        Query(clauses.join(" "))
    }
}

/// Split a comma-separated field into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn non_blank<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| clean(item.as_ref()).map(str::to_string))
        .collect()
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn quote(text: &str) -> String {
    if is_quoted(text) {
        text.to_string()
    } else {
        format!("\"{text}\"")
    }
}

fn quote_if_spaced(text: &str) -> String {
    if text.chars().any(char::is_whitespace) {
        quote(text)
    } else {
        text.to_string()
    }
}

fn or_group<I: IntoIterator<Item = String>>(options: I) -> String {
    let joined: Vec<String> = options.into_iter().collect();
    format!("({})", joined.join(" OR "))
}

/// One option renders bare; several become an OR group.
fn group_of(mut options: Vec<String>) -> Option<String> {
    match options.len() {
        0 => None,
        1 => options.pop(),
        _ => Some(or_group(options)),
    }
}
