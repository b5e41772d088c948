//! Tabular views of results and CSV export.
//!
//! Raw hits are turned into one of three row shapes depending on what was
//! searched: job postings, LinkedIn profiles, or plain pages. Sweep counts
//! have their own row shape.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::history::SearchMode;
use crate::search::{EntityCount, ResultItem, TAG_ENTITY};

/// Job board a posting link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    Greenhouse,
    Lever,
    LinkedIn,
    Workday,
    Other,
}

impl Source {
    pub fn detect(link: &str) -> Self {
        if link.contains("greenhouse.io") {
            Self::Greenhouse
        } else if link.contains("lever.co") {
            Self::Lever
        } else if link.contains("linkedin.com") {
            Self::LinkedIn
        } else if link.contains("myworkdayjobs.com") {
            Self::Workday
        } else {
            Self::Other
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Greenhouse => "Greenhouse",
            Self::Lever => "Lever",
            Self::LinkedIn => "LinkedIn",
            Self::Workday => "Workday",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Source")]
    pub source: &'static str,
    #[serde(rename = "Link")]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Profile")]
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Snippet")]
    pub snippet: String,
    #[serde(rename = "Link")]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Time Period")]
    pub timeframe: String,
    #[serde(rename = "Job Postings")]
    pub count: usize,
}

/// A CSV row type with a fixed header.
///
/// The header must match the serialized field names in order.
pub trait CsvRow: Serialize {
    const HEADER: &'static [&'static str];
}

impl CsvRow for JobRow {
    const HEADER: &'static [&'static str] = &["Title", "Company", "Source", "Link"];
}

impl CsvRow for PersonRow {
    const HEADER: &'static [&'static str] = &["Name", "Headline", "Profile"];
}

impl CsvRow for PageRow {
    const HEADER: &'static [&'static str] = &["Title", "Snippet", "Link"];
}

impl CsvRow for CountRow {
    const HEADER: &'static [&'static str] = &["Company", "Time Period", "Job Postings"];
}

/// Row shape appropriate for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Jobs,
    People,
    Pages,
}

impl RowKind {
    pub fn for_results(mode: SearchMode, query: &str) -> Self {
        match mode {
            SearchMode::Jobs | SearchMode::BatchCompany | SearchMode::Competitors => Self::Jobs,
            SearchMode::People => Self::People,
            _ if query.contains("linkedin.com/in") => Self::People,
            _ => Self::Pages,
        }
    }
}

/// Company name for a posting: sweep tag, ATS URL slug, or LinkedIn title.
pub fn company_of(item: &ResultItem) -> String {
    if let Some(tagged) = item.tag(TAG_ENTITY) {
        return title_case(tagged);
    }

    let company = match Source::detect(&item.link) {
        Source::Greenhouse | Source::Lever => item.link.split('/').nth(3).unwrap_or_default(),
        Source::LinkedIn => item
            .title
            .rsplit_once(" at ")
            .map(|(_, rest)| rest.split(" - ").next().unwrap_or_default().trim())
            .unwrap_or_default(),
        Source::Workday | Source::Other => "",
    };
    title_case(&company.replace('-', " "))
}

/// Split a LinkedIn profile title into name and headline.
pub fn split_profile_title(title: &str) -> (String, String) {
    let cleaned = title.replace(" | LinkedIn", "");
    let mut parts = cleaned.split(" - ");
    let name = parts.next().unwrap_or_default().trim().to_string();
    let headline = parts.collect::<Vec<_>>().join(" - ").trim().to_string();
    (name, headline)
}

pub fn job_rows(items: &[ResultItem]) -> Vec<JobRow> {
    items
        .iter()
        .map(|item| JobRow {
            title: item.title.clone(),
            company: company_of(item),
            source: Source::detect(&item.link).label(),
            link: item.link.clone(),
        })
        .collect()
}

pub fn person_rows(items: &[ResultItem]) -> Vec<PersonRow> {
    items
        .iter()
        .map(|item| {
            let (name, headline) = split_profile_title(&item.title);
            PersonRow {
                name,
                headline,
                profile: item.link.clone(),
            }
        })
        .collect()
}

pub fn page_rows(items: &[ResultItem]) -> Vec<PageRow> {
    items
        .iter()
        .map(|item| PageRow {
            title: item.title.clone(),
            snippet: item.snippet.clone(),
            link: item.link.clone(),
        })
        .collect()
}

pub fn count_rows(counts: &[EntityCount]) -> Vec<CountRow> {
    counts
        .iter()
        .map(|cell| CountRow {
            company: cell.entity.clone(),
            timeframe: cell
                .timeframe
                .map_or_else(|| "Anytime".to_string(), |t| t.label().to_string()),
            count: cell.count,
        })
        .collect()
}

/// Write rows as CSV with a header line, even when there are no rows.
pub fn write_csv<W: Write, R: CsvRow>(writer: W, rows: &[R]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(R::HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the result set to `path` in the row shape `kind`.
pub fn export_results(path: &Path, kind: RowKind, items: &[ResultItem]) -> Result<usize> {
    let file = File::create(path)?;
    match kind {
        RowKind::Jobs => write_csv(file, &job_rows(items))?,
        RowKind::People => write_csv(file, &person_rows(items))?,
        RowKind::Pages => write_csv(file, &page_rows(items))?,
    }
    debug!(path = %path.display(), rows = items.len(), "exported csv");
    Ok(items.len())
}

pub fn export_counts(path: &Path, counts: &[EntityCount]) -> Result<usize> {
    write_csv(File::create(path)?, &count_rows(counts))?;
    Ok(counts.len())
}

/// Capitalize the first letter of each word and lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
