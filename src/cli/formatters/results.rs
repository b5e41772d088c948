//! Result list and sweep table formatter

use colored::Colorize;

use crate::export::{RowKind, count_rows, job_rows, page_rows, person_rows};
use crate::search::{EntityCount, ResultItem, SweepSummary};

/// Numbered listing of `items` in the row shape `kind`.
pub fn render_results(items: &[ResultItem], kind: RowKind) -> String {
    if items.is_empty() {
        return "No results found.".dimmed().to_string();
    }

    let mut lines = Vec::with_capacity(items.len() * 3);
    match kind {
        RowKind::Jobs => {
            for (i, row) in job_rows(items).into_iter().enumerate() {
                lines.push(format!("{:>3}. {}", i + 1, row.title.bold()));
                let company = if row.company.is_empty() {
                    row.source.to_string()
                } else {
                    format!("{} · {}", row.company, row.source)
                };
                lines.push(format!("     {}", company.cyan()));
                lines.push(format!("     {}", row.link.dimmed()));
            }
        }
        RowKind::People => {
            for (i, row) in person_rows(items).into_iter().enumerate() {
                lines.push(format!("{:>3}. {}", i + 1, row.name.bold()));
                if !row.headline.is_empty() {
                    lines.push(format!("     {}", row.headline.cyan()));
                }
                lines.push(format!("     {}", row.profile.dimmed()));
            }
        }
        RowKind::Pages => {
            for (i, row) in page_rows(items).into_iter().enumerate() {
                lines.push(format!("{:>3}. {}", i + 1, row.title.bold()));
                if !row.snippet.is_empty() {
                    lines.push(format!("     {}", truncate(&row.snippet, 160)));
                }
                lines.push(format!("     {}", row.link.dimmed()));
            }
        }
    }
    lines.join("\n")
}

/// Aligned table of sweep cells, in the order given.
pub fn render_counts(counts: &[&EntityCount]) -> String {
    let owned: Vec<EntityCount> = counts.iter().map(|&cell| cell.clone()).collect();
    let rows = count_rows(&owned);
    let width = rows
        .iter()
        .map(|row| row.company.chars().count())
        .max()
        .unwrap_or(0)
        .max("Company".len());

    let mut lines = vec![format!(
        "{}",
        format!("{:width$}  {:<14}  {:>6}", "Company", "Time Period", "Postings").bold()
    )];
    for row in rows {
        lines.push(format!(
            "{:width$}  {:<14}  {:>6}",
            row.company, row.timeframe, row.count
        ));
    }
    lines.join("\n")
}

pub fn render_summary(summary: &SweepSummary) -> String {
    let leader = summary.most_active.as_deref().map_or_else(
        || "n/a".to_string(),
        |name| format!("{name} ({} postings)", summary.most_active_count),
    );
    format!(
        "{} {}\n{} {}\n{} {:.1}",
        "Most active:".dimmed(),
        leader.green(),
        "Total postings:".dimmed(),
        summary.total,
        "Average per search:".dimmed(),
        summary.average
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
