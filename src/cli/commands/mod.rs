//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command
//!
//! Search commands only build criteria; the shared tail (dry run, session,
//! save, export, rendering) lives here.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde_json::json;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::cli::Commands;
use crate::cli::formatters::{render_counts, render_results, render_summary};
use crate::cli::output::{emit_json, robot_ok};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::export::{RowKind, export_counts, export_results};
use crate::history::SearchMode;
use crate::query::Query;
use crate::search::{PageSpec, ResultItem, SweepPlan};
use crate::session::{SearchReport, SearchSession, SweepOutcome};

pub mod batch;
pub mod boolean;
pub mod competitors;
pub mod history;
pub mod jobs;
pub mod people;
pub mod quota;
pub mod research;
pub mod saved;
pub mod template;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Jobs(args) => jobs::run(ctx, args),
        Commands::People(args) => people::run(ctx, args),
        Commands::Research(args) => research::run(ctx, args),
        Commands::Boolean(args) => boolean::run(ctx, args),
        Commands::Template(args) => template::run(ctx, args),
        Commands::Batch(args) => batch::run(ctx, args),
        Commands::Competitors(args) => competitors::run(ctx, args),
        Commands::History(args) => history::run(ctx, args),
        Commands::Saved(args) => saved::run(ctx, args),
        Commands::Quota(args) => quota::run(ctx, args),
    }
}

/// Flags every search command accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchOptions {
    /// Print the query and exit without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Save the results under this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Write the results to a CSV file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

/// Pagination flags; unset values fall back to the `[search]` config.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Pages to fetch
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub pages: Option<u32>,

    /// Results per page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub page_size: Option<u32>,
}

impl PageArgs {
    pub fn spec(&self, defaults: &SearchConfig) -> PageSpec {
        PageSpec::new(
            self.page_size.unwrap_or(defaults.page_size),
            self.pages.unwrap_or(defaults.pages),
        )
    }
}

/// Paginate `query`, then save, export and print the cleaned results.
pub(crate) fn run_search(
    ctx: &AppContext,
    query: Query,
    mode: SearchMode,
    spec: &PageSpec,
    options: &SearchOptions,
    mut warnings: Vec<String>,
) -> Result<()> {
    for warning in &warnings {
        warn!("{warning}");
    }

    if options.dry_run {
        return print_query(ctx, &query, mode, &warnings);
    }

    let provider = ctx.search_provider()?;
    let session = ctx.session(&provider);
    let report = session.run(query, mode, spec)?;
    let kind = RowKind::for_results(mode, report.query.as_str());

    let saved = save_results(&session, options, mode, &report.items, &mut warnings);
    let exported = match &options.export {
        Some(path) => {
            export_results(path, kind, &report.items)?;
            info!(path = %path.display(), "results exported");
            Some(path.clone())
        }
        None => None,
    };

    if ctx.robot_mode {
        let response = robot_ok(json!({
            "report": report,
            "saved": saved,
            "exported": exported,
        }))
        .with_warnings(warnings);
        return emit_json(&response);
    }

    print_report(&report, kind);
    print_footer(saved.as_deref(), exported.as_ref(), &warnings);
    Ok(())
}

/// How a sweep's count table is ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountOrder {
    /// Highest count first.
    ByVolume,
    /// Timeframe by timeframe, with a comparison summary.
    AsRun,
}

/// Run a sweep, then save, export and print it.
pub(crate) fn run_sweep<F>(
    ctx: &AppContext,
    plan: &SweepPlan,
    mode: SearchMode,
    label: &str,
    build: F,
    order: CountOrder,
    options: &SearchOptions,
) -> Result<()>
where
    F: Fn(&str) -> Query,
{
    if options.dry_run {
        let queries: Vec<(&str, Query)> = plan
            .entity_names()
            .into_iter()
            .map(|entity| (entity, build(entity)))
            .collect();
        if ctx.robot_mode {
            let queries: Vec<serde_json::Value> = queries
                .iter()
                .map(|(company, query)| json!({ "company": company, "query": query }))
                .collect();
            return emit_json(&robot_ok(json!({
                "dry_run": true,
                "mode": mode,
                "queries": queries,
            })));
        }
        for (company, query) in &queries {
            println!("{}: {query}", company.bold());
        }
        return Ok(());
    }

    let provider = ctx.search_provider()?;
    let session = ctx.session(&provider);
    let outcome = session.sweep(plan, mode, label, build);

    let mut warnings = outcome.report.errors.clone();
    let saved = save_results(&session, options, mode, &outcome.report.items, &mut warnings);
    let exported = match &options.export {
        Some(path) => {
            export_counts(path, &outcome.report.counts)?;
            Some(path.clone())
        }
        None => None,
    };

    if ctx.robot_mode {
        let response = robot_ok(json!({
            "outcome": outcome,
            "summary": outcome.report.summary(),
            "saved": saved,
            "exported": exported,
        }))
        .with_warnings(warnings);
        return emit_json(&response);
    }

    print_sweep(&outcome, order);
    print_footer(saved.as_deref(), exported.as_ref(), &warnings);
    Ok(())
}

/// Apply `--save`. Failures and empty result sets become warnings.
fn save_results(
    session: &SearchSession<'_>,
    options: &SearchOptions,
    mode: SearchMode,
    items: &[ResultItem],
    warnings: &mut Vec<String>,
) -> Option<String> {
    let name = options.save.as_deref()?;
    match session.save(name, mode, items) {
        Ok(Some(saved)) => Some(saved.name),
        Ok(None) => {
            warnings.push(format!("no results to save as \"{name}\""));
            None
        }
        Err(err) => {
            warnings.push(format!("could not save results: {err}"));
            None
        }
    }
}

fn print_query(ctx: &AppContext, query: &Query, mode: SearchMode, warnings: &[String]) -> Result<()> {
    if ctx.robot_mode {
        let response = robot_ok(json!({
            "dry_run": true,
            "mode": mode,
            "query": query,
        }))
        .with_warnings(warnings.to_vec());
        return emit_json(&response);
    }
    println!("{query}");
    Ok(())
}

fn print_report(report: &SearchReport, kind: RowKind) {
    println!("{} {}", "Query:".dimmed(), report.query);
    println!();
    println!("{}", render_results(&report.items, kind));
    println!();
    println!(
        "{} unique of {} results · {} page(s) · quota {}/{}",
        report.items.len().to_string().bold(),
        report.raw_count,
        report.pages_fetched,
        report.quota.used,
        report.quota.limit
    );
    if let Some(message) = &report.message {
        println!("{} {message}", "!".yellow().bold());
    }
}

fn print_sweep(outcome: &SweepOutcome, order: CountOrder) {
    let report = &outcome.report;
    let counts = match order {
        CountOrder::ByVolume => report.counts_by_volume(),
        CountOrder::AsRun => report.counts.iter().collect(),
    };
    println!("{}", render_counts(&counts));
    println!();
    if order == CountOrder::AsRun {
        println!("{}", render_summary(&report.summary()));
        println!();
    }
    println!("{}", render_results(&report.items, RowKind::Jobs));
    println!();
    println!(
        "{} unique of {} results · quota {}/{}",
        report.items.len().to_string().bold(),
        outcome.raw_count,
        outcome.quota.used,
        outcome.quota.limit
    );
    if report.quota_exhausted {
        println!("{} daily quota reached, sweep stopped early", "!".yellow().bold());
    }
}

fn print_footer(saved: Option<&str>, exported: Option<&PathBuf>, warnings: &[String]) {
    if let Some(name) = saved {
        println!("{} saved as \"{name}\"", "✓".green());
    }
    if let Some(path) = exported {
        println!("{} exported to {}", "✓".green(), path.display());
    }
    for warning in warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
}

/// Trimmed, non-empty values in input order.
pub(crate) fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept `example.com` or `site:example.com`.
pub(crate) fn site_scope(site: &str) -> String {
    let site = site.trim();
    if site.starts_with("site:") {
        site.to_string()
    } else {
        format!("site:{site}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_args_fall_back_to_config() {
        let defaults = SearchConfig::default();
        let spec = PageArgs::default().spec(&defaults);
        assert_eq!(spec.page_size, defaults.page_size);
        assert_eq!(spec.pages, defaults.pages);

        let spec = PageArgs {
            pages: Some(3),
            page_size: Some(5),
        }
        .spec(&defaults);
        assert_eq!((spec.pages, spec.page_size), (3, 5));
    }

    #[test]
    fn site_scope_adds_prefix_once() {
        assert_eq!(site_scope("jobs.lever.co"), "site:jobs.lever.co");
        assert_eq!(site_scope(" site:jobs.lever.co "), "site:jobs.lever.co");
    }

    #[test]
    fn clean_list_drops_blanks() {
        let values = vec![" Acme ".to_string(), String::new(), "Globex".to_string()];
        assert_eq!(clean_list(&values), vec!["Acme", "Globex"]);
    }
}
