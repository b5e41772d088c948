//! xray saved - saved result sets.
//!
//! Positions are 1-based on the command line and shift after a delete, so
//! list again before deleting a second entry.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::formatters::render_results;
use crate::cli::output::emit_json;
use crate::error::{Result, XrayError};
use crate::export::{RowKind, export_results};
use crate::history::{SavedSearch, SearchMode};

#[derive(Args, Debug)]
pub struct SavedArgs {
    #[command(subcommand)]
    pub command: SavedCommand,
}

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved searches
    List,
    /// Show the results of a saved search
    Show(SavedShowArgs),
    /// Delete a saved search by position
    Delete(SavedDeleteArgs),
}

#[derive(Args, Debug)]
pub struct SavedShowArgs {
    /// Position from `xray saved list`
    pub index: usize,

    /// Write the results to a CSV file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SavedDeleteArgs {
    /// Position from `xray saved list`
    pub index: usize,
}

pub fn run(ctx: &AppContext, args: &SavedArgs) -> Result<()> {
    match &args.command {
        SavedCommand::List => run_list(ctx),
        SavedCommand::Show(show) => run_show(ctx, show),
        SavedCommand::Delete(delete) => run_delete(ctx, delete),
    }
}

/// 1-based position to list index. Zero maps to no entry.
fn to_index(position: usize) -> Option<usize> {
    position.checked_sub(1)
}

/// Row shape for a saved set, from its stored mode label.
fn row_kind(saved: &SavedSearch) -> RowKind {
    let mode = match saved.kind.as_str() {
        "Jobs" | "Batch Company" | "Competitor Analysis" => SearchMode::Jobs,
        "People" => SearchMode::People,
        _ => SearchMode::Boolean,
    };
    let profiles = saved
        .results
        .first()
        .is_some_and(|item| item.link.contains("linkedin.com/in"));
    RowKind::for_results(mode, if profiles { "linkedin.com/in" } else { "" })
}

fn run_list(ctx: &AppContext) -> Result<()> {
    let searches = ctx.saved().list();

    if ctx.robot_mode {
        let entries: Vec<serde_json::Value> = searches
            .iter()
            .enumerate()
            .map(|(i, saved)| {
                serde_json::json!({
                    "index": i + 1,
                    "name": saved.name,
                    "type": saved.kind,
                    "results": saved.results.len(),
                    "created": saved.created,
                })
            })
            .collect();
        return emit_json(&serde_json::json!({
            "status": "ok",
            "count": entries.len(),
            "saved": entries,
        }));
    }

    if searches.is_empty() {
        println!("{}", "No saved searches.".dimmed());
        return Ok(());
    }
    for (i, saved) in searches.iter().enumerate() {
        println!(
            "{:>3}. {}  {}  {} results  {}",
            i + 1,
            saved.name.bold(),
            saved.kind.cyan(),
            saved.results.len(),
            saved.created.dimmed()
        );
    }
    Ok(())
}

fn run_show(ctx: &AppContext, args: &SavedShowArgs) -> Result<()> {
    let saved = to_index(args.index)
        .and_then(|index| ctx.saved().get(index))
        .ok_or(XrayError::SavedSearchNotFound(args.index))?;
    let kind = row_kind(&saved);

    if let Some(path) = &args.export {
        export_results(path, kind, &saved.results)?;
    }

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "index": args.index,
            "saved": saved,
            "exported": args.export,
        }));
    }

    println!(
        "{}  {}  {}",
        saved.name.bold(),
        saved.kind.cyan(),
        saved.created.dimmed()
    );
    println!();
    println!("{}", render_results(&saved.results, kind));
    if let Some(path) = &args.export {
        println!("{} exported to {}", "✓".green(), path.display());
    }
    Ok(())
}

fn run_delete(ctx: &AppContext, args: &SavedDeleteArgs) -> Result<()> {
    let removed = match to_index(args.index) {
        Some(index) => ctx.saved().delete_at(index)?,
        None => None,
    };

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "index": args.index,
            "deleted": removed.as_ref().map(|saved| &saved.name),
        }));
    }

    match removed {
        Some(saved) => println!("{} deleted \"{}\"", "✓".green(), saved.name),
        None => println!("{}", format!("No saved search at position {}.", args.index).dimmed()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ResultItem;

    fn saved(kind: &str, link: &str) -> SavedSearch {
        SavedSearch {
            name: "s".into(),
            kind: kind.into(),
            results: vec![ResultItem::new("t", link)],
            created: "2026-10-01 09:00".into(),
        }
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(to_index(1), Some(0));
        assert_eq!(to_index(0), None);
    }

    #[test]
    fn row_kind_from_stored_label() {
        assert_eq!(row_kind(&saved("Jobs", "https://x.co")), RowKind::Jobs);
        assert_eq!(row_kind(&saved("People", "https://x.co")), RowKind::People);
        assert_eq!(
            row_kind(&saved("Template", "https://linkedin.com/in/jane")),
            RowKind::People
        );
        assert_eq!(row_kind(&saved("Boolean Builder", "https://x.co")), RowKind::Pages);
    }
}
