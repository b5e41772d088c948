//! xray history - recent searches.

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List recent searches, newest first
    List(HistoryListArgs),
    /// Forget all recent searches
    Clear,
}

#[derive(Args, Debug)]
pub struct HistoryListArgs {
    /// Show at most this many entries
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &HistoryArgs) -> Result<()> {
    match &args.command {
        HistoryCommand::List(list) => run_list(ctx, list),
        HistoryCommand::Clear => run_clear(ctx),
    }
}

fn run_list(ctx: &AppContext, args: &HistoryListArgs) -> Result<()> {
    let mut entries = ctx.history().list();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "count": entries.len(),
            "entries": entries,
        }));
    }

    if entries.is_empty() {
        println!("{}", "No recent searches.".dimmed());
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {:<20} {:>4} results",
            entry.timestamp.dimmed(),
            entry.mode.cyan(),
            entry.results
        );
        println!("    {}", entry.query);
    }
    Ok(())
}

fn run_clear(ctx: &AppContext) -> Result<()> {
    ctx.history().clear()?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({ "status": "ok", "cleared": true }));
    }
    println!("{} history cleared", "✓".green());
    Ok(())
}
