//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// X-ray job and people search over the Google Custom Search API
#[derive(Parser, Debug)]
#[command(name = "xray")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for scripts (same as --output-format=json).
    #[arg(long, short = 'm', global = true, alias = "machine")]
    pub robot: bool,

    /// Output format (human, json)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/xray/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format.
    ///
    /// An explicit `--output-format` wins; otherwise `--robot` selects JSON.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_args(self.robot, self.output_format)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search job boards for postings
    Jobs(commands::jobs::JobsArgs),

    /// X-ray LinkedIn profiles
    People(commands::people::PeopleArgs),

    /// Search for news and intel about a company
    Research(commands::research::ResearchArgs),

    /// Run a hand-built boolean query
    Boolean(commands::boolean::BooleanArgs),

    /// Browse and run pre-built search templates
    Template(commands::template::TemplateArgs),

    /// Count open postings at several companies
    Batch(commands::batch::BatchArgs),

    /// Compare hiring activity of competitors over time
    Competitors(commands::competitors::CompetitorsArgs),

    /// Show or clear recent searches
    History(commands::history::HistoryArgs),

    /// Manage saved result sets
    Saved(commands::saved::SavedArgs),

    /// Show today's API quota usage
    Quota(commands::quota::QuotaArgs),
}
