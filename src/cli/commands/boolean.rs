//! xray boolean - run a hand-built boolean query.

use clap::Args;

use super::{PageArgs, SearchOptions, run_search, site_scope};
use crate::app::AppContext;
use crate::error::Result;
use crate::history::SearchMode;
use crate::query::catalog::{PlatformGroup, Posted};
use crate::query::{BooleanCriteria, build_boolean_query};

#[derive(Args, Debug)]
pub struct BooleanArgs {
    /// Site to scope to, e.g. jobs.lever.co (repeatable)
    #[arg(long = "site")]
    pub sites: Vec<String>,

    /// Add a whole job-board group to the site scope
    #[arg(long, value_enum)]
    pub platform: Option<PlatformGroup>,

    /// Comma-separated terms that must all appear
    #[arg(long)]
    pub must: Option<String>,

    /// Comma-separated terms, any of which may appear
    #[arg(long)]
    pub should: Option<String>,

    /// Comma-separated exact phrases
    #[arg(long)]
    pub exact: Option<String>,

    /// Comma-separated terms to exclude
    #[arg(long)]
    pub exclude: Option<String>,

    /// How recently the page was indexed
    #[arg(long, value_enum, default_value_t = Posted::Anytime)]
    pub posted: Posted,

    #[command(flatten)]
    pub pages: PageArgs,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl BooleanArgs {
    pub fn criteria(&self) -> BooleanCriteria {
        let mut sites: Vec<String> = self
            .platform
            .map(|group| group.sites().into_iter().map(str::to_string).collect())
            .unwrap_or_default();
        for site in self.sites.iter().filter(|s| !s.trim().is_empty()) {
            let scope = site_scope(site);
            if !sites.contains(&scope) {
                sites.push(scope);
            }
        }

        BooleanCriteria::from_lists(
            sites,
            self.must.as_deref().unwrap_or_default(),
            self.should.as_deref().unwrap_or_default(),
            self.exact.as_deref().unwrap_or_default(),
            self.exclude.as_deref().unwrap_or_default(),
        )
    }
}

pub fn run(ctx: &AppContext, args: &BooleanArgs) -> Result<()> {
    let query = build_boolean_query(&args.criteria());
    let spec = args
        .pages
        .spec(&ctx.config.search)
        .with_date_restrict(args.posted.restrict());
    run_search(ctx, query, SearchMode::Boolean, &spec, &args.options, Vec::new())
}
