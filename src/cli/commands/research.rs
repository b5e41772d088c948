//! xray research - news and intel about one company.

use clap::Args;

use super::{SearchOptions, clean_list, run_search};
use crate::app::AppContext;
use crate::error::Result;
use crate::history::SearchMode;
use crate::query::catalog::{Posted, ResearchFocus, SourceFilter};
use crate::query::{CompanyResearchCriteria, build_company_query};
use crate::search::PageSpec;

#[derive(Args, Debug)]
pub struct ResearchArgs {
    /// Company name
    pub company: String,

    /// What to look for
    #[arg(long, value_enum, default_value_t = ResearchFocus::Overview)]
    pub focus: ResearchFocus,

    /// Kind of site to search
    #[arg(long, value_enum, default_value_t = SourceFilter::Web)]
    pub source: SourceFilter,

    /// Extra keywords, each required (repeat or comma-separated)
    #[arg(long = "keyword", value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// How recently the page was indexed
    #[arg(long, value_enum, default_value_t = Posted::Anytime)]
    pub posted: Posted,

    /// Number of results
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub limit: u32,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl ResearchArgs {
    pub fn criteria(&self) -> CompanyResearchCriteria {
        CompanyResearchCriteria {
            company: self.company.trim().to_string(),
            focus: self.focus,
            source: self.source,
            keywords: clean_list(&self.keywords),
        }
    }
}

pub fn run(ctx: &AppContext, args: &ResearchArgs) -> Result<()> {
    let query = build_company_query(&args.criteria());
    let spec = PageSpec::new(args.limit, 1).with_date_restrict(args.posted.restrict());
    run_search(
        ctx,
        query,
        SearchMode::CompanyResearch,
        &spec,
        &args.options,
        Vec::new(),
    )
}
