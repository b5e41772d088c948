//! xray batch - count open postings at several companies.

use clap::Args;

use super::{CountOrder, SearchOptions, clean_list, run_sweep, site_scope};
use crate::app::AppContext;
use crate::error::{Result, XrayError};
use crate::history::SearchMode;
use crate::query::build_entity_job_query;
use crate::query::catalog::{JobField, PlatformGroup, Posted};
use crate::search::SweepPlan;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Companies to check (repeat or comma-separated)
    #[arg(long = "company", value_delimiter = ',', required = true)]
    pub companies: Vec<String>,

    /// Job titles (repeat or comma-separated); defaults to the field's titles
    #[arg(long = "title", value_delimiter = ',')]
    pub titles: Vec<String>,

    /// Job field preset used when no titles are given
    #[arg(long, value_enum, default_value_t = JobField::Cybersecurity)]
    pub field: JobField,

    /// Job boards to search
    #[arg(long, value_enum, default_value_t = PlatformGroup::Ats)]
    pub platform: PlatformGroup,

    /// Extra site to scope to (repeatable)
    #[arg(long = "site")]
    pub sites: Vec<String>,

    /// How recently the posting was indexed
    #[arg(long, value_enum, default_value_t = Posted::Anytime)]
    pub posted: Posted,

    /// Results fetched per company
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub per_company: u32,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl BatchArgs {
    pub fn sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = self
            .platform
            .sites()
            .into_iter()
            .map(str::to_string)
            .collect();
        sites.extend(self.sites.iter().filter(|s| !s.trim().is_empty()).map(|s| site_scope(s)));
        sites
    }

    pub fn titles(&self) -> Vec<String> {
        if self.titles.is_empty() {
            self.field.titles().iter().map(|t| (*t).to_string()).collect()
        } else {
            clean_list(&self.titles)
        }
    }

    pub fn plan(&self) -> SweepPlan {
        SweepPlan::new(clean_list(&self.companies), self.per_company)
            .with_timeframes(vec![self.posted.restrict()])
    }
}

pub fn run(ctx: &AppContext, args: &BatchArgs) -> Result<()> {
    let plan = args.plan();
    if plan.entity_names().is_empty() {
        return Err(XrayError::ValidationFailed(
            "at least one company is required".to_string(),
        ));
    }

    let sites = args.sites();
    let titles = args.titles();
    let label = format!("Batch: {}", plan.entity_names().join(", "));
    run_sweep(
        ctx,
        &plan,
        SearchMode::BatchCompany,
        &label,
        |company| build_entity_job_query(&sites, &titles, company),
        CountOrder::ByVolume,
        &args.options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::search::DateRestrict;
    use clap::Parser;

    fn parse(argv: &[&str]) -> BatchArgs {
        let mut full = vec!["xray", "batch"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Batch(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn companies_are_required() {
        assert!(Cli::try_parse_from(["xray", "batch"]).is_err());
    }

    #[test]
    fn plan_is_single_timeframe() {
        let args = parse(&["--company", "Acme, ,Globex", "--posted", "month"]);
        let plan = args.plan();
        assert_eq!(plan.entity_names(), vec!["Acme", "Globex"]);
        assert_eq!(plan.timeframes, vec![Some(DateRestrict::M1)]);
        assert_eq!(plan.page_size, 10);
    }

    #[test]
    fn per_company_query() {
        let args = parse(&[
            "--company",
            "Acme",
            "--platform",
            "lever",
            "--title",
            "SRE",
            "--site",
            "wellfound.com",
        ]);
        let query = build_entity_job_query(&args.sites(), &args.titles(), "Acme");
        assert_eq!(
            query.as_str(),
            r#"(site:jobs.lever.co OR site:wellfound.com) SRE "Acme""#
        );
    }
}
