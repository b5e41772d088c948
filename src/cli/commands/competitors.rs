//! xray competitors - compare hiring activity across timeframes.

use clap::Args;

use super::{CountOrder, SearchOptions, clean_list, run_sweep, site_scope};
use crate::app::AppContext;
use crate::error::{Result, XrayError};
use crate::history::SearchMode;
use crate::query::build_entity_job_query;
use crate::query::catalog::{JobField, PlatformGroup};
use crate::search::{DateRestrict, SweepPlan};

#[derive(Args, Debug)]
pub struct CompetitorsArgs {
    /// Companies to compare, at least two (repeat or comma-separated)
    #[arg(long = "company", value_delimiter = ',', required = true)]
    pub companies: Vec<String>,

    /// Role titles (repeat or comma-separated); defaults to the field's titles
    #[arg(long = "role", value_delimiter = ',')]
    pub roles: Vec<String>,

    /// Job field preset used when no roles are given
    #[arg(long, value_enum, default_value_t = JobField::Cybersecurity)]
    pub field: JobField,

    /// Job boards to search
    #[arg(long, value_enum, default_value_t = PlatformGroup::Ats)]
    pub platform: PlatformGroup,

    /// Extra site to scope to (repeatable)
    #[arg(long = "site")]
    pub sites: Vec<String>,

    /// Timeframes to compare (repeat or comma-separated)
    #[arg(
        long = "timeframe",
        value_enum,
        value_delimiter = ',',
        default_values_t = [DateRestrict::W1, DateRestrict::M1]
    )]
    pub timeframes: Vec<DateRestrict>,

    /// Results fetched per company and timeframe
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub per_company: u32,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl CompetitorsArgs {
    pub fn plan(&self) -> SweepPlan {
        let mut timeframes: Vec<Option<DateRestrict>> = Vec::new();
        for timeframe in &self.timeframes {
            if !timeframes.contains(&Some(*timeframe)) {
                timeframes.push(Some(*timeframe));
            }
        }
        SweepPlan::new(clean_list(&self.companies), self.per_company).with_timeframes(timeframes)
    }

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

    pub fn roles(&self) -> Vec<String> {
        if self.roles.is_empty() {
            self.field.titles().iter().map(|t| (*t).to_string()).collect()
        } else {
            clean_list(&self.roles)
        }
    }
}

pub fn run(ctx: &AppContext, args: &CompetitorsArgs) -> Result<()> {
    let plan = args.plan();
    let companies = plan.entity_names();
    if companies.len() < 2 {
        return Err(XrayError::ValidationFailed(
            "competitor analysis needs at least two companies".to_string(),
        ));
    }

    let sites = args.sites();
    let roles = args.roles();
    let label = format!("Competitors: {}", companies.join(" vs "));
    run_sweep(
        ctx,
        &plan,
        SearchMode::Competitors,
        &label,
        |company| build_entity_job_query(&sites, &roles, company),
        CountOrder::AsRun,
        &args.options,
    )
}
