//! xray jobs - search job boards for postings.

use clap::Args;

use super::{PageArgs, SearchOptions, clean_list, run_search};
use crate::app::AppContext;
use crate::error::Result;
use crate::history::SearchMode;
use crate::query::JobCriteria;
use crate::query::build_job_query;
use crate::query::catalog::{ExperienceLevel, JobField, PlatformGroup, Posted};

#[derive(Args, Debug)]
pub struct JobsArgs {
    /// Job field preset supplying default titles
    #[arg(long, value_enum, default_value_t = JobField::Cybersecurity)]
    pub field: JobField,

    /// Job titles (repeat or comma-separated); replaces the field's titles
    #[arg(long = "title", value_delimiter = ',')]
    pub titles: Vec<String>,

    /// Job boards to search
    #[arg(long, value_enum, default_value_t = PlatformGroup::All)]
    pub platform: PlatformGroup,

    /// Skills, any of which may match (repeat or comma-separated)
    #[arg(long = "skill", value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Add the field's preset skills to the skill group
    #[arg(long)]
    pub field_skills: bool,

    /// Location phrase, e.g. "New York"
    #[arg(long)]
    pub location: Option<String>,

    /// Company phrase
    #[arg(long)]
    pub company: Option<String>,

    /// Experience level
    #[arg(long, value_enum)]
    pub experience: Option<ExperienceLevel>,

    /// Only remote roles
    #[arg(long)]
    pub remote: bool,

    /// Terms to exclude (repeat or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// How recently the posting was indexed
    #[arg(long, value_enum, default_value_t = Posted::Anytime)]
    pub posted: Posted,

    #[command(flatten)]
    pub pages: PageArgs,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl JobsArgs {
    pub fn criteria(&self) -> JobCriteria {
        let titles = if self.titles.is_empty() {
            self.field.titles().iter().map(|t| (*t).to_string()).collect()
        } else {
            clean_list(&self.titles)
        };

        let mut skills = clean_list(&self.skills);
        if self.field_skills {
            for skill in self.field.skills() {
                if !skills.iter().any(|s| s == skill) {
                    skills.push((*skill).to_string());
                }
            }
        }

        JobCriteria {
            titles,
            skills,
            location: self.location.clone(),
            company: self.company.clone(),
            experience: self.experience,
            remote_only: self.remote,
            exclude: clean_list(&self.exclude),
            ..JobCriteria::for_platform(self.platform)
        }
    }
}

pub fn run(ctx: &AppContext, args: &JobsArgs) -> Result<()> {
    let query = build_job_query(&args.criteria());
    let spec = args
        .pages
        .spec(&ctx.config.search)
        .with_date_restrict(args.posted.restrict());
    run_search(ctx, query, SearchMode::Jobs, &spec, &args.options, Vec::new())
}
