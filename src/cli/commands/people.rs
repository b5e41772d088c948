//! xray people - X-ray LinkedIn profiles.

use clap::{Args, Subcommand};

use super::{PageArgs, SearchOptions, clean_list, run_search};
use crate::app::AppContext;
use crate::error::Result;
use crate::history::SearchMode;
use crate::query::catalog::{AlumniField, RecruiterKind, Seniority};
use crate::query::{PeopleCriteria, PeopleTarget, build_people_query};

#[derive(Args, Debug)]
pub struct PeopleArgs {
    #[command(subcommand)]
    pub command: PeopleCommand,
}

#[derive(Subcommand, Debug)]
pub enum PeopleCommand {
    /// People working at a company
    Company(CompanyArgs),
    /// Graduates of a school
    Alumni(AlumniArgs),
    /// Recruiters at a company
    Recruiters(RecruitersArgs),
    /// Free keyword search over profiles
    Custom(CustomArgs),
}

/// Filters and flags shared by every people search.
#[derive(Args, Debug, Clone, Default)]
pub struct PeopleCommon {
    /// Location phrase
    #[arg(long)]
    pub location: Option<String>,

    /// Terms to exclude (repeat or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Prefer profiles signalling they are hiring or open to work
    #[arg(long)]
    pub open_to_work: bool,

    #[command(flatten)]
    pub pages: PageArgs,

    #[command(flatten)]
    pub options: SearchOptions,
}

#[derive(Args, Debug)]
pub struct CompanyArgs {
    /// Company name
    pub company: String,

    /// Role keyword, e.g. "engineer"
    #[arg(long)]
    pub role: Option<String>,

    #[arg(long, value_enum)]
    pub seniority: Option<Seniority>,

    /// Only people who list this school
    #[arg(long)]
    pub school: Option<String>,

    #[command(flatten)]
    pub common: PeopleCommon,
}

#[derive(Args, Debug)]
pub struct AlumniArgs {
    /// School name
    pub school: String,

    /// Companies, any of which may match (repeat or comma-separated)
    #[arg(long = "company", value_delimiter = ',')]
    pub companies: Vec<String>,

    #[arg(long, value_enum)]
    pub field: Option<AlumniField>,

    /// Graduation year
    #[arg(long)]
    pub year: Option<String>,

    #[command(flatten)]
    pub common: PeopleCommon,
}

#[derive(Args, Debug)]
pub struct RecruitersArgs {
    /// Company name
    pub company: String,

    /// Recruiter type
    #[arg(long, value_enum, default_value_t = RecruiterKind::Any)]
    pub kind: RecruiterKind,

    /// Focus area keyword, e.g. "security"
    #[arg(long)]
    pub focus: Option<String>,

    /// Keep agency and staffing recruiters
    #[arg(long)]
    pub include_agency: bool,

    #[command(flatten)]
    pub common: PeopleCommon,
}

#[derive(Args, Debug)]
pub struct CustomArgs {
    /// Keywords, each required
    pub keywords: String,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub school: Option<String>,

    #[command(flatten)]
    pub common: PeopleCommon,
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl PeopleCommand {
    pub fn common(&self) -> &PeopleCommon {
        match self {
            Self::Company(args) => &args.common,
            Self::Alumni(args) => &args.common,
            Self::Recruiters(args) => &args.common,
            Self::Custom(args) => &args.common,
        }
    }

    pub fn criteria(&self) -> PeopleCriteria {
        let common = self.common();
        let mut location = non_blank(common.location.as_ref());

        let target = match self {
            Self::Company(args) => PeopleTarget::Company {
                company: args.company.trim().to_string(),
                role: non_blank(args.role.as_ref()),
                seniority: args.seniority,
                school: non_blank(args.school.as_ref()),
            },
            Self::Alumni(args) => PeopleTarget::Alumni {
                school: args.school.trim().to_string(),
                companies: clean_list(&args.companies),
                field: args.field,
                graduation_year: non_blank(args.year.as_ref()),
            },
            Self::Recruiters(args) => PeopleTarget::Recruiters {
                company: args.company.trim().to_string(),
                kind: args.kind,
                focus: non_blank(args.focus.as_ref()),
                include_agency: args.include_agency,
            },
            // Custom searches place the location beside their own phrases.
            Self::Custom(args) => PeopleTarget::Custom {
                keywords: args.keywords.clone(),
                company: non_blank(args.company.as_ref()),
                location: location.take(),
                school: non_blank(args.school.as_ref()),
            },
        };

        PeopleCriteria {
            location,
            exclude: clean_list(&common.exclude),
            open_to_work: common.open_to_work,
            ..PeopleCriteria::new(target)
        }
    }
}

pub fn run(ctx: &AppContext, args: &PeopleArgs) -> Result<()> {
    let common = args.command.common();
    let query = build_people_query(&args.command.criteria());
    let spec = common.pages.spec(&ctx.config.search);
    run_search(ctx, query, SearchMode::People, &spec, &common.options, Vec::new())
}
