//! Built-in site scopes, job fields, and preset OR groups.

use serde::Serialize;

use crate::search::DateRestrict;

/// Site scope that restricts people searches to LinkedIn profiles.
pub const LINKEDIN_PROFILES: &str = "site:linkedin.com/in/";

const ATS_BOARDS: &[&str] = &[
    "site:boards.greenhouse.io",
    "site:jobs.lever.co",
    "site:myworkdayjobs.com",
    "site:jobs.ashbyhq.com",
    "site:icims.com",
    "site:jobs.smartrecruiters.com",
    "site:careers.workable.com",
    "site:apply.workable.com",
    "site:recruiting.paylocity.com",
    "site:jobs.jobvite.com",
    "site:hire.jazz.co",
    "site:breezy.hr",
    "site:bamboohr.com/jobs",
    "site:recruitee.com",
    "site:applytojob.com",
];

const LINKEDIN_JOBS: &str = "site:linkedin.com/jobs";

/// Named groups of job-board site scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformGroup {
    /// Every ATS board plus LinkedIn Jobs
    #[default]
    All,
    /// LinkedIn Jobs only
    Linkedin,
    /// Every ATS board, no LinkedIn
    Ats,
    /// Big-tech career sites
    TechGiants,
    Greenhouse,
    Lever,
    Workday,
}

impl PlatformGroup {
    pub fn sites(self) -> Vec<&'static str> {
        match self {
            Self::All => {
                let mut sites = ATS_BOARDS.to_vec();
                sites.push(LINKEDIN_JOBS);
                sites
            }
            Self::Linkedin => vec![LINKEDIN_JOBS],
            Self::Ats => ATS_BOARDS.to_vec(),
            Self::TechGiants => vec![
                "site:careers.google.com",
                "site:amazon.jobs",
                "site:careers.microsoft.com",
                "site:meta.com/careers",
                "site:apple.com/careers",
            ],
            Self::Greenhouse => vec!["site:boards.greenhouse.io"],
            Self::Lever => vec!["site:jobs.lever.co"],
            Self::Workday => vec!["site:myworkdayjobs.com"],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Platforms (ATS + LinkedIn)",
            Self::Linkedin => "LinkedIn Jobs",
            Self::Ats => "All ATS (No LinkedIn)",
            Self::TechGiants => "Tech Giants",
            Self::Greenhouse => "Greenhouse Only",
            Self::Lever => "Lever Only",
            Self::Workday => "Workday Only",
        }
    }
}

/// Job field presets with their default titles and skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum JobField {
    #[default]
    Cybersecurity,
    Software,
    Data,
    Cloud,
    Product,
    ItSupport,
    /// No preset titles; pass them with --title
    Custom,
}

impl JobField {
    pub const fn titles(self) -> &'static [&'static str] {
        match self {
            Self::Cybersecurity => &[
                "Security Analyst",
                "Junior Security Analyst",
                "SOC Analyst",
                "Cybersecurity Analyst",
                "Information Security Analyst",
                "Threat Intelligence Analyst",
                "Vulnerability Analyst",
                "GRC Analyst",
                "Security Engineer",
                "Cloud Security Engineer",
                "Application Security Engineer",
                "Detection Engineer",
                "Incident Response Analyst",
                "Penetration Tester",
            ],
            Self::Software => &[
                "Software Engineer",
                "Junior Software Engineer",
                "Software Developer",
                "Backend Engineer",
                "Frontend Engineer",
                "Full Stack Engineer",
                "Mobile Developer",
                "DevOps Engineer",
                "Site Reliability Engineer",
                "Platform Engineer",
            ],
            Self::Data => &[
                "Data Analyst",
                "Junior Data Analyst",
                "Data Scientist",
                "Data Engineer",
                "Business Intelligence Analyst",
                "Analytics Engineer",
                "Machine Learning Engineer",
                "AI Engineer",
            ],
            Self::Cloud => &[
                "Cloud Engineer",
                "Cloud Architect",
                "Infrastructure Engineer",
                "Network Engineer",
                "Systems Administrator",
                "Linux Engineer",
                "Site Reliability Engineer",
                "Platform Engineer",
            ],
            Self::Product => &[
                "Product Manager",
                "Associate Product Manager",
                "Technical Product Manager",
                "UX Designer",
                "UI Designer",
                "UX Researcher",
                "Product Designer",
            ],
            Self::ItSupport => &[
                "IT Support Specialist",
                "Help Desk Analyst",
                "Desktop Support Technician",
                "IT Administrator",
                "Technical Support Engineer",
                "IT Specialist",
            ],
            Self::Custom => &[],
        }
    }

    pub const fn skills(self) -> &'static [&'static str] {
        match self {
            Self::Cybersecurity => &[
                "SIEM",
                "Splunk",
                "CrowdStrike",
                "Sentinel",
                "Threat Hunting",
                "NIST",
                "EDR",
            ],
            Self::Software => &["Python", "JavaScript", "Java", "Go", "Rust", "React", "Kubernetes"],
            Self::Data => &["Python", "SQL", "Tableau", "Power BI", "Spark", "Snowflake"],
            Self::Cloud => &["AWS", "Azure", "GCP", "Terraform", "Ansible", "Linux"],
            Self::Product => &["Figma", "User Research", "Prototyping", "A/B Testing"],
            Self::ItSupport => &["Windows", "Active Directory", "Office 365", "ServiceNow", "ITIL"],
            Self::Custom => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Manager,
}

impl ExperienceLevel {
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Entry => &["entry level", "junior", "associate", "new grad"],
            Self::Mid => &["mid level", "2-5 years", "3+ years"],
            Self::Senior => &["senior", "sr.", "5+ years"],
            Self::Lead => &["lead", "principal", "staff"],
            Self::Manager => &["manager", "director"],
        }
    }
}

/// Remote-work OR group for job searches.
pub const REMOTE_TERMS: &[&str] = &["remote", "work from home"];

/// OR group hinting that a profile is open to opportunities.
pub const OPEN_TO_WORK_TERMS: &[&str] = &["hiring", "open to", "seeking", "looking"];

/// Terms excluded from recruiter searches unless agencies are wanted.
pub const AGENCY_TERMS: &[&str] = &["agency", "staffing", "consulting"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Seniority {
    Entry,
    Mid,
    Senior,
    Manager,
    Director,
    Executive,
}

impl Seniority {
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Entry => &["junior", "entry", "associate", "new grad"],
            Self::Mid => &["mid", "3 years", "4 years", "5 years"],
            Self::Senior => &["senior", "sr", "lead"],
            Self::Manager => &["manager", "team lead"],
            Self::Director => &["director"],
            Self::Executive => &["VP", "vice president", "chief", "executive", "head"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecruiterKind {
    #[default]
    Any,
    Technical,
    University,
    PeopleOps,
    TalentLead,
}

impl RecruiterKind {
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Any => &["recruiter", "recruiting", "talent acquisition", "HR"],
            Self::Technical => &["technical recruiter", "engineering recruiter", "tech recruiting"],
            Self::University => &[
                "university recruiter",
                "campus recruiter",
                "early career",
                "new grad recruiting",
            ],
            Self::PeopleOps => &["HR", "human resources", "people operations", "people ops"],
            Self::TalentLead => &["talent acquisition", "recruiting manager", "head of recruiting"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AlumniField {
    Cybersecurity,
    Software,
    Data,
    Product,
    Finance,
    Consulting,
}

impl AlumniField {
    pub const fn term(self) -> &'static str {
        match self {
            Self::Cybersecurity => "Cybersecurity",
            Self::Software => "Software Engineering",
            Self::Data => "Data Science",
            Self::Product => "Product",
            Self::Finance => "Finance",
            Self::Consulting => "Consulting",
        }
    }
}

/// Terms added to a company research query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTerms {
    /// Each one required.
    pub all: &'static [&'static str],
    /// At least one expected.
    pub any: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchFocus {
    #[default]
    Overview,
    News,
    Funding,
    Layoffs,
    Products,
    Reviews,
}

impl ResearchFocus {
    pub const fn terms(self) -> FocusTerms {
        match self {
            Self::Overview => FocusTerms {
                all: &["company", "culture", "values", "mission", "work", "environment"],
                any: &[],
            },
            Self::News => FocusTerms {
                all: &[],
                any: &["news", "press release", "headline"],
            },
            Self::Funding => FocusTerms {
                all: &["funding", "round", "headcount", "growth", "expansion", "hiring"],
                any: &[],
            },
            Self::Layoffs => FocusTerms {
                all: &["layoffs", "downsizing", "hiring", "freeze", "restructuring"],
                any: &[],
            },
            Self::Products => FocusTerms {
                all: &["product", "roadmap", "launch", "feature", "update", "platform"],
                any: &[],
            },
            Self::Reviews => FocusTerms {
                all: &["Glassdoor", "review", "interview", "experience", "compensation"],
                any: &[],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFilter {
    #[default]
    Web,
    News,
    Reviews,
    Blogs,
}

impl SourceFilter {
    pub const fn sites(self) -> &'static [&'static str] {
        match self {
            Self::Web => &[],
            Self::News => &[
                "site:news.google.com",
                "site:techcrunch.com",
                "site:prnewswire.com",
                "site:businesswire.com",
            ],
            Self::Reviews => &["site:glassdoor.com", "site:teamblind.com"],
            Self::Blogs => &[
                "site:medium.com",
                "site:dev.to",
                "site:engineering.fb.com",
                "site:dropbox.tech",
            ],
        }
    }
}

/// Posting freshness as offered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Posted {
    #[value(name = "24h")]
    Day,
    #[value(name = "3d")]
    ThreeDays,
    #[value(name = "week")]
    Week,
    #[value(name = "month")]
    Month,
    #[value(name = "3months")]
    ThreeMonths,
    #[default]
    Anytime,
}

impl Posted {
    pub const fn restrict(self) -> Option<DateRestrict> {
        match self {
            Self::Day => Some(DateRestrict::D1),
            Self::ThreeDays => Some(DateRestrict::D3),
            Self::Week => Some(DateRestrict::W1),
            Self::Month => Some(DateRestrict::M1),
            Self::ThreeMonths => Some(DateRestrict::M3),
            Self::Anytime => None,
        }
    }
}
