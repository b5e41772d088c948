//! Pre-authored boolean searches with placeholder slots.

use serde::Serialize;

use super::Query;

/// Slot filled with a company name.
pub const COMPANY_PLACEHOLDER: &str = "[COMPANY]";
/// Slot filled with a school name.
pub const SCHOOL_PLACEHOLDER: &str = "[YOUR_SCHOOL]";

const PLACEHOLDERS: [&str; 2] = [COMPANY_PLACEHOLDER, SCHOOL_PLACEHOLDER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    Jobs,
    Linkedin,
    Research,
}

impl TemplateCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jobs => "Job Search Templates",
            Self::Linkedin => "LinkedIn X-Ray Templates",
            Self::Research => "Company Research Templates",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    pub query: &'static str,
}

impl SearchTemplate {
    /// Placeholder tokens this template contains.
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDERS
            .into_iter()
            .filter(|token| self.query.contains(token))
            .collect()
    }
}

/// Replacement values for template slots.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    pub company: Option<String>,
    pub school: Option<String>,
}

impl Placeholders {
    /// One value for every slot.
    pub fn uniform(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            company: Some(value.clone()),
            school: Some(value),
        }
    }

    fn value_for(&self, token: &str) -> Option<&str> {
        let value = match token {
            COMPANY_PLACEHOLDER => self.company.as_deref(),
            SCHOOL_PLACEHOLDER => self.school.as_deref(),
            _ => None,
        }?;
        let value = value.trim();
        (!value.is_empty()).then_some(value)
    }
}

/// A filled template.
#[derive(Debug, Clone)]
pub struct RenderedTemplate {
    pub query: Query,
    /// Slots left verbatim because no value was given.
    pub unresolved: Vec<&'static str>,
}

pub fn list_templates() -> &'static [SearchTemplate] {
    TEMPLATES
}

pub fn templates_in(category: TemplateCategory) -> impl Iterator<Item = &'static SearchTemplate> {
    TEMPLATES
        .iter()
        .filter(move |template| template.category == category)
}

pub fn find_template(id: &str) -> Option<&'static SearchTemplate> {
    TEMPLATES
        .iter()
        .find(|template| template.id == id || template.name.eq_ignore_ascii_case(id))
}

/// Substitute supplied values. Slots without a value stay in the query.
pub fn render_template(template: &SearchTemplate, values: &Placeholders) -> RenderedTemplate {
    let mut text = template.query.to_string();
    let mut unresolved = Vec::new();

    for token in template.placeholders() {
        match values.value_for(token) {
            Some(value) => text = text.replace(token, value),
            None => unresolved.push(token),
        }
    }

    RenderedTemplate {
        query: Query::raw(text),
        unresolved,
    }
}

static TEMPLATES: &[SearchTemplate] = &[
    SearchTemplate {
        id: "startup-security",
        name: "Hot Startups - Security Roles",
        category: TemplateCategory::Jobs,
        description: "Find security roles at early-stage startups",
        query: r#"(site:boards.greenhouse.io OR site:jobs.lever.co) ("Security Engineer" OR "Security Analyst") (startup OR "series A" OR "series B")"#,
    },
    SearchTemplate {
        id: "faang-new-grad",
        name: "FAANG - New Grad Roles",
        category: TemplateCategory::Jobs,
        description: "Entry-level engineering at big tech",
        query: r#"(site:careers.google.com OR site:amazon.jobs OR site:meta.com/careers) ("new grad" OR "university" OR "entry level") (software OR engineering)"#,
    },
    SearchTemplate {
        id: "remote-devops",
        name: "Remote DevOps Jobs",
        category: TemplateCategory::Jobs,
        description: "Remote infrastructure and operations roles",
        query: r#"(site:boards.greenhouse.io OR site:jobs.lever.co) ("DevOps" OR "SRE" OR "Platform Engineer") (remote OR "work from home")"#,
    },
    SearchTemplate {
        id: "internships",
        name: "Internships - Summer 2026",
        category: TemplateCategory::Jobs,
        description: "Tech internships for next summer",
        query: r#"(site:boards.greenhouse.io OR site:jobs.lever.co OR site:myworkdayjobs.com) (intern OR internship OR "summer 2026") (software OR engineering OR security)"#,
    },
    SearchTemplate {
        id: "senior-high-pay",
        name: "High-Paying Senior Roles",
        category: TemplateCategory::Jobs,
        description: "Senior positions with high compensation signals",
        query: r#"(site:boards.greenhouse.io OR site:jobs.lever.co) (senior OR lead OR principal OR staff) (200k OR 300k OR "competitive salary")"#,
    },
    SearchTemplate {
        id: "hiring-managers",
        name: "Hiring Managers at Target Company",
        category: TemplateCategory::Linkedin,
        description: "Find decision-makers at specific company (replace [COMPANY])",
        query: r#"site:linkedin.com/in/ "[COMPANY]" ("hiring manager" OR "engineering manager" OR "team lead")"#,
    },
    SearchTemplate {
        id: "alumni-network",
        name: "Alumni Network - Same School",
        category: TemplateCategory::Linkedin,
        description: "Connect with alumni in tech roles (replace [YOUR_SCHOOL])",
        query: r#"site:linkedin.com/in/ "[YOUR_SCHOOL]" ("software engineer" OR "data scientist") -intern"#,
    },
    SearchTemplate {
        id: "tech-recruiters",
        name: "Technical Recruiters",
        category: TemplateCategory::Linkedin,
        description: "Find recruiters specializing in tech roles",
        query: r#"site:linkedin.com/in/ ("technical recruiter" OR "talent acquisition") ("[COMPANY]" OR "big tech" OR FAANG)"#,
    },
    SearchTemplate {
        id: "recently-promoted",
        name: "Recently Promoted Leaders",
        category: TemplateCategory::Linkedin,
        description: "Connect with people who just got promoted",
        query: r#"site:linkedin.com/in/ ("recently promoted" OR "new role" OR "excited to announce") (director OR VP OR "head of")"#,
    },
    SearchTemplate {
        id: "open-to-work",
        name: "Job Seekers - Open to Work",
        category: TemplateCategory::Linkedin,
        description: "Find active job seekers in your field",
        query: r#"site:linkedin.com/in/ ("open to work" OR "seeking opportunities" OR "looking for") ("software engineer" OR "security analyst")"#,
    },
    SearchTemplate {
        id: "funding-signals",
        name: "Funding & Growth Signals",
        category: TemplateCategory::Research,
        description: "Track funding rounds and investor activity",
        query: r#""[COMPANY]" ("series A" OR "series B" OR "series C" OR funding OR "raised" OR "venture capital")"#,
    },
    SearchTemplate {
        id: "layoff-risk",
        name: "Layoff & Risk Indicators",
        category: TemplateCategory::Research,
        description: "Monitor company stability and risks",
        query: r#""[COMPANY]" (layoffs OR "hiring freeze" OR restructuring OR "laid off" OR downsizing)"#,
    },
    SearchTemplate {
        id: "awards",
        name: "Awards & Recognition",
        category: TemplateCategory::Research,
        description: "Find company accolades and culture indicators",
        query: r#""[COMPANY]" ("best place to work" OR award OR recognition OR "top employer" OR "Inc 5000")"#,
    },
    SearchTemplate {
        id: "tech-stack",
        name: "Tech Stack & Tools",
        category: TemplateCategory::Research,
        description: "Discover technologies company uses",
        query: r#""[COMPANY]" site:stackshare.io OR "tech stack" OR "we use" OR "built with""#,
    },
];
