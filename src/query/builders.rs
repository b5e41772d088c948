//! One builder per query kind, all rendering through [`QueryBuilder`].

use super::catalog::{AGENCY_TERMS, LINKEDIN_PROFILES, OPEN_TO_WORK_TERMS, REMOTE_TERMS};
use super::criteria::{
    BooleanCriteria, CompanyResearchCriteria, JobCriteria, PeopleCriteria, PeopleTarget,
};
use super::{Query, QueryBuilder};

/// Job postings on the selected boards.
///
/// Order: sites, titles, skills, experience, remote, location, company,
/// exclusions.
pub fn build_job_query(criteria: &JobCriteria) -> Query {
    let mut builder = QueryBuilder::new()
        .sites(&criteria.sites)
        .titles(&criteria.titles)
        .any_of(&criteria.skills);
    if let Some(level) = criteria.experience {
        builder = builder.preset(level.terms());
    }
    if criteria.remote_only {
        builder = builder.preset(REMOTE_TERMS);
    }
    builder
        .phrase_opt(criteria.location.as_deref())
        .phrase_opt(criteria.company.as_deref())
        .exclude(&criteria.exclude)
        .build()
}

/// One company's slice of a multi-company sweep.
pub fn build_entity_job_query(sites: &[String], titles: &[String], company: &str) -> Query {
    QueryBuilder::new()
        .sites(sites)
        .titles(titles)
        .phrase(company)
        .build()
}

/// LinkedIn profile X-ray.
pub fn build_people_query(criteria: &PeopleCriteria) -> Query {
    let mut builder = QueryBuilder::new().sites([LINKEDIN_PROFILES]);

    match &criteria.target {
        PeopleTarget::Company {
            company,
            role,
            seniority,
            school,
        } => {
            builder = builder.terms(role.as_deref());
            if let Some(seniority) = seniority {
                builder = builder.preset(seniority.terms());
            }
            builder = builder.phrase(company).phrase_opt(school.as_deref());
        }
        PeopleTarget::Alumni {
            school,
            companies,
            field,
            graduation_year,
        } => {
            builder = builder
                .terms(field.map(|f| f.term()))
                .terms(graduation_year.as_deref())
                .any_of(companies)
                .phrase(school);
        }
        PeopleTarget::Recruiters {
            company,
            kind,
            focus,
            include_agency,
        } => {
            builder = builder
                .terms(focus.as_deref())
                .preset(kind.terms())
                .phrase(company);
            if !include_agency {
                builder = builder.exclude(AGENCY_TERMS);
            }
        }
        PeopleTarget::Custom {
            keywords,
            company,
            location,
            school,
        } => {
            builder = builder
                .terms(keywords.split_whitespace())
                .phrase_opt(company.as_deref())
                .phrase_opt(location.as_deref())
                .phrase_opt(school.as_deref());
        }
    }

    if criteria.open_to_work {
        builder = builder.preset(OPEN_TO_WORK_TERMS);
    }
    builder
        .phrase_opt(criteria.location.as_deref())
        .exclude(&criteria.exclude)
        .build()
}

/// News and intel about one company.
pub fn build_company_query(criteria: &CompanyResearchCriteria) -> Query {
    let focus = criteria.focus.terms();
    QueryBuilder::new()
        .sites(criteria.source.sites())
        .terms(focus.all)
        .terms(&criteria.keywords)
        .preset(focus.any)
        .phrase(&criteria.company)
        .build()
}

/// Free-form boolean search.
pub fn build_boolean_query(criteria: &BooleanCriteria) -> Query {
    QueryBuilder::new()
        .sites(&criteria.sites)
        .terms(&criteria.must_include)
        .any_of(&criteria.should_include)
        .phrases(&criteria.exact_phrases)
        .exclude(&criteria.exclude)
        .build()
}
