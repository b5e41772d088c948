//! Snapshot tests for rendered queries and CSV exports.

use insta::assert_snapshot;

use xray::export::{CsvRow, count_rows, job_rows, person_rows, write_csv};
use xray::query::templates::{Placeholders, find_template, render_template};
use xray::search::{DateRestrict, EntityCount, ResultItem, StopReason};

fn csv_of<R: CsvRow>(rows: &[R]) -> String {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn snapshot_job_rows_csv() {
    let items = vec![
        ResultItem::new(
            "Security Engineer",
            "https://boards.greenhouse.io/acme-corp/jobs/123",
        ),
        ResultItem::new("Platform Engineer, Remote", "https://jobs.lever.co/globex/abc"),
        ResultItem::new(
            "Staff Engineer at Initech - Austin | LinkedIn",
            "https://www.linkedin.com/jobs/view/9",
        ),
    ];

    assert_snapshot!(csv_of(&job_rows(&items)), @r#"
Title,Company,Source,Link
Security Engineer,Acme Corp,Greenhouse,https://boards.greenhouse.io/acme-corp/jobs/123
"Platform Engineer, Remote",Globex,Lever,https://jobs.lever.co/globex/abc
Staff Engineer at Initech - Austin | LinkedIn,Initech,LinkedIn,https://www.linkedin.com/jobs/view/9
"#);
}

#[test]
fn snapshot_person_rows_csv() {
    let items = vec![ResultItem::new(
        "Jane Doe - Security Engineer - Acme | LinkedIn",
        "https://www.linkedin.com/in/janedoe",
    )];

    assert_snapshot!(csv_of(&person_rows(&items)), @r#"
Name,Headline,Profile
Jane Doe,Security Engineer - Acme,https://www.linkedin.com/in/janedoe
"#);
}

#[test]
fn snapshot_count_rows_csv() {
    let counts = vec![
        EntityCount {
            entity: "Acme".to_string(),
            timeframe: Some(DateRestrict::W1),
            count: 7,
            stop: StopReason::PageLimit,
        },
        EntityCount {
            entity: "Globex".to_string(),
            timeframe: None,
            count: 0,
            stop: StopReason::EmptyPage,
        },
    ];

    assert_snapshot!(csv_of(&count_rows(&counts)), @r#"
Company,Time Period,Job Postings
Acme,Past Week,7
Globex,Anytime,0
"#);
}

#[test]
fn snapshot_filled_template() {
    let template = find_template("hiring-managers").unwrap();
    let rendered = render_template(template, &Placeholders::uniform("Stripe".to_string()));

    assert!(rendered.unresolved.is_empty());
    assert_snapshot!(rendered.query.as_str(), @r#"site:linkedin.com/in/ "Stripe" ("hiring manager" OR "engineering manager" OR "team lead")"#);
}
