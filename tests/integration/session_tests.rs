//! Search sessions end to end over a file-backed data directory.

use httpmock::prelude::*;
use xray::XrayError;
use xray::history::SearchMode;
use xray::query::catalog::PlatformGroup;
use xray::query::{JobCriteria, Query, build_entity_job_query, build_job_query};
use xray::quota::DAILY_LIMIT;
use xray::search::{DateRestrict, PageSpec, ResultItem, StopReason, SweepPlan, TAG_ENTITY};
use xray::test_utils::ScriptedProvider;

use super::fixture::{TestFixture, google, items, response_body};

#[test]
fn test_job_search_over_http_is_persisted() {
    let server = MockServer::start();
    let mut hits = items("lever", 3);
    // Same posting with a tracking parameter.
    hits.push(ResultItem::new("other title", "https://example.com/lever/0?utm=feed"));
    let mock = server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1").query_param("start", "1");
        then.status(200).json_body(response_body(&hits));
    });

    let fixture = TestFixture::new("test_job_search_over_http_is_persisted");
    let provider = google(&server);
    let session = fixture.session(&provider);

    let criteria = JobCriteria {
        titles: vec!["Security Engineer".to_string()],
        ..JobCriteria::for_platform(PlatformGroup::Lever)
    };
    let report = session
        .run(build_job_query(&criteria), SearchMode::Jobs, &PageSpec::new(10, 1))
        .unwrap();

    mock.assert();
    assert_eq!(report.raw_count, 4);
    assert_eq!(report.items.len(), 3);
    assert_eq!(report.stop, StopReason::PageLimit);

    // Everything lands in the data directory as JSON documents.
    let quota = fixture.data.read_document("quota_usage").unwrap();
    assert!(quota.contains("\"count\": 1"));
    let history = fixture.history().list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].query, report.query.as_str());
    assert_eq!(history[0].timestamp, "2026-03-12 12:00");
}

#[test]
fn test_quota_carries_across_sessions_and_resets_next_day() {
    let fixture = TestFixture::new("test_quota_carries_across_sessions_and_resets_next_day");
    for _ in 0..3 {
        let provider = ScriptedProvider::new(vec![Ok(items("a", 1))]);
        fixture
            .session(&provider)
            .run(Query::raw("q"), SearchMode::Boolean, &PageSpec::new(10, 1))
            .unwrap();
    }
    assert_eq!(fixture.ledger().status().used, 3);

    let tomorrow = TestFixture {
        data: fixture.data,
        store: fixture.store,
        clock: fixture.clock,
    }
    .on_day(13);
    let status = tomorrow.ledger().status();
    assert_eq!(status.used, 0);
    assert_eq!(status.remaining, DAILY_LIMIT);
}

#[test]
fn test_quota_stops_mid_pagination() {
    let fixture = TestFixture::new("test_quota_stops_mid_pagination");
    let stamp = fixture.clock.0.date();
    fixture.data.write_document(
        "quota_usage",
        &format!(r#"{{"date":"{stamp}","count":{}}}"#, DAILY_LIMIT - 2),
    );

    let provider = ScriptedProvider::new(vec![Ok(items("a", 10)), Ok(items("b", 10)), Ok(items("c", 10))]);
    let report = fixture
        .session(&provider)
        .run(Query::raw("q"), SearchMode::Jobs, &PageSpec::new(10, 3))
        .unwrap();

    assert_eq!(provider.requests().len(), 2);
    assert_eq!(report.items.len(), 20);
    assert_eq!(report.stop, StopReason::QuotaExhausted);
    assert!(report.message.unwrap().contains("Daily quota exceeded"));
    assert!(report.quota.is_exhausted());
}

#[test]
fn test_empty_query_makes_no_calls() {
    let fixture = TestFixture::new("test_empty_query_makes_no_calls");
    let provider = ScriptedProvider::new(Vec::new());
    let result = fixture
        .session(&provider)
        .run(Query::raw(""), SearchMode::Boolean, &PageSpec::new(10, 1));

    assert!(matches!(result, Err(XrayError::QueryInvalid(_))));
    assert!(provider.requests().is_empty());
    assert_eq!(fixture.ledger().status().used, 0);
}

#[test]
fn test_competitor_sweep_over_http() {
    let server = MockServer::start();
    let sites = vec!["site:jobs.lever.co".to_string()];
    let titles = vec!["SRE".to_string()];
    let acme_query = build_entity_job_query(&sites, &titles, "Acme");
    let globex_query = build_entity_job_query(&sites, &titles, "Globex");

    let acme_week = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("q", acme_query.as_str())
            .query_param("dateRestrict", "w1");
        then.status(200).json_body(response_body(&items("acme-w", 2)));
    });
    let globex_week = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("q", globex_query.as_str())
            .query_param("dateRestrict", "w1");
        then.status(200).json_body(response_body(&items("globex-w", 5)));
    });
    let acme_month = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("q", acme_query.as_str())
            .query_param("dateRestrict", "m1");
        then.status(200).json_body(response_body(&items("acme-m", 4)));
    });
    let globex_month = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("q", globex_query.as_str())
            .query_param("dateRestrict", "m1");
        then.status(200).json_body(response_body(&items("globex-m", 6)));
    });

    let fixture = TestFixture::new("test_competitor_sweep_over_http");
    let provider = google(&server);
    let session = fixture.session(&provider);
    let plan = SweepPlan::new(vec!["Acme".into(), "Globex".into()], 10)
        .with_timeframes(vec![Some(DateRestrict::W1), Some(DateRestrict::M1)]);

    let outcome = session.sweep(&plan, SearchMode::Competitors, "Competitors: Acme vs Globex", |company| {
        build_entity_job_query(&sites, &titles, company)
    });

    acme_week.assert();
    globex_week.assert();
    acme_month.assert();
    globex_month.assert();

    let counts: Vec<(String, usize)> = outcome
        .report
        .counts
        .iter()
        .map(|cell| (cell.entity.clone(), cell.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Acme".to_string(), 2),
            ("Globex".to_string(), 5),
            ("Acme".to_string(), 4),
            ("Globex".to_string(), 6),
        ]
    );

    let summary = outcome.report.summary();
    assert_eq!(summary.most_active.as_deref(), Some("Globex"));
    assert_eq!(summary.most_active_count, 11);
    assert_eq!(summary.total, 17);
    assert!((summary.average - 4.25).abs() < f64::EPSILON);

    assert_eq!(outcome.report.items[0].tag(TAG_ENTITY), Some("Acme"));
    assert_eq!(outcome.quota.used, 4);

    let history = fixture.history().list();
    assert_eq!(history[0].query, "Competitors: Acme vs Globex");
    assert_eq!(history[0].mode, "Competitor Analysis");
}

#[test]
fn test_save_then_reload_from_disk() {
    let fixture = TestFixture::new("test_save_then_reload_from_disk");
    let provider = ScriptedProvider::new(vec![Ok(items("x", 3))]);
    let session = fixture.session(&provider);
    let report = session
        .run(Query::raw("q"), SearchMode::People, &PageSpec::new(10, 1))
        .unwrap();
    session.save("people run", report.mode, &report.items).unwrap();

    // A fresh store over the same directory sees the saved set.
    let reopened = fixture.data.store();
    let saved = xray::history::SavedSearchStore::new(&reopened, &fixture.clock).list();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].kind, "People");
    assert_eq!(saved[0].results, report.items);
}
