//! End-to-end flow: load a dataset, drive the dashboard with user events and
//! read back the visible campaigns, totals and formatted figures.

use campaign_core::{CampaignError, CampaignStatus};
use campaign_reporting::format::{format_count, format_currency};
use campaign_reporting::{
    aggregate, visible, CaptureListener, Dashboard, DashboardEvent, Dataset, FilterCriteria,
};
use std::io::Write;
use std::sync::Arc;

fn ids(dashboard: &Dashboard) -> Vec<u32> {
    dashboard.visible().iter().map(|c| c.id).collect()
}

#[test]
fn test_seed_session() {
    let capture = Arc::new(CaptureListener::new());
    let mut dashboard = Dashboard::new(Dataset::seed());
    dashboard.subscribe(capture.clone());

    assert_eq!(ids(&dashboard), vec![1, 3, 5, 6]);
    let totals = dashboard.totals();
    assert_eq!(format_count(totals.clicks), "34,227");
    assert_eq!(format_count(totals.impressions), "1,121,579");
    assert_eq!(format_currency(totals.cost, "USD"), "$8,562.94");

    dashboard.apply(DashboardEvent::StatusSelected(CampaignStatus::Paused));
    dashboard.apply(DashboardEvent::QueryChanged("launch".to_string()));
    assert_eq!(ids(&dashboard), vec![4]);
    assert_eq!(format_currency(dashboard.totals().cost, "USD"), "$120.50");

    dashboard.set_status(CampaignStatus::Active);
    dashboard.set_query("zzz");
    assert!(dashboard.visible().is_empty());
    assert_eq!(dashboard.totals().clicks, 0);
    assert_eq!(
        dashboard.view().empty_message(),
        Some("No campaigns match the selected filter or search.")
    );

    assert_eq!(capture.count(), 4);
    let statuses: Vec<CampaignStatus> = capture.views().iter().map(|v| v.criteria.status).collect();
    assert_eq!(
        statuses,
        vec![
            CampaignStatus::Paused,
            CampaignStatus::Paused,
            CampaignStatus::Active,
            CampaignStatus::Active
        ]
    );
}

#[test]
fn test_dashboard_matches_pure_functions() {
    let seed = Dataset::seed();
    let mut dashboard = Dashboard::new(seed.clone());
    for status in CampaignStatus::ALL {
        for query in ["", "o", " PUSH", "q1", "web "] {
            dashboard.set_status(status);
            dashboard.set_query(query);
            let criteria = FilterCriteria::new(status, query);
            let expected = visible(seed.campaigns(), &criteria);
            let expected_ids: Vec<u32> = expected.iter().map(|c| c.id).collect();
            assert_eq!(ids(&dashboard), expected_ids);
            assert_eq!(dashboard.totals(), aggregate(expected));
        }
    }
}

#[test]
fn test_load_dataset_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "name": "Summer Launch", "status": "Active",
              "clicks": 100, "cost": 10.5, "impressions": 1000}},
            {{"id": 2, "name": "Summer Retargeting", "status": "Active",
              "clicks": 50, "cost": 4.25, "impressions": 700}},
            {{"id": 3, "name": "Autumn Teaser", "status": "Paused",
              "clicks": 7, "cost": 0.0, "impressions": 90}}
        ]"#
    )
    .unwrap();

    let dataset = Dataset::from_json_file(file.path()).unwrap();
    let criteria = FilterCriteria::new(CampaignStatus::Active, "summer");
    let dashboard = Dashboard::with_criteria(dataset, criteria);
    assert_eq!(ids(&dashboard), vec![1, 2]);
    let totals = dashboard.totals();
    assert_eq!(totals.clicks, 150);
    assert_eq!(totals.impressions, 1700);
    assert!((totals.cost - 14.75).abs() < f64::EPSILON);
}

#[test]
fn test_load_dataset_rejects_duplicates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 9, "name": "A", "status": "Active",
              "clicks": 1, "cost": 1.0, "impressions": 1}},
            {{"id": 9, "name": "B", "status": "Paused",
              "clicks": 1, "cost": 1.0, "impressions": 1}}
        ]"#
    )
    .unwrap();

    let err = Dataset::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, CampaignError::DuplicateId(9)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CampaignError::Io(_)));
}

#[test]
fn test_snapshot_serializes() {
    let dashboard = Dashboard::new(Dataset::seed());
    let json = serde_json::to_value(dashboard.snapshot()).unwrap();
    assert_eq!(json["campaign_count"], 4);
    assert_eq!(json["criteria"]["status"], "Active");
    assert_eq!(json["totals"]["clicks"], 34_227);
    assert_eq!(json["campaigns"][0]["name"], "Spring Sale 2025");
}

#[test]
fn test_dataset_with_unsummable_clicks_is_rejected_before_aggregation() {
    let json = r#"[
        {"id": 1, "name": "A", "status": "Active",
         "clicks": 18446744073709551615, "cost": 1.0, "impressions": 1},
        {"id": 2, "name": "B", "status": "Active",
         "clicks": 18446744073709551615, "cost": 1.0, "impressions": 1}
    ]"#;
    let err = Dataset::from_json_str(json).unwrap_err();
    assert!(matches!(err, CampaignError::Validation(_)));
}

#[test]
fn test_dataset_with_infinite_cost_total_is_rejected() {
    let json = r#"[
        {"id": 1, "name": "A", "status": "Paused", "clicks": 1, "cost": 1e308, "impressions": 1},
        {"id": 2, "name": "B", "status": "Paused", "clicks": 1, "cost": 1e308, "impressions": 1}
    ]"#;
    let err = Dataset::from_json_str(json).unwrap_err();
    assert!(matches!(err, CampaignError::Validation(_)));
}
