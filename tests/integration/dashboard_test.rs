use std::sync::Arc;

use job_insights::{Dashboard, DashboardConfig, FilterScope, InsightsError};

use crate::utils::{python_ca_table, random_postings, rust_elsewhere_table, table};

#[test]
fn snapshot_carries_titles_for_every_view() -> job_insights::Result<()> {
    let dashboard = Dashboard::new(Arc::new(python_ca_table()), DashboardConfig::default())?;
    let snapshot = dashboard.snapshot()?;

    assert_eq!(snapshot.selection.skill, "Python");
    assert_eq!(snapshot.state_name, "California");
    assert_eq!(
        snapshot.geographic.title,
        "Skill Distribution in Job Postings for Python across the USA"
    );
    assert_eq!(
        snapshot.skill_flow.title,
        "Skill Distribution in Job Postings for Python in California"
    );
    assert_eq!(
        snapshot.top_companies.title,
        "Top Companies for Python in California: Distribution by Experience Level of Full-time"
    );
    assert_eq!(
        snapshot.salary.title,
        "Salary Distribution by top 3 Company Size for Python"
    );
    assert_eq!(snapshot.summary.scope, FilterScope::Both);
    assert_eq!(snapshot.summary.job_count, 3);
    Ok(())
}

#[test]
fn moving_to_wyoming_drops_state_from_caption() -> job_insights::Result<()> {
    let mut dashboard =
        Dashboard::new(Arc::new(rust_elsewhere_table()), DashboardConfig::default())?;
    let snapshot = dashboard.select_state("WY")?;

    assert_eq!(snapshot.top_companies.scope, FilterScope::SkillOnly);
    assert_eq!(
        snapshot.top_companies.title,
        "Top Companies for Rust: Distribution by Experience Level of Full-time"
    );
    assert_eq!(snapshot.summary.scope, FilterScope::SkillOnly);
    Ok(())
}

#[test]
fn work_type_cursor_always_valid_after_changes() -> job_insights::Result<()> {
    let table = Arc::new(table(&random_postings(42, 200)));
    let mut dashboard = Dashboard::new(Arc::clone(&table), DashboardConfig::default())?;

    for state in ["CA", "NY", "WY", "DC", "TX"] {
        for skill in table.skills() {
            dashboard.select_state(state)?;
            let snapshot = dashboard.select_skill(&skill)?;
            let available = &snapshot.top_companies.available_work_types;
            match &snapshot.selection.work_type {
                Some(work_type) => assert!(available.contains(work_type)),
                None => assert!(available.is_empty()),
            }
        }
    }
    Ok(())
}

#[test]
fn snapshot_serializes_to_json() -> job_insights::Result<()> {
    let dashboard = Dashboard::new(Arc::new(python_ca_table()), DashboardConfig::default())?;
    let snapshot = dashboard.snapshot()?;
    let json = serde_json::to_value(&snapshot).map_err(|e| InsightsError::Config(e.to_string()))?;

    assert_eq!(json["selection"]["state"], "CA");
    assert_eq!(json["top_companies"]["scope"], "both");
    assert!(json["generated_at"].is_string());
    Ok(())
}

#[test]
fn configured_default_state_must_exist() {
    let config = DashboardConfig::builder().default_state("XX").build();
    let result = Dashboard::new(Arc::new(python_ca_table()), config);
    assert!(matches!(
        result,
        Err(InsightsError::InvalidSelection { kind: "state", .. })
    ));
}
