use std::fs;
use std::sync::Arc;
use arrow::array::Array;

use job_insights::algorithm::{salary_apply_distribution, sidebar_summary};
use job_insights::models::NumericColumn;
use job_insights::reference::CompanySize;
use job_insights::{Dashboard, DashboardConfig, DatasetConfig, InsightsConfig, load_dataset};

use crate::utils::scratch_file;

const POSTINGS: &str = "\
job_id;state;skill_name;min_salary;max_salary;applies;company_name;company_size;formatted_experience_level;formatted_work_type
1;CA;Python;90000;120000;3;CompanyA;3;Entry level;Full-time
2;CA;Python;95000;130000;0;CompanyA;3;Entry level;Full-time
3;CA;Python;70000;110000;12;CompanyB;1;Associate;Part-time
4;WA;Rust;;;5;CompanyC;5;Director;Full-time
";

#[test]
fn semicolon_csv_loads_through_config_file() -> job_insights::Result<()> {
    let config_path = scratch_file("config.json");
    fs::write(
        &config_path,
        r#"{"dataset": {"delimiter": 59, "batch_size": 2}, "dashboard": {"top_companies": 1}}"#,
    )
    .map_err(|e| job_insights::InsightsError::io(&config_path, e))?;
    let data_path = scratch_file("postings.csv");
    fs::write(&data_path, POSTINGS).map_err(|e| job_insights::InsightsError::io(&data_path, e))?;

    let config = InsightsConfig::from_json_file(&config_path)?;
    assert_eq!(config.dataset.delimiter, b';');
    assert_eq!(config.dashboard.top_companies, 1);
    assert_eq!(config.dashboard.default_state, "CA");

    let table = load_dataset(&data_path, &config.dataset)?;
    fs::remove_file(&config_path).ok();
    fs::remove_file(&data_path).ok();
    assert_eq!(table.num_rows(), 4);

    let dashboard = Dashboard::new(Arc::new(table), config.dashboard)?;
    let snapshot = dashboard.snapshot()?;
    assert_eq!(snapshot.summary.top_companies.len(), 1);
    assert_eq!(snapshot.summary.top_companies[0].company, "CompanyA");
    assert_eq!(snapshot.summary.min_salary, Some(70_000.0));
    assert_eq!(snapshot.summary.max_salary, Some(130_000.0));
    assert_eq!(snapshot.top_companies.companies, vec!["CompanyA"]);
    Ok(())
}

#[test]
fn missing_dataset_reports_path() {
    let path = scratch_file("does_not_exist.csv");
    let err = load_dataset(&path, &DatasetConfig::default()).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn rows_without_salary_still_count_as_postings() -> job_insights::Result<()> {
    let data_path = scratch_file("rust_only.csv");
    fs::write(&data_path, POSTINGS.replace(';', ","))
        .map_err(|e| job_insights::InsightsError::io(&data_path, e))?;
    let table = load_dataset(&data_path, &DatasetConfig::default())?;
    fs::remove_file(&data_path).ok();

    let mut dashboard = Dashboard::new(Arc::new(table), DashboardConfig::default())?;
    let snapshot = dashboard.select_skill("Rust")?;
    assert_eq!(snapshot.geographic.total(), 1);
    assert!(snapshot.salary.observations.is_empty());
    Ok(())
}

#[test]
fn nan_cells_in_csv_load_as_missing() -> job_insights::Result<()> {
    let data_path = scratch_file("nan_postings.csv");
    let csv = "\
job_id,state,skill_name,min_salary,max_salary,applies,company_name,company_size,formatted_experience_level,formatted_work_type
1,CA,Python,NaN,NaN,3,CompanyA,7,Entry level,Full-time
2,CA,Python,50000,60000,NaN,CompanyB,1,Associate,Full-time
3,CA,Python,70000,80000,4,CompanyC,2,Director,Full-time
4,CA,Python,90000,inf,0,CompanyA,3,Entry level,Full-time
";
    fs::write(&data_path, csv).map_err(|e| job_insights::InsightsError::io(&data_path, e))?;
    let table = load_dataset(&data_path, &DatasetConfig::default())?;
    fs::remove_file(&data_path).ok();

    assert_eq!(table.numeric(NumericColumn::MinSalary).null_count(), 1);
    assert_eq!(table.numeric(NumericColumn::MaxSalary).null_count(), 2);
    assert_eq!(table.numeric(NumericColumn::Applies).null_count(), 1);

    let view = salary_apply_distribution(&table, "Python", 3)?;
    assert_eq!(view.observations.len(), 3);
    assert!(
        view.observations
            .iter()
            .all(|o| o.salary.is_finite() && o.applies.is_finite())
    );
    assert!(!view.company_sizes.contains(&CompanySize::Giant));

    let summary = sidebar_summary(&table, "Python", "CA", 3)?;
    assert_eq!(summary.min_salary, Some(50_000.0));
    assert_eq!(summary.max_salary, Some(80_000.0));
    assert_eq!(summary.avg_salary, Some(65_000.0));
    Ok(())
}
