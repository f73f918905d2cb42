//! Sidebar salary and posting summary.

use serde::Serialize;

use crate::algorithm::resolver::FilterScope;
use crate::error::Result;
use crate::filter::{skill_and_state_filter, skill_filter};
use crate::models::{JobTable, NumericColumn, TextColumn};
use crate::utils::CountTable;

/// Postings of one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub company: String,
    pub job_count: usize,
}

/// Salary and posting statistics for the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarSummary {
    /// `Both` for the skill-and-state subset, `SkillOnly` after falling back
    pub scope: FilterScope,
    pub salary_heading: String,
    pub postings_heading: String,
    pub companies_heading: String,
    pub min_salary: Option<f64>,
    pub avg_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub job_count: usize,
    pub top_companies: Vec<CompanyCount>,
}

/// Summarize the skill-and-state subset, or the skill alone when the
/// intersection has no rows
pub fn sidebar_summary(
    table: &JobTable,
    skill: &str,
    state: &str,
    top_n: usize,
) -> Result<SidebarSummary> {
    let both = table.filter(&skill_and_state_filter(skill, state))?;
    let (rows, scope) = if both.is_empty() {
        log::debug!("No postings for '{skill}' in {state}; summarising the skill alone");
        (table.filter(&skill_filter(skill))?, FilterScope::SkillOnly)
    } else {
        (both, FilterScope::Both)
    };

    let min = rows.numeric(NumericColumn::MinSalary);
    let max = rows.numeric(NumericColumn::MaxSalary);
    let min_salary = min.iter().flatten().reduce(f64::min);
    let max_salary = max.iter().flatten().reduce(f64::max);

    let midpoints: Vec<f64> = min
        .iter()
        .zip(max.iter())
        .filter_map(|(lo, hi)| Some((lo? + hi?) / 2.0))
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let avg_salary =
        (!midpoints.is_empty()).then(|| midpoints.iter().sum::<f64>() / midpoints.len() as f64);

    let companies: CountTable<&str> = rows.text(TextColumn::Company).iter().flatten().collect();
    let top_companies = companies
        .top(top_n)
        .into_iter()
        .map(|(company, job_count)| CompanyCount {
            company: company.to_string(),
            job_count,
        })
        .collect();

    let (salary_heading, postings_heading, companies_heading) = if scope.uses_state() {
        (
            format!("Salary Statistics for {skill} in {state}"),
            format!("Number of Job Postings for {skill} in {state}"),
            format!("Top Companies in {state} for {skill}"),
        )
    } else {
        (
            format!("Salary Statistics for {skill}"),
            format!("Number of Job Postings in {skill}"),
            format!("Top Companies in {skill}"),
        )
    };

    Ok(SidebarSummary {
        scope,
        salary_heading,
        postings_heading,
        companies_heading,
        min_salary,
        avg_salary,
        max_salary,
        job_count: rows.num_rows(),
        top_companies,
    })
}
