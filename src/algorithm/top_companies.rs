//! Top companies by experience level for one work type.

use serde::Serialize;

use crate::algorithm::resolver::{FilterScope, ResolvedFilter};
use crate::error::Result;
use crate::filter::work_type_filter;
use crate::models::{JobTable, TextColumn};
use crate::reference::experience_color;
use crate::utils::CountTable;

/// Postings of one company at one experience level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyExperienceCount {
    pub company: String,
    pub experience_level: String,
    pub job_count: usize,
    /// Stack colour; `None` for levels outside the fixed ordering
    pub color: Option<&'static str>,
}

/// Stacked-bar view of the top companies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCompanyExperience {
    pub scope: FilterScope,
    pub work_type: Option<String>,
    pub available_work_types: Vec<String>,
    pub title: String,
    /// Companies by descending total, ties by first appearance
    pub companies: Vec<String>,
    /// Rows for those companies, by descending count
    pub rows: Vec<CompanyExperienceCount>,
    /// Upper bound for the count axis
    pub y_axis_max: usize,
}

/// Group `rows` of one work type by (company, level) and keep the top
/// companies by total postings
///
/// With no work type the result is empty. Rows without a company or level
/// are not counted.
pub fn company_experience_counts(
    rows: &JobTable,
    work_type: Option<&str>,
    top_n: usize,
) -> Result<Vec<CompanyExperienceCount>> {
    let Some(work_type) = work_type else {
        return Ok(Vec::new());
    };
    let rows = rows.filter(&work_type_filter(work_type))?;
    let companies = rows.text(TextColumn::Company);
    let levels = rows.text(TextColumn::ExperienceLevel);

    let pairs: CountTable<(&str, &str)> = companies
        .iter()
        .zip(levels.iter())
        .filter_map(|(company, level)| Some((company?, level?)))
        .collect();

    let mut totals: CountTable<&str> = CountTable::new();
    for (&(company, _), n) in pairs.iter() {
        totals.add_n(company, n);
    }
    let top: Vec<&str> = totals
        .top(top_n)
        .into_iter()
        .map(|(company, _)| company)
        .collect();

    let mut counts: Vec<CompanyExperienceCount> = pairs
        .iter()
        .filter(|((company, _), _)| top.contains(company))
        .map(|(&(company, level), job_count)| CompanyExperienceCount {
            company: company.to_string(),
            experience_level: level.to_string(),
            job_count,
            color: experience_color(level),
        })
        .collect();
    counts.sort_by(|a, b| b.job_count.cmp(&a.job_count));
    Ok(counts)
}

/// Build the stacked-bar view from a resolved filter
pub fn top_companies_by_experience(
    resolved: &ResolvedFilter,
    available_work_types: &[String],
    work_type: Option<&str>,
    skill: &str,
    state_label: &str,
    top_n: usize,
) -> Result<TopCompanyExperience> {
    let rows = company_experience_counts(&resolved.rows, work_type, top_n)?;

    let mut companies: Vec<String> = Vec::new();
    let mut totals: CountTable<&str> = CountTable::new();
    for row in &rows {
        totals.add_n(row.company.as_str(), row.job_count);
    }
    for (company, _) in totals.ranked() {
        companies.push(company.to_string());
    }

    let y_axis_max = rows.iter().map(|r| r.job_count).max().unwrap_or(0) + 10;
    Ok(TopCompanyExperience {
        scope: resolved.scope,
        work_type: work_type.map(str::to_string),
        available_work_types: available_work_types.to_vec(),
        title: resolved
            .scope
            .caption(skill, state_label, work_type.unwrap_or("")),
        companies,
        rows,
        y_axis_max,
    })
}
