//! Salary distribution by company size and applies category.
//!
//! Each posting row contributes two salary observations, its lower and upper
//! bound. Observations are restricted to the company-size buckets with the
//! highest observed salaries and split by how many applications the posting
//! drew relative to the upper quartile of applies.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::filter::skill_filter;
use crate::models::{JobTable, NumericColumn};
use crate::reference::CompanySize;
use crate::utils::Quartiles;

/// Salary headroom added above the largest observation on the chart axis
pub const SALARY_AXIS_PADDING: f64 = 20_000.0;

/// How many applications a posting drew
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AppliesCategory {
    #[serde(rename = "No Applications")]
    NoApplications,
    #[serde(rename = "Average Applications")]
    Average,
    #[serde(rename = "Above Average Applications")]
    AboveAverage,
}

impl AppliesCategory {
    /// Categories in legend order
    pub const ALL: [Self; 3] = [Self::NoApplications, Self::Average, Self::AboveAverage];

    /// Classify an applies count against the upper quartile
    #[must_use]
    pub fn classify(applies: f64, q3: f64) -> Self {
        if applies == 0.0 {
            Self::NoApplications
        } else if applies <= q3 {
            Self::Average
        } else {
            Self::AboveAverage
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoApplications => "No Applications",
            Self::Average => "Average Applications",
            Self::AboveAverage => "Above Average Applications",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::NoApplications => "#9ecae1",
            Self::Average => "#4292c6",
            Self::AboveAverage => "#08306b",
        }
    }
}

impl fmt::Display for AppliesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One salary bound of one posting row, before coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplodedSalary {
    pub salary: Option<f64>,
    pub applies: Option<f64>,
    pub company_size: Option<CompanySize>,
}

/// A salary observation that survived coercion and the size restriction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryObservation {
    pub company_size: CompanySize,
    pub applies_category: AppliesCategory,
    pub salary: f64,
    pub applies: f64,
}

/// Box statistics for one (company size, applies category) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBox {
    pub company_size: CompanySize,
    pub applies_category: AppliesCategory,
    pub color: &'static str,
    pub salary: Quartiles,
}

/// Box-plot view of salaries for a skill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryApplyDistribution {
    pub skill: String,
    pub title: String,
    /// Retained buckets in ordinal order
    pub company_sizes: Vec<CompanySize>,
    /// Applies statistics over the retained observations
    pub applies: Option<Quartiles>,
    pub observations: Vec<SalaryObservation>,
    /// Boxes by bucket, then category in legend order; empty pairs omitted
    pub boxes: Vec<SalaryBox>,
    /// Largest salary plus [`SALARY_AXIS_PADDING`]
    pub salary_axis_max: Option<f64>,
}

/// Split every row into its lower and upper salary observation
///
/// Always yields exactly twice as many entries as `rows` has rows, lower
/// bound first for each row.
#[must_use]
pub fn explode_salaries(rows: &JobTable) -> Vec<ExplodedSalary> {
    let min_salary = rows.numeric(NumericColumn::MinSalary);
    let max_salary = rows.numeric(NumericColumn::MaxSalary);
    let applies = rows.numeric(NumericColumn::Applies);
    let sizes = rows.numeric(NumericColumn::CompanySize);

    let mut exploded = Vec::with_capacity(rows.num_rows() * 2);
    for (((min, max), applies), size) in min_salary
        .iter()
        .zip(max_salary.iter())
        .zip(applies.iter())
        .zip(sizes.iter())
    {
        let company_size = size.and_then(CompanySize::from_value);
        for salary in [min, max] {
            exploded.push(ExplodedSalary {
                salary,
                applies,
                company_size,
            });
        }
    }
    exploded
}

/// Buckets with the highest maximum salary, returned in ordinal order
///
/// Equal maxima rank in ordinal order.
#[must_use]
pub fn top_company_sizes(observations: &[(CompanySize, f64)], n: usize) -> Vec<CompanySize> {
    let mut maxima: Vec<(CompanySize, f64)> = CompanySize::ALL
        .iter()
        .filter_map(|&size| {
            observations
                .iter()
                .filter(|(s, _)| *s == size)
                .map(|(_, salary)| *salary)
                .reduce(f64::max)
                .map(|max| (size, max))
        })
        .collect();
    maxima.sort_by(|a, b| b.1.total_cmp(&a.1));
    maxima.truncate(n);

    let mut sizes: Vec<CompanySize> = maxima.into_iter().map(|(size, _)| size).collect();
    sizes.sort();
    sizes
}

/// Build the salary distribution for a skill
pub fn salary_apply_distribution(
    table: &JobTable,
    skill: &str,
    top_sizes: usize,
) -> Result<SalaryApplyDistribution> {
    let rows = table.filter(&skill_filter(skill))?;
    let exploded = explode_salaries(&rows);

    // Coerce: both numbers present. Sizes are optional until the restriction.
    let coerced: Vec<(Option<CompanySize>, f64, f64)> = exploded
        .iter()
        .filter_map(|e| Some((e.company_size, e.salary?, e.applies?)))
        .collect();
    log::debug!(
        "Salary distribution for '{skill}': {} observations, {} after coercion",
        exploded.len(),
        coerced.len()
    );

    let sized: Vec<(CompanySize, f64)> = coerced
        .iter()
        .filter_map(|(size, salary, _)| Some(((*size)?, *salary)))
        .collect();
    let company_sizes = top_company_sizes(&sized, top_sizes);

    let retained: Vec<(CompanySize, f64, f64)> = coerced
        .into_iter()
        .filter_map(|(size, salary, applies)| {
            let size = size.filter(|s| company_sizes.contains(s))?;
            Some((size, salary, applies))
        })
        .collect();

    let applies = Quartiles::from_values(retained.iter().map(|(_, _, a)| *a));
    let q3 = applies.map_or(0.0, |q| q.q3);
    let observations: Vec<SalaryObservation> = retained
        .into_iter()
        .map(|(company_size, salary, applies)| SalaryObservation {
            company_size,
            applies_category: AppliesCategory::classify(applies, q3),
            salary,
            applies,
        })
        .collect();

    let mut boxes = Vec::new();
    for &company_size in &company_sizes {
        for applies_category in AppliesCategory::ALL {
            let salaries = observations
                .iter()
                .filter(|o| o.company_size == company_size && o.applies_category == applies_category)
                .map(|o| o.salary);
            if let Some(salary) = Quartiles::from_values(salaries) {
                boxes.push(SalaryBox {
                    company_size,
                    applies_category,
                    color: applies_category.color(),
                    salary,
                });
            }
        }
    }

    let salary_axis_max = observations
        .iter()
        .map(|o| o.salary)
        .reduce(f64::max)
        .map(|max| max + SALARY_AXIS_PADDING);

    Ok(SalaryApplyDistribution {
        skill: skill.to_string(),
        title: format!("Salary Distribution by top 3 Company Size for {skill}"),
        company_sizes,
        applies,
        observations,
        boxes,
        salary_axis_max,
    })
}
