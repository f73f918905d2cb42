//! Per-state posting counts for one skill, with choropleth bins.

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::Result;
use crate::filter::{Expr, skill_filter, states_in_filter};
use crate::models::{JobTable, TextColumn};
use crate::reference::{bin_color, state_codes, state_name};
use crate::utils::CountTable;

/// Postings for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateJobCount {
    pub state: String,
    pub state_name: &'static str,
    pub job_count: usize,
    /// Index into [`StateJobCounts::bins`]
    pub bin: usize,
}

/// One equal-width range of job counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountBin {
    pub lower: f64,
    pub upper: f64,
    pub label: String,
    pub color: &'static str,
}

/// Geographic view for a skill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateJobCounts {
    pub skill: String,
    pub title: String,
    /// States with at least one posting, ordered by state code
    pub states: Vec<StateJobCount>,
    pub bins: Vec<CountBin>,
}

impl StateJobCounts {
    /// Total postings across all states
    #[must_use]
    pub fn total(&self) -> usize {
        self.states.iter().map(|s| s.job_count).sum()
    }
}

/// Count postings per reference state for a skill and bin the counts
///
/// States outside the 51-entry reference set are dropped, not shown as zero.
pub fn state_job_counts(table: &JobTable, skill: &str, bin_count: usize) -> Result<StateJobCounts> {
    let rows = table.filter(&Expr::all(vec![
        skill_filter(skill),
        states_in_filter(state_codes()),
    ]))?;

    let counts: CountTable<&str> = rows.text(TextColumn::State).iter().flatten().collect();

    let (min, max) = counts
        .iter()
        .map(|(_, n)| n)
        .fold(None, |acc: Option<(usize, usize)>, n| match acc {
            None => Some((n, n)),
            Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
        })
        .unwrap_or((0, 0));

    #[allow(clippy::cast_precision_loss)]
    let edges = bin_edges(min as f64, max as f64, bin_count.max(1));
    let bins: Vec<CountBin> = edges
        .windows(2)
        .enumerate()
        .map(|(i, w)| CountBin {
            lower: w[0],
            upper: w[1],
            label: format!("{} - {}", format_count(w[0]), format_count(w[1])),
            color: bin_color(i),
        })
        .collect();

    let mut states: Vec<StateJobCount> = counts
        .iter()
        .filter_map(|(state, job_count)| {
            let name = state_name(state)?;
            #[allow(clippy::cast_precision_loss)]
            let bin = assign_bin(&edges, job_count as f64);
            Some(StateJobCount {
                state: (*state).to_string(),
                state_name: name,
                job_count,
                bin,
            })
        })
        .collect();
    states.sort_by(|a, b| a.state.cmp(&b.state));

    Ok(StateJobCounts {
        skill: skill.to_string(),
        title: format!("Skill Distribution in Job Postings for {skill} across the USA"),
        states,
        bins,
    })
}

/// Equal-width bin edges over `[min, max]`
///
/// A single-point range is widened by one so the bins never collapse.
#[must_use]
pub fn bin_edges(min: f64, max: f64, bins: usize) -> SmallVec<[f64; 4]> {
    let max = if max <= min { min + 1.0 } else { max };
    #[allow(clippy::cast_precision_loss)]
    let width = (max - min) / bins as f64;
    let mut edges: SmallVec<[f64; 4]> = (0..bins)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = width * i as f64;
            min + offset
        })
        .collect();
    edges.push(max);
    edges
}

/// Index of the right-closed bin holding `value`; the first bin is closed
/// on both ends
#[must_use]
pub fn assign_bin(edges: &[f64], value: f64) -> usize {
    let last = edges.len().saturating_sub(2);
    edges
        .windows(2)
        .position(|w| value <= w[1])
        .unwrap_or(last)
}

/// Human label for a bin edge: thousands become "NK", smaller values are
/// truncated to an integer
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_count(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}K", (value / 1000.0).round_ties_even() as i64)
    } else {
        format!("{}", value.trunc() as i64)
    }
}
