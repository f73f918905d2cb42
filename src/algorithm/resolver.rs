//! Filter resolution for the company/work-type view
//!
//! A direct skill-and-state intersection is often empty or covers a single
//! employer, which makes a "top companies" chart meaningless. The resolver
//! widens the selection step by step until the subset covers at least two
//! distinct companies, and reports which filters ended up in effect so the
//! chart caption can say so.
//!
//! Candidates, narrowest first:
//!
//! 1. skill and state
//! 2. skill only
//! 3. state only
//! 4. the whole table
//!
//! A candidate wins only when it has more than one distinct company. This is
//! re-checked after every widening step, so a non-empty single-company subset
//! never wins.

use serde::Serialize;

use crate::error::Result;
use crate::filter::{Expr, skill_and_state_filter, skill_filter, state_filter};
use crate::models::{JobTable, TextColumn};

/// Which selection filters produced the company view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterScope {
    /// Skill and state both applied
    Both,
    /// Only the skill applied
    SkillOnly,
    /// Only the state applied
    StateOnly,
    /// Neither applied; the whole table is used
    None,
}

impl FilterScope {
    /// Whether the state filter is in effect
    #[must_use]
    pub const fn uses_state(self) -> bool {
        matches!(self, Self::Both | Self::StateOnly)
    }

    /// Chart caption naming only the filters in effect
    #[must_use]
    pub fn caption(self, skill: &str, state_name: &str, work_type: &str) -> String {
        match self {
            Self::Both => format!(
                "Top Companies for {skill} in {state_name}: Distribution by Experience Level of {work_type}"
            ),
            Self::SkillOnly => format!(
                "Top Companies for {skill}: Distribution by Experience Level of {work_type}"
            ),
            Self::StateOnly => format!(
                "Top Companies in {state_name}: Distribution by Experience Level of {work_type}"
            ),
            Self::None => {
                format!("Top Companies: Distribution by Experience Level of {work_type}")
            }
        }
    }
}

/// Outcome of filter resolution
#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    /// Rows feeding the company view
    pub rows: JobTable,
    /// Filters in effect
    pub scope: FilterScope,
}

/// Resolves a (skill, state) selection against a table
#[derive(Debug, Clone, Copy)]
pub struct FilterResolver<'a> {
    table: &'a JobTable,
}

impl<'a> FilterResolver<'a> {
    /// Create a resolver over a table
    #[must_use]
    pub const fn new(table: &'a JobTable) -> Self {
        Self { table }
    }

    /// Pick the narrowest subset with more than one distinct company
    ///
    /// Never fails for lack of data: when no candidate qualifies the whole
    /// table is returned with [`FilterScope::None`], so the result is
    /// non-empty whenever the table is.
    pub fn resolve(&self, skill: &str, state: &str) -> Result<ResolvedFilter> {
        let candidates: [(FilterScope, Expr); 3] = [
            (FilterScope::Both, skill_and_state_filter(skill, state)),
            (FilterScope::SkillOnly, skill_filter(skill)),
            (FilterScope::StateOnly, state_filter(state)),
        ];

        for (scope, expr) in candidates {
            let rows = self.table.filter(&expr)?;
            let companies = rows.distinct_count(TextColumn::Company);
            if companies > 1 {
                log::debug!(
                    "Resolved company view for skill '{skill}', state '{state}' to {scope:?} ({} rows, {companies} companies)",
                    rows.num_rows()
                );
                return Ok(ResolvedFilter { rows, scope });
            }
            log::debug!(
                "Candidate {scope:?} for skill '{skill}', state '{state}' has {} rows and {companies} companies; widening",
                rows.num_rows()
            );
        }

        log::info!("No filter for skill '{skill}', state '{state}' covers two companies; using all rows");
        Ok(ResolvedFilter {
            rows: self.table.clone(),
            scope: FilterScope::None,
        })
    }
}
