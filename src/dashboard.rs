//! Dashboard session: the selection cursor and view recomputation
//!
//! A [`Dashboard`] shares one immutable [`JobTable`] and owns the only mutable
//! state of a session, the current [`Selection`]. Every selection change
//! validates its input, reconciles the work-type cursor against the newly
//! resolved subset and recomputes all views into a [`DashboardSnapshot`].
//! Nothing is cached between selections.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::algorithm::{
    FilterResolver, ResolvedFilter, SalaryApplyDistribution, SidebarSummary, SkillExperienceFlow,
    StateJobCounts, TopCompanyExperience, WorkTypeSelection, salary_apply_distribution,
    sidebar_summary, skill_experience_flow, state_job_counts, top_companies_by_experience,
};
use crate::config::DashboardConfig;
use crate::error::{InsightsError, Result};
use crate::models::JobTable;
use crate::reference::{is_reference_state, state_name};
use crate::utils::log_view;

/// The session cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub skill: String,
    /// Two-letter state code
    pub state: String,
    /// Unset only when the resolved subset has no work types
    pub work_type: Option<String>,
}

/// Every view for one selection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub selection: Selection,
    pub state_name: String,
    pub summary: SidebarSummary,
    pub geographic: StateJobCounts,
    pub skill_flow: SkillExperienceFlow,
    pub top_companies: TopCompanyExperience,
    pub salary: SalaryApplyDistribution,
}

/// One dashboard session over a shared table
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<JobTable>,
    config: DashboardConfig,
    selection: Selection,
}

impl Dashboard {
    /// Start a session on the first skill of the table and the configured
    /// default state
    pub fn new(table: Arc<JobTable>, config: DashboardConfig) -> Result<Self> {
        let skill = table
            .skills()
            .into_iter()
            .next()
            .ok_or_else(|| InsightsError::invalid_selection("skill", "<empty table>"))?;
        if !is_reference_state(&config.default_state) {
            return Err(InsightsError::invalid_selection(
                "state",
                config.default_state.clone(),
            ));
        }

        let mut dashboard = Self {
            selection: Selection {
                skill,
                state: config.default_state.clone(),
                work_type: None,
            },
            table,
            config,
        };
        dashboard.reconcile_work_type()?;
        log::info!(
            "Dashboard session started on skill '{}' in {}",
            dashboard.selection.skill,
            dashboard.selection.state
        );
        Ok(dashboard)
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &JobTable {
        &self.table
    }

    /// Move the skill cursor without recomputing any view
    pub fn set_skill(&mut self, skill: &str) -> Result<()> {
        if !self.table.has_skill(skill) {
            return Err(InsightsError::invalid_selection("skill", skill));
        }
        self.selection.skill = skill.to_string();
        self.reconcile_work_type()
    }

    /// Move the state cursor to a two-letter code (case-insensitive)
    pub fn set_state(&mut self, state: &str) -> Result<()> {
        let code = state.trim().to_ascii_uppercase();
        if !is_reference_state(&code) {
            return Err(InsightsError::invalid_selection("state", state));
        }
        self.selection.state = code;
        self.reconcile_work_type()
    }

    /// Move the work type cursor to one of the work types available for the
    /// current skill and state; the cursor is left unchanged on error
    pub fn set_work_type(&mut self, work_type: &str) -> Result<()> {
        let available = self.work_types()?;
        if !available.contains(work_type) {
            return Err(InsightsError::invalid_selection("work type", work_type));
        }
        self.selection.work_type = Some(work_type.to_string());
        Ok(())
    }

    /// Select a skill present in the table
    pub fn select_skill(&mut self, skill: &str) -> Result<DashboardSnapshot> {
        self.set_skill(skill)?;
        self.snapshot()
    }

    /// Select a state by its two-letter code (case-insensitive)
    pub fn select_state(&mut self, state: &str) -> Result<DashboardSnapshot> {
        self.set_state(state)?;
        self.snapshot()
    }

    /// Select a work type available for the current skill and state
    pub fn select_work_type(&mut self, work_type: &str) -> Result<DashboardSnapshot> {
        self.set_work_type(work_type)?;
        self.snapshot()
    }

    /// Work types available for the current selection
    pub fn work_types(&self) -> Result<WorkTypeSelection> {
        let resolved = self.resolve()?;
        Ok(WorkTypeSelection::resolve(
            &resolved.rows,
            self.selection.work_type.as_deref(),
        ))
    }

    /// Recompute every view for the current selection
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        let Selection {
            skill,
            state,
            work_type,
        } = &self.selection;
        let config = &self.config;
        let state_label = state_name(state).unwrap_or(state.as_str());

        let start = Instant::now();
        let summary = sidebar_summary(&self.table, skill, state, config.top_companies)?;
        log_view("sidebar", summary.job_count, start.elapsed());

        let start = Instant::now();
        let geographic = state_job_counts(&self.table, skill, config.bin_count)?;
        log_view("geographic", geographic.states.len(), start.elapsed());

        let start = Instant::now();
        let skill_flow = skill_experience_flow(&self.table, state, skill, config)?;
        log_view("skill flow", skill_flow.links.len(), start.elapsed());

        let start = Instant::now();
        let resolved = self.resolve()?;
        let available = resolved.rows.work_types();
        let top_companies = top_companies_by_experience(
            &resolved,
            &available,
            work_type.as_deref(),
            skill,
            state_label,
            config.top_companies,
        )?;
        log_view("top companies", top_companies.rows.len(), start.elapsed());

        let start = Instant::now();
        let salary = salary_apply_distribution(&self.table, skill, config.top_company_sizes)?;
        log_view("salary", salary.observations.len(), start.elapsed());

        Ok(DashboardSnapshot {
            generated_at: Utc::now(),
            selection: self.selection.clone(),
            state_name: state_label.to_string(),
            summary,
            geographic,
            skill_flow,
            top_companies,
            salary,
        })
    }

    fn resolve(&self) -> Result<ResolvedFilter> {
        FilterResolver::new(&self.table).resolve(&self.selection.skill, &self.selection.state)
    }

    fn reconcile_work_type(&mut self) -> Result<()> {
        let selection = self.work_types()?;
        self.selection.work_type = selection.selected;
        Ok(())
    }
}
