//! Row-level representation of a job posting.

use serde::{Deserialize, Serialize};

/// Column names of the posting table
pub mod columns {
    /// Posting identifier
    pub const JOB_ID: &str = "job_id";
    /// Two-letter state code
    pub const STATE: &str = "state";
    /// Skill attached to the posting row
    pub const SKILL_NAME: &str = "skill_name";
    /// Lower salary bound
    pub const MIN_SALARY: &str = "min_salary";
    /// Upper salary bound
    pub const MAX_SALARY: &str = "max_salary";
    /// Number of applications
    pub const APPLIES: &str = "applies";
    /// Employer name
    pub const COMPANY_NAME: &str = "company_name";
    /// Ordinal company-size code (1-7)
    pub const COMPANY_SIZE: &str = "company_size";
    /// Experience level label
    pub const EXPERIENCE_LEVEL: &str = "formatted_experience_level";
    /// Work type label
    pub const WORK_TYPE: &str = "formatted_work_type";
}

/// One posting-skill pair
///
/// A posting listing several skills appears once per skill. Every field is
/// optional because the source table may hold nulls anywhere; numeric fields
/// that failed to parse are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: Option<String>,
    pub state: Option<String>,
    pub skill_name: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub applies: Option<f64>,
    pub company_name: Option<String>,
    pub company_size: Option<f64>,
    pub formatted_experience_level: Option<String>,
    pub formatted_work_type: Option<String>,
}

impl JobPosting {
    /// Create a posting with the identifying text fields set
    #[must_use]
    pub fn new(job_id: &str, state: &str, skill_name: &str, company_name: &str) -> Self {
        Self {
            job_id: Some(job_id.to_string()),
            state: Some(state.to_string()),
            skill_name: Some(skill_name.to_string()),
            company_name: Some(company_name.to_string()),
            ..Self::default()
        }
    }

    /// Set the salary range
    #[must_use]
    pub const fn with_salary(mut self, min: f64, max: f64) -> Self {
        self.min_salary = Some(min);
        self.max_salary = Some(max);
        self
    }

    /// Set the application count
    #[must_use]
    pub const fn with_applies(mut self, applies: f64) -> Self {
        self.applies = Some(applies);
        self
    }

    /// Set the company-size code
    #[must_use]
    pub const fn with_company_size(mut self, code: f64) -> Self {
        self.company_size = Some(code);
        self
    }

    /// Set the experience level
    #[must_use]
    pub fn with_experience(mut self, level: &str) -> Self {
        self.formatted_experience_level = Some(level.to_string());
        self
    }

    /// Set the work type
    #[must_use]
    pub fn with_work_type(mut self, work_type: &str) -> Self {
        self.formatted_work_type = Some(work_type.to_string());
        self
    }
}
