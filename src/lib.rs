//! Analytics over a table of job postings: per-selection views of skill
//! demand by state, skill-to-experience flows, top companies by experience
//! level and salary distributions by company size.

pub mod algorithm;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod reference;
pub mod utils;

// Core types
pub use config::{DashboardConfig, DatasetConfig, InsightsConfig};
pub use dashboard::{Dashboard, DashboardSnapshot, Selection};
pub use error::{InsightsError, Result};
pub use loader::{DatasetFormat, load_dataset};
pub use models::{JobPosting, JobTable};

// Views
pub use algorithm::{
    FilterResolver, FilterScope, ResolvedFilter, SalaryApplyDistribution, SidebarSummary,
    SkillExperienceFlow, StateJobCounts, TopCompanyExperience, WorkTypeSelection,
};

// Filtering capabilities
pub use filter::{BatchFilter, Expr, LiteralValue};

// Arrow types
pub use arrow::record_batch::RecordBatch;
