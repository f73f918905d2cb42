//! Configuration for loading datasets and computing dashboard views.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::util::read_to_string;

/// Configuration for the dataset loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Number of rows per record batch while reading
    pub batch_size: usize,
    /// Field delimiter for CSV input
    pub delimiter: u8,
    /// Whether the CSV input starts with a header row
    pub has_header: bool,
    /// Number of CSV records scanned when inferring the header
    pub max_infer_records: Option<usize>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            batch_size: 8192,
            delimiter: b',',
            has_header: true,
            max_infer_records: Some(100),
        }
    }
}

/// Tuning knobs for the aggregation pipeline
///
/// The defaults reproduce the reference dashboard: five top skills, five top
/// companies, three company-size buckets and three choropleth bins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// State selected when a session starts
    pub default_state: String,
    /// Number of skills shown in the skill flow
    pub top_skills: usize,
    /// Number of companies shown in the work-type chart and sidebar
    pub top_companies: usize,
    /// Number of company-size buckets in the salary distribution
    pub top_company_sizes: usize,
    /// Number of choropleth bins
    pub bin_count: usize,
    /// Skill names treated as noise in rankings (compared case-insensitively)
    pub excluded_skills: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_state: "CA".to_string(),
            top_skills: 5,
            top_companies: 5,
            top_company_sizes: 3,
            bin_count: 3,
            excluded_skills: vec!["other".to_string()],
        }
    }
}

impl DashboardConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::new()
    }

    /// Whether a skill name is excluded from top-skill rankings
    #[must_use]
    pub fn is_excluded_skill(&self, skill: &str) -> bool {
        self.excluded_skills
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(skill))
    }
}

/// Builder for [`DashboardConfig`]
#[derive(Debug, Clone, Default)]
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    /// Create a builder seeded with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state selected at session start
    #[must_use]
    pub fn default_state(mut self, state: impl Into<String>) -> Self {
        self.config.default_state = state.into();
        self
    }

    /// Set the number of skills in the skill flow
    #[must_use]
    pub const fn top_skills(mut self, n: usize) -> Self {
        self.config.top_skills = n;
        self
    }

    /// Set the number of companies in the company views
    #[must_use]
    pub const fn top_companies(mut self, n: usize) -> Self {
        self.config.top_companies = n;
        self
    }

    /// Set the number of company-size buckets in the salary view
    #[must_use]
    pub const fn top_company_sizes(mut self, n: usize) -> Self {
        self.config.top_company_sizes = n;
        self
    }

    /// Set the number of choropleth bins (at least one)
    #[must_use]
    pub fn bin_count(mut self, n: usize) -> Self {
        self.config.bin_count = n.max(1);
        self
    }

    /// Add a skill name to exclude from rankings
    #[must_use]
    pub fn exclude_skill(mut self, skill: impl Into<String>) -> Self {
        self.config.excluded_skills.push(skill.into());
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> DashboardConfig {
        self.config
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Loader settings
    pub dataset: DatasetConfig,
    /// Aggregation settings
    pub dashboard: DashboardConfig,
}

impl InsightsConfig {
    /// Load both sections from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
