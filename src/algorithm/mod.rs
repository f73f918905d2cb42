//! View computations for the job-postings dashboard
//!
//! Each view is a pure function of the loaded table and the current
//! selection. The filter resolver decides which subset feeds the company
//! view; the other views filter the table directly.

pub mod geographic;
pub mod resolver;
pub mod salary;
pub mod skill_flow;
pub mod summary;
pub mod top_companies;
pub mod work_type;

pub use geographic::{CountBin, StateJobCount, StateJobCounts, state_job_counts};
pub use resolver::{FilterResolver, FilterScope, ResolvedFilter};
pub use salary::{
    AppliesCategory, SalaryApplyDistribution, SalaryBox, SalaryObservation, explode_salaries,
    salary_apply_distribution,
};
pub use skill_flow::{FlowLink, FlowNode, FlowNodeKind, SkillExperienceFlow, skill_experience_flow};
pub use summary::{CompanyCount, SidebarSummary, sidebar_summary};
pub use top_companies::{
    CompanyExperienceCount, TopCompanyExperience, company_experience_counts,
    top_companies_by_experience,
};
pub use work_type::{WorkTypeSelection, reconcile_work_type};
