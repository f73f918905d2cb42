//! Work-type enumeration and cursor reconciliation.

use serde::Serialize;

use crate::models::JobTable;

/// Work types available in a subset and the one currently selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkTypeSelection {
    /// Distinct work types in first-appearance order
    pub available: Vec<String>,
    /// Selected work type; `None` only when nothing is available
    pub selected: Option<String>,
}

impl WorkTypeSelection {
    /// Enumerate the work types of `rows` and reconcile a previous selection
    #[must_use]
    pub fn resolve(rows: &JobTable, previous: Option<&str>) -> Self {
        let available = rows.work_types();
        let selected = reconcile_work_type(&available, previous);
        Self {
            available,
            selected,
        }
    }

    /// Whether a work type can be selected
    #[must_use]
    pub fn contains(&self, work_type: &str) -> bool {
        self.available.iter().any(|w| w == work_type)
    }
}

/// Keep the previous selection when still available, else the first option
///
/// Returns `None` when no work type is available.
#[must_use]
pub fn reconcile_work_type(available: &[String], previous: Option<&str>) -> Option<String> {
    if let Some(prev) = previous {
        if available.iter().any(|w| w == prev) {
            return Some(prev.to_string());
        }
        if let Some(first) = available.first() {
            log::debug!("Work type '{prev}' no longer available; resetting to '{first}'");
        }
    }
    available.first().cloned()
}
