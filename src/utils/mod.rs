//! Shared helpers: logging and descriptive statistics.

pub mod logging;
pub mod stats;

pub use logging::{log_operation_complete, log_operation_start, log_view};
pub use stats::{CountTable, Quartiles, quantile};
