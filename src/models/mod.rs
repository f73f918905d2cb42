//! Posting rows and the table that holds them.

pub mod posting;
pub mod table;

pub use posting::{JobPosting, columns};
pub use table::{JobTable, NumericColumn, TextColumn};
