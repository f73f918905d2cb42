//! Filtering capabilities for posting tables
//!
//! This module provides a flexible expression-based filtering system
//! for Arrow record batches, plus constructors for the selections the
//! dashboard controls produce.

pub mod core;
pub mod expr;

pub use self::core::{BatchFilter, filter_record_batch};
pub use self::expr::{Expr, LiteralValue, evaluate_expr};

use crate::models::columns;

/// Rows whose skill matches exactly
#[must_use]
pub fn skill_filter(skill: &str) -> Expr {
    Expr::eq(columns::SKILL_NAME, skill)
}

/// Rows posted in a state
#[must_use]
pub fn state_filter(state: &str) -> Expr {
    Expr::eq(columns::STATE, state)
}

/// Rows matching both a skill and a state
#[must_use]
pub fn skill_and_state_filter(skill: &str, state: &str) -> Expr {
    Expr::all(vec![skill_filter(skill), state_filter(state)])
}

/// Rows of one work type
#[must_use]
pub fn work_type_filter(work_type: &str) -> Expr {
    Expr::eq(columns::WORK_TYPE, work_type)
}

/// Rows whose state is one of the given codes
#[must_use]
pub fn states_in_filter<'a>(states: impl IntoIterator<Item = &'a str>) -> Expr {
    Expr::in_strings(columns::STATE, states)
}
