//! Expression-based filtering for posting tables
//!
//! This module provides an expression-based filtering system that
//! allows filtering Arrow record batches based on column values.
//!
//! Comparisons follow SQL three-valued logic: a null cell never matches an
//! equality and `And` uses Kleene semantics, so rows with nulls in a
//! compared column are dropped.

use arrow::array::{Array, ArrayRef, BooleanArray, StringArray};
use arrow::compute::kernels::cmp::eq;
use arrow::compute::{and_kleene, or_kleene};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{InsightsError, Result};
use crate::filter::core::BatchFilter;

/// Represents a filter expression over a posting table
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column equals a literal value
    Eq(String, LiteralValue),

    /// Column is in a set of values
    In(String, Vec<LiteralValue>),

    /// Logical AND of expressions
    And(Vec<Expr>),

    /// Always evaluates to true
    AlwaysTrue,
}

/// Represents a literal value that can be used in filter expressions
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// String value
    String(String),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl Expr {
    /// Column equals a literal
    pub fn eq(column: &str, value: impl Into<LiteralValue>) -> Self {
        Self::Eq(column.to_string(), value.into())
    }

    /// Column is one of the given strings
    pub fn in_strings<'a>(column: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
        Self::In(
            column.to_string(),
            values.into_iter().map(LiteralValue::from).collect(),
        )
    }

    /// Conjunction, flattening to the single operand when only one is given
    #[must_use]
    pub fn all(mut exprs: Vec<Self>) -> Self {
        match exprs.len() {
            0 => Self::AlwaysTrue,
            1 => exprs.swap_remove(0),
            _ => Self::And(exprs),
        }
    }
}

impl BatchFilter for Expr {
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        evaluate_expr(batch, self)
    }
}

/// Evaluates a filter expression against a record batch
///
/// # Returns
/// A boolean array indicating which rows match the filter; null entries are
/// treated as non-matching by [`crate::filter::filter_record_batch`]
pub fn evaluate_expr(batch: &RecordBatch, expr: &Expr) -> Result<BooleanArray> {
    match expr {
        Expr::AlwaysTrue => Ok(BooleanArray::from(vec![true; batch.num_rows()])),
        Expr::And(exprs) => evaluate_and_expression(batch, exprs),
        Expr::Eq(col, value) => evaluate_equality(batch, col, value),
        Expr::In(col, values) => evaluate_in_expression(batch, col, values),
    }
}

fn evaluate_and_expression(batch: &RecordBatch, exprs: &[Expr]) -> Result<BooleanArray> {
    let Some((first, rest)) = exprs.split_first() else {
        return Ok(BooleanArray::from(vec![true; batch.num_rows()]));
    };

    let mut result = evaluate_expr(batch, first)?;
    for expr in rest {
        let mask = evaluate_expr(batch, expr)?;
        result = and_kleene(&result, &mask)?;
    }
    Ok(result)
}

fn evaluate_in_expression(
    batch: &RecordBatch,
    col_name: &str,
    values: &[LiteralValue],
) -> Result<BooleanArray> {
    let mut result = BooleanArray::from(vec![false; batch.num_rows()]);
    for value in values {
        let mask = evaluate_equality(batch, col_name, value)?;
        result = or_kleene(&result, &mask)?;
    }
    Ok(result)
}

fn column<'a>(batch: &'a RecordBatch, col_name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(col_name)
        .map_err(|_| InsightsError::schema(col_name, "column not found in batch"))?;
    Ok(batch.column(idx))
}

fn evaluate_equality(
    batch: &RecordBatch,
    col_name: &str,
    literal: &LiteralValue,
) -> Result<BooleanArray> {
    let array = column(batch, col_name)?;

    match (array.data_type(), literal) {
        (DataType::Utf8, LiteralValue::String(s)) => {
            let values = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| InsightsError::schema(col_name, "expected a string array"))?;
            Ok(eq(values, &StringArray::new_scalar(s))?)
        }
        (data_type, literal) => Err(InsightsError::schema(
            col_name,
            format!("cannot compare {data_type:?} column with {literal:?}"),
        )),
    }
}
