//! The immutable posting table every view is computed from.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::compute::{cast, concat_batches};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, FieldRef, Schema, SchemaRef};
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::error::{InsightsError, Result};
use crate::filter::BatchFilter;
use crate::models::posting::{JobPosting, columns};

/// Text columns of the posting table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColumn {
    JobId,
    State,
    Skill,
    Company,
    ExperienceLevel,
    WorkType,
}

impl TextColumn {
    /// Column name in the table schema
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JobId => columns::JOB_ID,
            Self::State => columns::STATE,
            Self::Skill => columns::SKILL_NAME,
            Self::Company => columns::COMPANY_NAME,
            Self::ExperienceLevel => columns::EXPERIENCE_LEVEL,
            Self::WorkType => columns::WORK_TYPE,
        }
    }
}

/// Numeric columns of the posting table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    MinSalary,
    MaxSalary,
    Applies,
    CompanySize,
}

impl NumericColumn {
    /// Column name in the table schema
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinSalary => columns::MIN_SALARY,
            Self::MaxSalary => columns::MAX_SALARY,
            Self::Applies => columns::APPLIES,
            Self::CompanySize => columns::COMPANY_SIZE,
        }
    }
}

/// Column layout of a normalized table, in schema order
const LAYOUT: [(&str, DataType); 10] = [
    (columns::JOB_ID, DataType::Utf8),
    (columns::STATE, DataType::Utf8),
    (columns::SKILL_NAME, DataType::Utf8),
    (columns::MIN_SALARY, DataType::Float64),
    (columns::MAX_SALARY, DataType::Float64),
    (columns::APPLIES, DataType::Float64),
    (columns::COMPANY_NAME, DataType::Utf8),
    (columns::COMPANY_SIZE, DataType::Float64),
    (columns::EXPERIENCE_LEVEL, DataType::Utf8),
    (columns::WORK_TYPE, DataType::Utf8),
];

/// Typed handles onto the normalized columns
#[derive(Debug, Clone)]
struct Columns {
    job_id: StringArray,
    state: StringArray,
    skill: StringArray,
    min_salary: Float64Array,
    max_salary: Float64Array,
    applies: Float64Array,
    company: StringArray,
    company_size: Float64Array,
    experience_level: StringArray,
    work_type: StringArray,
}

impl Columns {
    fn from_batch(batch: &RecordBatch) -> Result<Self> {
        Ok(Self {
            job_id: downcast_text(batch, columns::JOB_ID)?,
            state: downcast_text(batch, columns::STATE)?,
            skill: downcast_text(batch, columns::SKILL_NAME)?,
            min_salary: downcast_numeric(batch, columns::MIN_SALARY)?,
            max_salary: downcast_numeric(batch, columns::MAX_SALARY)?,
            applies: downcast_numeric(batch, columns::APPLIES)?,
            company: downcast_text(batch, columns::COMPANY_NAME)?,
            company_size: downcast_numeric(batch, columns::COMPANY_SIZE)?,
            experience_level: downcast_text(batch, columns::EXPERIENCE_LEVEL)?,
            work_type: downcast_text(batch, columns::WORK_TYPE)?,
        })
    }
}

fn downcast_text(batch: &RecordBatch, name: &str) -> Result<StringArray> {
    batch
        .column_by_name(name)
        .and_then(|array| array.as_any().downcast_ref::<StringArray>())
        .cloned()
        .ok_or_else(|| InsightsError::schema(name, "expected a Utf8 column"))
}

fn downcast_numeric(batch: &RecordBatch, name: &str) -> Result<Float64Array> {
    batch
        .column_by_name(name)
        .and_then(|array| array.as_any().downcast_ref::<Float64Array>())
        .cloned()
        .ok_or_else(|| InsightsError::schema(name, "expected a Float64 column"))
}

/// Immutable posting table backed by a single Arrow record batch
///
/// Construction normalizes any input batch to the fixed ten-column layout:
/// text columns become `Utf8` and numeric columns become `Float64`. Numeric
/// values that do not parse turn into nulls rather than errors, which is what
/// the aggregations rely on to drop them row-wise.
#[derive(Debug, Clone)]
pub struct JobTable {
    batch: RecordBatch,
    columns: Columns,
}

impl JobTable {
    /// The normalized schema
    #[must_use]
    pub fn schema() -> SchemaRef {
        Arc::new(Schema::new(
            LAYOUT
                .iter()
                .map(|(name, data_type)| Field::new(*name, data_type.clone(), true))
                .collect::<Vec<_>>(),
        ))
    }

    /// A table with no rows
    #[must_use]
    pub fn empty() -> Self {
        let batch = RecordBatch::new_empty(Self::schema());
        let columns = Columns {
            job_id: StringArray::from(Vec::<Option<&str>>::new()),
            state: StringArray::from(Vec::<Option<&str>>::new()),
            skill: StringArray::from(Vec::<Option<&str>>::new()),
            min_salary: Float64Array::from(Vec::<Option<f64>>::new()),
            max_salary: Float64Array::from(Vec::<Option<f64>>::new()),
            applies: Float64Array::from(Vec::<Option<f64>>::new()),
            company: StringArray::from(Vec::<Option<&str>>::new()),
            company_size: Float64Array::from(Vec::<Option<f64>>::new()),
            experience_level: StringArray::from(Vec::<Option<&str>>::new()),
            work_type: StringArray::from(Vec::<Option<&str>>::new()),
        };
        Self { batch, columns }
    }

    /// Normalize an arbitrary batch into a posting table
    ///
    /// Extra columns are dropped; a missing required column is an error.
    pub fn try_new(batch: &RecordBatch) -> Result<Self> {
        let input_schema = batch.schema();
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(LAYOUT.len());

        for (name, data_type) in &LAYOUT {
            let idx = input_schema
                .index_of(name)
                .map_err(|_| InsightsError::schema(*name, "required column is missing"))?;
            let column = batch.column(idx);
            let normalized = if column.data_type() == data_type {
                Arc::clone(column)
            } else {
                log::debug!(
                    "Casting column '{name}' from {:?} to {data_type:?}",
                    column.data_type()
                );
                cast(column, data_type).map_err(|e| {
                    InsightsError::schema(*name, format!("cannot cast to {data_type:?}: {e}"))
                })?
            };
            let normalized = if *data_type == DataType::Float64 {
                null_non_finite(name, &normalized)?
            } else {
                normalized
            };
            arrays.push(normalized);
        }

        let normalized = RecordBatch::try_new(Self::schema(), arrays)?;
        Self::from_normalized(normalized)
    }

    /// Normalize and concatenate several batches
    pub fn from_batches(batches: &[RecordBatch]) -> Result<Self> {
        if batches.is_empty() {
            return Ok(Self::empty());
        }
        let normalized: Vec<RecordBatch> = batches
            .iter()
            .map(|batch| Self::try_new(batch).map(|table| table.batch))
            .collect::<Result<_>>()?;
        let combined = concat_batches(&Self::schema(), &normalized)?;
        Self::from_normalized(combined)
    }

    /// Build a table from in-memory rows
    pub fn from_postings(postings: &[JobPosting]) -> Result<Self> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().map(Arc::clone).collect();
        let batch = serde_arrow::to_record_batch(&fields, &postings)?;
        Self::try_new(&batch)
    }

    fn from_normalized(batch: RecordBatch) -> Result<Self> {
        let columns = Columns::from_batch(&batch)?;
        Ok(Self { batch, columns })
    }

    /// Decode the table back into rows
    pub fn postings(&self) -> Result<Vec<JobPosting>> {
        Ok(serde_arrow::from_record_batch(&self.batch)?)
    }

    /// Number of rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// The underlying record batch
    #[must_use]
    pub const fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Typed access to a text column
    #[must_use]
    pub const fn text(&self, column: TextColumn) -> &StringArray {
        match column {
            TextColumn::JobId => &self.columns.job_id,
            TextColumn::State => &self.columns.state,
            TextColumn::Skill => &self.columns.skill,
            TextColumn::Company => &self.columns.company,
            TextColumn::ExperienceLevel => &self.columns.experience_level,
            TextColumn::WorkType => &self.columns.work_type,
        }
    }

    /// Typed access to a numeric column
    #[must_use]
    pub const fn numeric(&self, column: NumericColumn) -> &Float64Array {
        match column {
            NumericColumn::MinSalary => &self.columns.min_salary,
            NumericColumn::MaxSalary => &self.columns.max_salary,
            NumericColumn::Applies => &self.columns.applies,
            NumericColumn::CompanySize => &self.columns.company_size,
        }
    }

    /// Rows selected by a filter, as a new table
    pub fn filter<F: BatchFilter + ?Sized>(&self, filter: &F) -> Result<Self> {
        if self.is_empty() {
            return Ok(self.clone());
        }
        let filtered = filter.filter(&self.batch)?;
        Self::from_normalized(filtered)
    }

    /// Distinct non-null values of a text column, in first-appearance order
    #[must_use]
    pub fn distinct(&self, column: TextColumn) -> Vec<String> {
        self.text(column)
            .iter()
            .flatten()
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Number of distinct non-null values in a text column
    #[must_use]
    pub fn distinct_count(&self, column: TextColumn) -> usize {
        self.text(column)
            .iter()
            .flatten()
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Distinct skill names in first-appearance order
    #[must_use]
    pub fn skills(&self) -> Vec<String> {
        self.distinct(TextColumn::Skill)
    }

    /// Distinct work types in first-appearance order
    #[must_use]
    pub fn work_types(&self) -> Vec<String> {
        self.distinct(TextColumn::WorkType)
    }

    /// Whether a skill occurs anywhere in the table
    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.text(TextColumn::Skill).iter().flatten().any(|s| s == skill)
    }
}

/// `NaN` and infinities parse as floats but carry no measurement; they are stored as null.
fn null_non_finite(name: &str, column: &ArrayRef) -> Result<ArrayRef> {
    let values = column
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| InsightsError::schema(name, "expected a float array"))?;
    if values.iter().flatten().all(f64::is_finite) {
        return Ok(Arc::clone(column));
    }
    log::debug!("Column '{name}' holds non-finite values, storing them as null");
    let cleaned: Float64Array = values
        .iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect();
    Ok(Arc::new(cleaned))
}
