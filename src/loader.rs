//! Dataset loading
//!
//! The posting table is read once, from CSV or Parquet, into Arrow record
//! batches that are normalized into a [`JobTable`]. CSV columns are all read
//! as text so that malformed numbers surface as nulls during normalization
//! instead of aborting the load.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::config::DatasetConfig;
use crate::error::util::safe_open_file;
use crate::error::{InsightsError, Result};
use crate::models::JobTable;
use crate::utils::{log_operation_complete, log_operation_start};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Parquet,
}

impl DatasetFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            _ => Err(InsightsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a posting table from a CSV or Parquet file
pub fn load_dataset(path: &Path, config: &DatasetConfig) -> Result<JobTable> {
    let format = DatasetFormat::from_path(path)?;
    log_operation_start("Loading dataset", path);
    let start = Instant::now();

    let batches = match format {
        DatasetFormat::Csv => read_csv(path, config)?,
        DatasetFormat::Parquet => read_parquet(path, config)?,
    };
    let table = JobTable::from_batches(&batches)?;

    log_operation_complete("loaded", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Read a CSV file into record batches with every column as `Utf8`
pub fn read_csv(path: &Path, config: &DatasetConfig) -> Result<Vec<RecordBatch>> {
    let mut file = safe_open_file(path, "reading CSV dataset")?;

    let format = Format::default()
        .with_header(config.has_header)
        .with_delimiter(config.delimiter);
    let (inferred, records) = format.infer_schema(&mut file, config.max_infer_records)?;
    log::debug!(
        "Inferred {} CSV columns from {records} records",
        inferred.fields().len()
    );
    file.rewind().map_err(|e| InsightsError::io(path, e))?;

    let schema = Schema::new(
        inferred
            .fields()
            .iter()
            .map(|f| Field::new(f.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );
    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(config.has_header)
        .with_delimiter(config.delimiter)
        .with_batch_size(config.batch_size)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(batches)
}

/// Read a Parquet file into record batches
pub fn read_parquet(path: &Path, config: &DatasetConfig) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading parquet dataset")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(config.batch_size)
        .build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(batches)
}
