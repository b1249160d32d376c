// src/domain/errors.rs
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures raised by the external trade-data source. The report pipeline
/// never surfaces these to its caller; they are logged at the fetch boundary
/// and translated into `ReportError::SourceUnavailable`.
#[derive(Error, Debug)]
pub enum TradeSourceError {
    #[error("Power service error: {0}")]
    Service(String),

    #[error("Unexpected source error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unable to get trade data")]
    SourceUnavailable,

    #[error("Missing aggregation data")]
    MissingAggregationData,

    // An empty bucket list is an invariant violation, not a valid
    // zero-trade day.
    #[error("Settlement day {0} produced no time buckets")]
    EmptyBucketRange(NaiveDate),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Report file name must be defined")]
    MissingFileName,

    #[error("Report file path must be defined")]
    MissingPath,

    #[error("Data headers are missing")]
    MissingHeaders,

    #[error("Number of header columns does not match number of columns in tabular data")]
    HeaderMismatch,

    #[error("Directory for export could not be created")]
    DirectoryCreate(#[source] std::io::Error),

    // The underlying cause is logged at the write boundary; the result
    // value carries only the generic failure.
    #[error("Exception occurred while saving report file")]
    Write(#[source] std::io::Error),
}

// Result type aliases for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type ReportResult<T> = Result<T, ReportError>;
pub type ExportResult<T> = Result<T, ExportError>;
