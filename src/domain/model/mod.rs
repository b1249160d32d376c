// src/domain/model/mod.rs
// Core domain models for the intra-day power position report

use chrono::{DateTime, NaiveDateTime, Utc};

/// Value for the local-time column header.
pub const HEADER_LOCAL_TIME: &str = "Local Time";

/// Value for the volume column header.
pub const HEADER_VOLUME: &str = "Volume";

/// Delimiter used for CSV export.
pub const CSV_DELIMITER: u8 = b';';

/// Extension of the exported report file.
pub const FILE_EXTENSION: &str = "csv";

/// Cell text for a bucket with no matching trade volume. Distinct from "0",
/// which is a valid observed volume.
pub const DATA_NOT_AVAILABLE: &str = "Data Not Available";

// One (period, volume) entry of a power trade. The period is a 1-based
// settlement-period index assigned by the data source; it only becomes a
// calendar time once mapped through the bucket generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TradePeriod {
    pub period: u32,
    pub volume: f64,
}

// A single trade as reported by the external trade-data source.
#[derive(Debug, Clone, Default)]
pub struct PowerTrade {
    pub periods: Vec<TradePeriod>,
}

/// One hour-long local-time slot of the settlement day, anchored to the UTC
/// instant at which it starts. Indices are 1-based and contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBucket {
    pub index: u32,
    pub start_utc: DateTime<Utc>,
}

/// One time bucket merged with its aggregated volume. `volume` is `None`
/// when no trade record mapped to the bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedPeriod {
    pub start_utc: DateTime<Utc>,
    pub volume: Option<f64>,
}

/// A complete, ordered intra-day report: one `AggregatedPeriod` per bucket
/// of the settlement day, stamped with the local reference time the report
/// was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedReport {
    pub timestamp: NaiveDateTime,
    pub periods: Vec<AggregatedPeriod>,
}

/// Report data rendered to string cells, ready for textual export.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularReport {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
