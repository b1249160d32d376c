// src/domain/service/format.rs
// Tabular rendering of an assembled report

use chrono_tz::Tz;

use crate::domain::errors::{ReportError, ReportResult};
use crate::domain::model::{
    AggregatedReport, TabularReport, DATA_NOT_AVAILABLE, FILE_EXTENSION, HEADER_LOCAL_TIME,
    HEADER_VOLUME,
};

/// Renders an assembled report into a two-column string grid with headers
/// and a derived file name.
///
/// A report with no periods is rejected: an export file with zero data rows
/// signals a broken assembly upstream, not a valid report. Volumes are
/// rendered with the plain `f64` display (locale-independent, no thousands
/// separators, no forced decimal places); buckets without a volume render
/// the `Data Not Available` sentinel.
pub fn format_report(report: &AggregatedReport, timezone: Tz) -> ReportResult<TabularReport> {
    if report.periods.is_empty() {
        return Err(ReportError::MissingAggregationData);
    }

    let file_name = format!(
        "PowerPosition_{}.{}",
        report.timestamp.format("%Y%m%d_%H%M"),
        FILE_EXTENSION
    );

    let rows = report
        .periods
        .iter()
        .map(|period| {
            let local_time = period
                .start_utc
                .with_timezone(&timezone)
                .format("%H:%M")
                .to_string();
            let volume = match period.volume {
                Some(v) => v.to_string(),
                None => DATA_NOT_AVAILABLE.to_string(),
            };
            vec![local_time, volume]
        })
        .collect();

    Ok(TabularReport {
        file_name,
        headers: vec![HEADER_LOCAL_TIME.to_string(), HEADER_VOLUME.to_string()],
        rows,
    })
}
