// src/application/usecase/report_usecase.rs
// Intra-day report generation use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::application::service::ExportService;
use crate::domain::errors::{AppResult, ReportError};
use crate::domain::repository::TradeRepository;
use crate::domain::service::{aggregate_volumes, assemble_report, format_report, generate_buckets};

/// Runs the whole report pipeline for one tick: fetch trades, aggregate
/// volumes per settlement period, merge into the gap-filled bucket series,
/// render, and hand off to the export sink.
///
/// Each stage returns a result rather than panicking; a source failure is
/// logged here with its cause and translated into the fixed
/// "Unable to get trade data" report failure.
pub struct IntraDayReportHandler {
    trade_repository: Arc<dyn TradeRepository + Send + Sync>,
    export_service: Arc<dyn ExportService + Send + Sync>,
    timezone: Tz,
    include_headers: bool,
}

impl IntraDayReportHandler {
    pub fn new(
        trade_repository: Arc<dyn TradeRepository + Send + Sync>,
        export_service: Arc<dyn ExportService + Send + Sync>,
        timezone: Tz,
        include_headers: bool,
    ) -> Self {
        Self {
            trade_repository,
            export_service,
            timezone,
            include_headers,
        }
    }

    /// Generates and exports the report for the settlement day containing
    /// `reference`, returning the full path of the written file.
    pub async fn generate_report(
        &self,
        reference: NaiveDateTime,
        export_dir: &Path,
    ) -> AppResult<PathBuf> {
        let date = reference.date();
        log::info!("Received request to generate intra-day report with date {reference}");

        let trades = match self.trade_repository.get_trades(date).await {
            Ok(trades) => trades,
            Err(e) => {
                log::error!("Error occurred while trying to get trade data: {e}");
                return Err(ReportError::SourceUnavailable.into());
            }
        };
        log::info!("Fetched {} trades for {date}", trades.len());

        let volume_by_period = aggregate_volumes(&trades);
        let buckets = generate_buckets(date, self.timezone)?;
        let report = assemble_report(&buckets, &volume_by_period, reference)?;
        let tabular = format_report(&report, self.timezone)?;

        let full_path = self
            .export_service
            .export_to_csv(&tabular, export_dir, self.include_headers)
            .await?;

        log::info!(
            "Report file with name {} successfully created in location {}",
            tabular.file_name,
            export_dir.display()
        );
        Ok(full_path)
    }
}
