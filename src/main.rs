// src/main.rs
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal::ctrl_c;

use power_position::application::usecase::IntraDayReportHandler;
use power_position::config::Config;
use power_position::domain::errors::AppResult;
use power_position::infrastructure::{CsvExportService, SimulatedPowerService, SystemClock};
use power_position::worker::ReportWorker;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting power_position v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Report export path is {}", config.export.report_path);
    log::info!(
        "Report export interval in minutes is {}",
        config.export.interval_minutes
    );
    log::info!("Governing timezone is {}", config.export.timezone);

    let timezone = config.timezone()?;

    // Wire the pipeline
    let trade_repository = Arc::new(SimulatedPowerService::new(timezone));
    let export_service = Arc::new(CsvExportService::new(config.export.write_mode));
    let handler = Arc::new(IntraDayReportHandler::new(
        trade_repository,
        export_service,
        timezone,
        config.export.include_headers,
    ));

    let worker = ReportWorker::new(
        handler,
        Arc::new(SystemClock::new(timezone)),
        PathBuf::from(&config.export.report_path),
        Duration::from_secs(config.export.interval_minutes * 60),
    );

    tokio::spawn(async move {
        worker.run().await;
    });

    // Wait for shutdown signal
    log::info!("Report service is running. Press Ctrl+C to stop.");
    ctrl_c().await.expect("Failed to listen for control-c event");

    log::info!("Shutting down. Goodbye!");
    Ok(())
}
