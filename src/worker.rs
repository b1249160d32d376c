// src/worker.rs
// Periodic report generation loop

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::application::service::Clock;
use crate::application::usecase::IntraDayReportHandler;

/// Hosts the report pipeline: generates one report immediately on start and
/// then once per configured interval.
///
/// Ticks are awaited sequentially, so at most one pipeline run is ever in
/// flight; the pipeline itself performs no locking. A failed tick is logged
/// and the next tick proceeds independently.
pub struct ReportWorker {
    handler: Arc<IntraDayReportHandler>,
    clock: Arc<dyn Clock>,
    export_dir: PathBuf,
    interval: Duration,
}

impl ReportWorker {
    pub fn new(
        handler: Arc<IntraDayReportHandler>,
        clock: Arc<dyn Clock>,
        export_dir: PathBuf,
        interval: Duration,
    ) -> Self {
        Self {
            handler,
            clock,
            export_dir,
            interval,
        }
    }

    pub async fn run(&self) {
        log::info!(
            "Report worker started, export dir {}, interval {:?}",
            self.export_dir.display(),
            self.interval
        );

        let mut ticker = interval(self.interval);
        // A long-running report must delay the next tick, never stack one
        // behind it.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    async fn tick(&self) {
        let reference = self.clock.now_local();
        log::info!("---------------------------------------------------------------");
        log::info!("Report tick triggered at {reference}");

        match self
            .handler
            .generate_report(reference, &self.export_dir)
            .await
        {
            Ok(path) => log::info!("Report written to {}", path.display()),
            Err(e) => log::error!("Report generation failed for {reference}: {e}"),
        }
        log::info!("---------------------------------------------------------------");
    }
}
