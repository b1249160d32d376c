// src/application/service/mod.rs
// Application service interfaces

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::errors::ExportError;
use crate::domain::model::TabularReport;

/// Port for persisting a rendered report as a delimited text file.
///
/// Implementations validate the record before touching the filesystem:
/// the file name and destination path must be present, and when headers
/// are requested the header count must match the row width. On success the
/// full resolved path of the written file is returned.
#[async_trait]
pub trait ExportService {
    async fn export_to_csv(
        &self,
        report: &TabularReport,
        export_dir: &Path,
        include_headers: bool,
    ) -> Result<PathBuf, ExportError>;
}

/// Port supplying the local reference timestamp for a report run.
pub trait Clock: Send + Sync {
    fn now_local(&self) -> NaiveDateTime;
}
