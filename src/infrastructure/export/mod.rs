// src/infrastructure/export/mod.rs
// CSV export sink implementation

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::service::ExportService;
use crate::config::WriteMode;
use crate::domain::errors::{ExportError, ExportResult};
use crate::domain::model::{TabularReport, CSV_DELIMITER};

/// Writes a `TabularReport` as a `;`-delimited text file.
///
/// The write mode decides what happens when the derived file name already
/// exists: `Overwrite` replaces the previous report body, `Append` adds the
/// new lines after it. Both are deliberate, configured behaviors.
pub struct CsvExportService {
    write_mode: WriteMode,
}

impl CsvExportService {
    pub fn new(write_mode: WriteMode) -> Self {
        Self { write_mode }
    }

    fn open_target(&self, path: &Path) -> io::Result<File> {
        match self.write_mode {
            WriteMode::Overwrite => File::create(path),
            WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
        }
    }
}

#[async_trait]
impl ExportService for CsvExportService {
    async fn export_to_csv(
        &self,
        report: &TabularReport,
        export_dir: &Path,
        include_headers: bool,
    ) -> ExportResult<PathBuf> {
        if report.file_name.trim().is_empty() {
            return Err(ExportError::MissingFileName);
        }
        if export_dir.as_os_str().is_empty() {
            return Err(ExportError::MissingPath);
        }
        if include_headers {
            if report.headers.is_empty() {
                return Err(ExportError::MissingHeaders);
            }
            if report
                .rows
                .iter()
                .any(|row| row.len() != report.headers.len())
            {
                return Err(ExportError::HeaderMismatch);
            }
        }

        if let Err(e) = std::fs::create_dir_all(export_dir) {
            log::error!(
                "Could not create export directory {}: {e}",
                export_dir.display()
            );
            return Err(ExportError::DirectoryCreate(e));
        }

        let full_path = export_dir.join(&report.file_name);
        self.write_lines(report, &full_path, include_headers)
            .map_err(|e| {
                log::error!(
                    "An unexpected error occurred while saving {}: {e}",
                    full_path.display()
                );
                ExportError::Write(e)
            })?;

        Ok(full_path)
    }
}

impl CsvExportService {
    fn write_lines(
        &self,
        report: &TabularReport,
        path: &Path,
        include_headers: bool,
    ) -> io::Result<()> {
        let file = self.open_target(path)?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(CSV_DELIMITER)
            .from_writer(file);

        if include_headers {
            writer.write_record(&report.headers).map_err(csv_to_io)?;
        }
        for row in &report.rows {
            writer.write_record(row).map_err(csv_to_io)?;
        }
        writer.flush()
    }
}

fn csv_to_io(e: csv::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}
