// src/application/mod.rs
pub mod service;
pub mod usecase;

pub use service::{Clock, ExportService};
pub use usecase::IntraDayReportHandler;
