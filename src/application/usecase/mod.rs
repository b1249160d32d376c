// src/application/usecase/mod.rs
pub mod report_usecase;

// Re-export public API
pub use report_usecase::IntraDayReportHandler;
