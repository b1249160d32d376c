// src/domain/mod.rs
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, ExportError, ExportResult, ReportError, ReportResult};
pub use model::{
    AggregatedPeriod, AggregatedReport, PowerTrade, TabularReport, TimeBucket, TradePeriod,
};
