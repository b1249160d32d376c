// src/domain/service/mod.rs
// Pure report pipeline stages

pub mod aggregation;
pub mod buckets;
pub mod format;

pub use aggregation::{aggregate_volumes, assemble_report};
pub use buckets::generate_buckets;
pub use format::format_report;
