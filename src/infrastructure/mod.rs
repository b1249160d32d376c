// src/infrastructure/mod.rs
pub mod clock;
pub mod export;
pub mod power;

pub use clock::SystemClock;
pub use export::CsvExportService;
pub use power::SimulatedPowerService;
