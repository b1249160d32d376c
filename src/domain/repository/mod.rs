// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::TradeSourceError;
use crate::domain::model::PowerTrade;

/// Port for the external trade-data source. Given a settlement date it
/// returns all trades known for that date, each exposing zero or more
/// (period, volume) pairs.
#[async_trait]
pub trait TradeRepository {
    async fn get_trades(&self, date: NaiveDate) -> Result<Vec<PowerTrade>, TradeSourceError>;
}
