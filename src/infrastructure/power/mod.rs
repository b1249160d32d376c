// src/infrastructure/power/mod.rs
// Simulated trade-data source

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use rand::Rng;

use crate::domain::errors::TradeSourceError;
use crate::domain::model::{PowerTrade, TradePeriod};
use crate::domain::repository::TradeRepository;
use crate::domain::service::generate_buckets;

/// Stand-in for the vendor power trading platform. Returns a handful of
/// randomized trades per request, each covering every settlement period of
/// the requested date, the way the real service reports positions.
pub struct SimulatedPowerService {
    timezone: Tz,
}

impl SimulatedPowerService {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

#[async_trait]
impl TradeRepository for SimulatedPowerService {
    async fn get_trades(&self, date: NaiveDate) -> Result<Vec<PowerTrade>, TradeSourceError> {
        let period_count = generate_buckets(date, self.timezone)
            .map_err(|e| TradeSourceError::Unexpected(e.to_string()))?
            .len() as u32;

        let mut rng = rand::thread_rng();
        let trade_count = rng.gen_range(2..=5);

        let trades = (0..trade_count)
            .map(|_| PowerTrade {
                periods: (1..=period_count)
                    .map(|period| TradePeriod {
                        period,
                        volume: rng.gen_range(-500.0..1500.0),
                    })
                    .collect(),
            })
            .collect();

        Ok(trades)
    }
}
