// src/infrastructure/clock/mod.rs
// Wall-clock time provider

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::application::service::Clock;

/// Supplies the current wall-clock time in the governing timezone.
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}
