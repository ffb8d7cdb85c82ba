use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use yatra_core::{BusOption, TripQuery};
use yatra_store::app_config::SearchConfig;

use crate::EngineResult;

/// A source of bus schedules for a route and date.
#[async_trait]
pub trait BusDirectory: Send + Sync {
    async fn search(&self, query: &TripQuery) -> EngineResult<Vec<BusOption>>;
}

/// Canned directory results behind an artificial delay, standing in for a
/// live operator API. Returns a fixed three-bus schedule, or nothing at all
/// with a configurable probability.
pub struct SimulatedDirectory {
    delay: Duration,
    no_service_probability: f64,
}

impl SimulatedDirectory {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            no_service_probability: 0.2,
        }
    }

    pub fn with_settings(delay: Duration, no_service_probability: f64) -> Self {
        Self {
            delay,
            // gen_bool panics outside [0, 1]
            no_service_probability: no_service_probability.clamp(0.0, 1.0),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_settings(
            Duration::from_millis(config.delay_ms),
            config.no_service_probability,
        )
    }

    fn schedule() -> Vec<BusOption> {
        vec![
            BusOption {
                name: "Express Bus 1".to_string(),
                departure: "08:00 AM".to_string(),
                arrival: "12:00 PM".to_string(),
                duration: "4 hours".to_string(),
                price: 500,
                available_seats: 30,
            },
            BusOption {
                name: "Luxury Bus 2".to_string(),
                departure: "10:00 AM".to_string(),
                arrival: "02:30 PM".to_string(),
                duration: "4 hours 30 minutes".to_string(),
                price: 750,
                available_seats: 25,
            },
            BusOption {
                name: "Night Bus 3".to_string(),
                departure: "11:00 PM".to_string(),
                arrival: "05:00 AM".to_string(),
                duration: "6 hours".to_string(),
                price: 600,
                available_seats: 35,
            },
        ]
    }
}

impl Default for SimulatedDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BusDirectory for SimulatedDirectory {
    async fn search(&self, query: &TripQuery) -> EngineResult<Vec<BusOption>> {
        tokio::time::sleep(self.delay).await;

        let no_service = rand::thread_rng().gen_bool(self.no_service_probability);
        if no_service {
            tracing::info!(from = %query.from, to = %query.to, date = %query.date, "no service on route");
            return Ok(Vec::new());
        }

        let buses = Self::schedule();
        tracing::info!(
            from = %query.from,
            to = %query.to,
            date = %query.date,
            results = buses.len(),
            "directory search complete"
        );
        Ok(buses)
    }
}
