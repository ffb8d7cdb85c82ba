use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::City;

/// Directory search input: one leg, one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripQuery {
    pub from: City,
    pub to: City,
    pub date: NaiveDate,
}

/// One bus in a directory search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusOption {
    pub name: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    /// Fare in whole rupees.
    pub price: i32,
    pub available_seats: u32,
}

/// An origin/destination pair, used for favourite-route listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub from: City,
    pub to: City,
}

impl Route {
    pub fn new(from: City, to: City) -> Self {
        Route { from, to }
    }
}
