use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::City;

/// Creation-timestamp-derived booking identifier, unique within one phone's
/// booking set. Two bookings created in the same millisecond would collide;
/// the engine detects and logs that case rather than deduping it.
pub type BookingId = i64;

/// A reservation owned by exactly one account.
///
/// Bookings are created by a booking request and deleted by cancellation;
/// they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub from: City,
    pub to: City,
    pub date: NaiveDate,
    pub seats: u32,
}

/// Input to a booking request; the id is assigned at creation time.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub from: City,
    pub to: City,
    pub date: NaiveDate,
    pub seats: u32,
}

impl BookingRequest {
    /// Stamp the request into a Booking with a fresh timestamp id.
    pub fn into_booking(self) -> Booking {
        Booking {
            id: Utc::now().timestamp_millis(),
            from: self.from,
            to: self.to,
            date: self.date,
            seats: self.seats,
        }
    }
}
