use yatra_core::repository::BookingRepository;
use yatra_core::{Booking, BookingId, BookingRequest, Phone, Session};

use crate::EngineResult;

/// Booking management over an explicit session context.
pub struct BookingService<'a, R> {
    store: &'a R,
}

impl<'a, R: BookingRepository> BookingService<'a, R> {
    pub fn new(store: &'a R) -> Self {
        Self { store }
    }

    /// Create a booking for the logged-in user.
    ///
    /// Ids are creation-timestamp millis, so two bookings landing in the
    /// same millisecond collide. That case is logged and stored as-is;
    /// nothing is deduplicated.
    pub fn book(&self, session: &Session, request: BookingRequest) -> EngineResult<Booking> {
        let existing = self.store.list_bookings(&session.phone)?;
        let booking = request.into_booking();

        if existing.iter().any(|b| b.id == booking.id) {
            tracing::warn!(
                phone = %session.phone,
                id = booking.id,
                "booking id collides with an existing booking"
            );
        }

        self.store.add_booking(&session.phone, booking.clone())?;
        tracing::info!(
            phone = %session.phone,
            id = booking.id,
            from = %booking.from,
            to = %booking.to,
            "booking created"
        );
        Ok(booking)
    }

    /// The logged-in user's bookings.
    pub fn bookings_for(&self, session: &Session) -> EngineResult<Vec<Booking>> {
        Ok(self.store.list_bookings(&session.phone)?)
    }

    /// Bookings for an arbitrary phone, given as raw form input. The
    /// check-booking flow allows this without a login, matching the system
    /// being replaced; malformed phones fail validation here.
    pub fn lookup(&self, phone: &str) -> EngineResult<Vec<Booking>> {
        let phone: Phone = phone.parse()?;
        Ok(self.store.list_bookings(&phone)?)
    }

    /// Cancel a booking by id. Idempotent: cancelling an already-cancelled
    /// id changes nothing.
    pub fn cancel(&self, session: &Session, id: BookingId) -> EngineResult<()> {
        self.store.remove_booking(&session.phone, id)?;
        tracing::info!(phone = %session.phone, id, "booking cancelled");
        Ok(())
    }
}
