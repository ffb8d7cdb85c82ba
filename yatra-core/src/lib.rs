pub mod account;
pub mod booking;
pub mod city;
pub mod credential;
pub mod phone;
pub mod repository;
pub mod trip;

pub use account::{Account, NewAccount, Session};
pub use booking::{Booking, BookingId, BookingRequest};
pub use city::City;
pub use credential::Credential;
pub use phone::Phone;
pub use trip::{BusOption, Route, TripQuery};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
