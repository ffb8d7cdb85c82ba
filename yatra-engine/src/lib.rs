pub mod auth;
pub mod booking;
pub mod directory;

pub use auth::{AuthService, OtpChallenge};
pub use booking::BookingService;
pub use directory::{BusDirectory, SimulatedDirectory};

use yatra_core::repository::RepositoryError;
use yatra_core::{City, CoreError, Route};

/// Errors surfaced to the caller. All of these are recoverable: the caller
/// reports them and carries on, nothing here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Store failure: {0}")]
    Store(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<RepositoryError> for EngineError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(msg) => EngineError::Conflict(msg),
            RepositoryError::Backend(msg) => EngineError::Store(msg),
        }
    }
}

impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => EngineError::Validation(msg),
            CoreError::InternalError(msg) => EngineError::Store(msg),
        }
    }
}

/// Routes pinned to the dashboard when the user has no history yet.
pub fn default_favourite_routes() -> Vec<Route> {
    vec![
        Route::new(City::Mumbai, City::Pune),
        Route::new(City::Delhi, City::Jaipur),
    ]
}
