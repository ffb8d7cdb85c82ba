use crate::{Account, Booking, BookingId, Credential, Phone, Session};

/// Errors a repository backend can surface. Corrupt stored data is not one
/// of them: readers treat it as absent and fall back to empty collections.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record already exists: {0}")]
    Conflict(String),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository trait for account records.
pub trait AccountRepository: Send + Sync {
    /// All registered accounts; insertion order is not significant.
    fn list_accounts(&self) -> RepoResult<Vec<Account>>;

    /// Persist a new account. Fails with `Conflict` when an account with the
    /// same phone already exists.
    fn save_account(&self, account: Account) -> RepoResult<()>;

    /// Exact match on phone and credential, as used by password login.
    fn find_account(&self, phone: &Phone, credential: &Credential) -> RepoResult<Option<Account>>;

    /// Phone-only lookup, as used by the OTP flow.
    fn find_account_by_phone(&self, phone: &Phone) -> RepoResult<Option<Account>>;
}

/// Repository trait for per-phone booking collections.
pub trait BookingRepository: Send + Sync {
    fn list_bookings(&self, phone: &Phone) -> RepoResult<Vec<Booking>>;

    /// Append to the phone's collection and persist.
    fn add_booking(&self, phone: &Phone, booking: Booking) -> RepoResult<()>;

    /// Remove the booking with the matching id; no-op when absent.
    fn remove_booking(&self, phone: &Phone, id: BookingId) -> RepoResult<()>;
}

/// Repository trait for the single persisted session.
pub trait SessionRepository: Send + Sync {
    fn save_session(&self, session: &Session) -> RepoResult<()>;

    fn load_session(&self) -> RepoResult<Option<Session>>;

    fn clear_session(&self) -> RepoResult<()>;
}
