use serde::de::DeserializeOwned;
use serde::Serialize;

use yatra_core::repository::{
    AccountRepository, BookingRepository, RepoResult, RepositoryError, SessionRepository,
};
use yatra_core::{Account, Booking, BookingId, Credential, Phone, Session};

use crate::storage::Storage;

const USERS_KEY: &str = "users";
const SESSION_KEY: &str = "current_session";

fn bookings_key(phone: &Phone) -> String {
    format!("bookings_{}", phone.as_str())
}

/// Typed record collections over an injectable [`Storage`] backend.
///
/// Every mutation is a full read-modify-write of the one affected key; there
/// are no transactions spanning keys. A value that fails to parse is treated
/// as absent (logged, never surfaced as an error), so a corrupt profile
/// degrades to an empty store instead of wedging the application.
pub struct RecordStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read and parse one key, soft-failing to `default` on missing or
    /// corrupt data.
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> RepoResult<T> {
        let Some(raw) = self
            .storage
            .get(key)
            .map_err(|e| RepositoryError::Backend(e.to_string()))?
        else {
            return Ok(T::default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt record data");
                Ok(T::default())
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> RepoResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| RepositoryError::Backend(format!("serialize '{}': {}", key, e)))?;
        self.storage
            .set(key, &raw)
            .map_err(|e| RepositoryError::Backend(e.to_string()))
    }
}

impl<S: Storage> AccountRepository for RecordStore<S> {
    fn list_accounts(&self) -> RepoResult<Vec<Account>> {
        self.read_or_default(USERS_KEY)
    }

    fn save_account(&self, account: Account) -> RepoResult<()> {
        let mut accounts: Vec<Account> = self.read_or_default(USERS_KEY)?;

        if accounts.iter().any(|a| a.phone == account.phone) {
            return Err(RepositoryError::Conflict(format!(
                "account already registered for {}",
                account.phone
            )));
        }

        tracing::debug!(phone = %account.phone, "registering account");
        accounts.push(account);
        self.write(USERS_KEY, &accounts)
    }

    fn find_account(&self, phone: &Phone, credential: &Credential) -> RepoResult<Option<Account>> {
        let accounts: Vec<Account> = self.read_or_default(USERS_KEY)?;
        Ok(accounts
            .into_iter()
            .find(|a| &a.phone == phone && &a.credential == credential))
    }

    fn find_account_by_phone(&self, phone: &Phone) -> RepoResult<Option<Account>> {
        let accounts: Vec<Account> = self.read_or_default(USERS_KEY)?;
        Ok(accounts.into_iter().find(|a| &a.phone == phone))
    }
}

impl<S: Storage> BookingRepository for RecordStore<S> {
    fn list_bookings(&self, phone: &Phone) -> RepoResult<Vec<Booking>> {
        self.read_or_default(&bookings_key(phone))
    }

    fn add_booking(&self, phone: &Phone, booking: Booking) -> RepoResult<()> {
        let key = bookings_key(phone);
        let mut bookings: Vec<Booking> = self.read_or_default(&key)?;
        bookings.push(booking);
        self.write(&key, &bookings)
    }

    fn remove_booking(&self, phone: &Phone, id: BookingId) -> RepoResult<()> {
        let key = bookings_key(phone);
        let mut bookings: Vec<Booking> = self.read_or_default(&key)?;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            // Cancelling a booking that is already gone is a no-op.
            return Ok(());
        }
        self.write(&key, &bookings)
    }
}

impl<S: Storage> SessionRepository for RecordStore<S> {
    fn save_session(&self, session: &Session) -> RepoResult<()> {
        self.write(SESSION_KEY, session)
    }

    fn load_session(&self) -> RepoResult<Option<Session>> {
        self.read_or_default(SESSION_KEY)
    }

    fn clear_session(&self) -> RepoResult<()> {
        self.storage
            .remove(SESSION_KEY)
            .map_err(|e| RepositoryError::Backend(e.to_string()))
    }
}
