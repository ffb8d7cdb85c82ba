use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use yatra_core::repository::{AccountRepository, SessionRepository};
use yatra_core::{Credential, NewAccount, Phone, Session};

use crate::{EngineError, EngineResult};

const DEFAULT_OTP_TTL_SECONDS: i64 = 300;

/// A one-time code issued for a phone number.
///
/// There is no delivery channel here: the caller shows the code to the user
/// (the system this replaces printed it to the console), so holding a
/// challenge is not proof of anything. That is the known shape of this demo
/// auth, not an oversight.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    phone: Phone,
    code: String,
    issued_at: DateTime<Utc>,
}

impl OtpChallenge {
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Registration, login and session lifecycle.
///
/// The session is an explicit context object: `login`/`verify_otp` create
/// it, operations that need the current user take it by reference, and
/// `logout` consumes it.
pub struct AuthService<'a, R> {
    store: &'a R,
    otp_ttl: Duration,
}

impl<'a, R> AuthService<'a, R>
where
    R: AccountRepository + SessionRepository,
{
    pub fn new(store: &'a R) -> Self {
        Self {
            store,
            otp_ttl: Duration::seconds(DEFAULT_OTP_TTL_SECONDS),
        }
    }

    pub fn with_otp_ttl(store: &'a R, otp_ttl_seconds: u64) -> Self {
        Self {
            store,
            otp_ttl: Duration::seconds(otp_ttl_seconds as i64),
        }
    }

    /// Register a new account. The phone is validated by construction; the
    /// password is encoded into its stored form here.
    pub fn register(&self, new_account: NewAccount) -> EngineResult<()> {
        let account = new_account.into_account();
        let phone = account.phone.clone();
        self.store.save_account(account)?;
        tracing::info!(phone = %phone, "account registered");
        Ok(())
    }

    /// Password login. Opens and persists a session on success.
    ///
    /// A wrong phone and a wrong password produce the same error, so the
    /// response does not leak which half was wrong.
    pub fn login(&self, phone: &Phone, password: &str) -> EngineResult<Session> {
        let credential = Credential::encode(password);
        let account = self
            .store
            .find_account(phone, &credential)?
            .ok_or_else(|| EngineError::NotFound("invalid phone number or password".to_string()))?;

        let session = Session::open(&account);
        self.store.save_session(&session)?;
        tracing::info!(phone = %session.phone, "login succeeded");
        Ok(session)
    }

    /// Issue a six-digit OTP for the given phone. The account is not checked
    /// yet; that happens at verification, matching the original flow.
    pub fn begin_otp(&self, phone: &Phone) -> OtpChallenge {
        let code = rand::thread_rng().gen_range(100_000..1_000_000).to_string();
        tracing::debug!(phone = %phone, code, "otp issued");
        OtpChallenge {
            phone: phone.clone(),
            code,
            issued_at: Utc::now(),
        }
    }

    /// Check an entered code against a challenge and open a session for the
    /// matching account.
    pub fn verify_otp(&self, challenge: &OtpChallenge, entered: &str) -> EngineResult<Session> {
        if Utc::now() - challenge.issued_at > self.otp_ttl {
            return Err(EngineError::Validation("OTP has expired".to_string()));
        }
        if challenge.code != entered {
            return Err(EngineError::Validation("invalid OTP".to_string()));
        }

        let account = self
            .store
            .find_account_by_phone(&challenge.phone)?
            .ok_or_else(|| {
                EngineError::NotFound("no account for this phone; register first".to_string())
            })?;

        let session = Session::open(&account);
        self.store.save_session(&session)?;
        tracing::info!(phone = %session.phone, "otp login succeeded");
        Ok(session)
    }

    /// Reload the persisted session, if any, at startup.
    pub fn restore_session(&self) -> EngineResult<Option<Session>> {
        Ok(self.store.load_session()?)
    }

    /// Teardown point for the session context. Consumes the session so a
    /// logged-out context cannot be reused.
    pub fn logout(&self, session: Session) -> EngineResult<()> {
        self.store.clear_session()?;
        tracing::info!(phone = %session.phone, "logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatra_store::{MemoryStorage, RecordStore};

    fn store() -> RecordStore<MemoryStorage> {
        RecordStore::new(MemoryStorage::new())
    }

    fn new_account(phone: &str) -> NewAccount {
        NewAccount {
            phone: Phone::new(phone).unwrap(),
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            address: "12 MG Road, Pune".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_register_then_login() {
        let store = store();
        let auth = AuthService::new(&store);
        let phone = Phone::new("9876543210").unwrap();

        auth.register(new_account("9876543210")).unwrap();

        let session = auth.login(&phone, "secret").unwrap();
        assert_eq!(session.phone, phone);
        assert_eq!(session.display_name, "Asha Verma");

        // Session was persisted
        let restored = auth.restore_session().unwrap().unwrap();
        assert_eq!(restored.token, session.token);
    }

    #[test]
    fn test_wrong_credential_is_not_found() {
        let store = store();
        let auth = AuthService::new(&store);
        auth.register(new_account("9876543210")).unwrap();

        let err = auth
            .login(&Phone::new("9876543210").unwrap(), "wrong")
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));

        // Unknown phone reads the same as a wrong password
        let err = auth
            .login(&Phone::new("1112223334").unwrap(), "secret")
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        let store = store();
        let auth = AuthService::new(&store);
        auth.register(new_account("9876543210")).unwrap();

        let err = auth.register(new_account("9876543210")).unwrap_err();
        assert!(matches!(err, EngineError::Conflict(_)));
    }

    #[test]
    fn test_otp_flow() {
        let store = store();
        let auth = AuthService::new(&store);
        let phone = Phone::new("9876543210").unwrap();
        auth.register(new_account("9876543210")).unwrap();

        let challenge = auth.begin_otp(&phone);
        assert_eq!(challenge.code().len(), 6);
        assert_eq!(challenge.phone(), &phone);
        assert!(challenge.issued_at() <= Utc::now());

        let code = challenge.code().to_string();
        let session = auth.verify_otp(&challenge, &code).unwrap();
        assert_eq!(session.phone, phone);
    }

    #[test]
    fn test_otp_wrong_code_rejected() {
        let store = store();
        let auth = AuthService::new(&store);
        auth.register(new_account("9876543210")).unwrap();

        let challenge = auth.begin_otp(&Phone::new("9876543210").unwrap());
        // Six digits stay within 100000..=999999, so this can never match
        let err = auth.verify_otp(&challenge, "0").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_otp_for_unregistered_phone_is_not_found() {
        let store = store();
        let auth = AuthService::new(&store);

        let challenge = auth.begin_otp(&Phone::new("9876543210").unwrap());
        let code = challenge.code().to_string();
        let err = auth.verify_otp(&challenge, &code).unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn test_otp_expiry() {
        let store = store();
        let auth = AuthService::with_otp_ttl(&store, 0);
        auth.register(new_account("9876543210")).unwrap();

        let challenge = auth.begin_otp(&Phone::new("9876543210").unwrap());
        std::thread::sleep(std::time::Duration::from_millis(5));

        let code = challenge.code().to_string();
        let err = auth.verify_otp(&challenge, &code).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_logout_clears_session() {
        let store = store();
        let auth = AuthService::new(&store);
        let phone = Phone::new("9876543210").unwrap();
        auth.register(new_account("9876543210")).unwrap();

        let session = auth.login(&phone, "secret").unwrap();
        auth.logout(session).unwrap();

        assert!(auth.restore_session().unwrap().is_none());
    }
}
