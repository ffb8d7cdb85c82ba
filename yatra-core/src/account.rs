use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Credential, Phone};

/// A registered user's stored profile and credential.
///
/// Invariant: at most one Account exists per phone number; the store
/// enforces this on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub phone: Phone,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub credential: Credential,
}

impl Account {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registration input, before the credential is encoded.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub phone: Phone,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub password: String,
}

impl NewAccount {
    pub fn into_account(self) -> Account {
        Account {
            phone: self.phone,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            credential: Credential::encode(&self.password),
        }
    }
}

/// The authenticated user's context: a derived copy of the account's public
/// fields plus a token for this login. Created on login or OTP verification,
/// destroyed on logout. At most one is persisted per profile at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub phone: Phone,
    pub display_name: String,
    pub address: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn open(account: &Account) -> Self {
        Session {
            token: Uuid::new_v4(),
            phone: account.phone.clone(),
            display_name: account.display_name(),
            address: account.address.clone(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        NewAccount {
            phone: Phone::new("9876543210").unwrap(),
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            address: "12 MG Road, Pune".to_string(),
            password: "secret".to_string(),
        }
        .into_account()
    }

    #[test]
    fn test_registration_encodes_credential() {
        let account = sample_account();
        assert!(account.credential.matches("secret"));
        assert_ne!(account.credential.as_encoded(), "secret");
    }

    #[test]
    fn test_session_copies_public_fields() {
        let account = sample_account();
        let session = Session::open(&account);
        assert_eq!(session.phone, account.phone);
        assert_eq!(session.display_name, "Asha Verma");
        assert_eq!(session.address, account.address);
    }

    #[test]
    fn test_sessions_get_distinct_tokens() {
        let account = sample_account();
        let a = Session::open(&account);
        let b = Session::open(&account);
        assert_ne!(a.token, b.token);
    }
}
