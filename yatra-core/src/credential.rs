use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// A stored login credential.
///
/// The encoding is plain base64 and is fully reversible: anyone with read
/// access to the store can recover the password. This mirrors the system
/// being replaced and is a documented limitation, not a security boundary.
/// Do not reuse this type anywhere confidentiality matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Encode a plaintext password into its stored form.
    pub fn encode(plain: &str) -> Self {
        Credential(STANDARD.encode(plain.as_bytes()))
    }

    /// Exact match against a plaintext candidate.
    pub fn matches(&self, plain: &str) -> bool {
        self.0 == STANDARD.encode(plain.as_bytes())
    }

    /// Decode back to the plaintext. Fails only on hand-edited store data.
    pub fn reveal(&self) -> CoreResult<String> {
        let bytes = STANDARD
            .decode(&self.0)
            .map_err(|e| CoreError::InternalError(format!("credential decode failed: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| CoreError::InternalError(format!("credential not utf-8: {}", e)))
    }

    pub fn as_encoded(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_same_plaintext() {
        let cred = Credential::encode("hunter2");
        assert!(cred.matches("hunter2"));
        assert!(!cred.matches("hunter3"));
        assert!(!cred.matches(""));
    }

    #[test]
    fn test_reveal_round_trip() {
        let cred = Credential::encode("pass with spaces");
        assert_eq!(cred.reveal().unwrap(), "pass with spaces");
    }

    #[test]
    fn test_encoding_is_not_plaintext() {
        let cred = Credential::encode("secret");
        assert_ne!(cred.as_encoded(), "secret");
    }
}
