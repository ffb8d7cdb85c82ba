use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// A subscriber phone number: exactly 10 ASCII digits.
///
/// Phone numbers are the primary key for accounts and booking collections,
/// so they are validated at the boundary and carried as a newtype from then
/// on. `Debug` and `Display` mask the middle digits to keep raw numbers out
/// of log output.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(digits: &str) -> CoreResult<Self> {
        if digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Phone(digits.to_string()))
        } else {
            Err(CoreError::ValidationError(
                "phone number must be exactly 10 digits".to_string(),
            ))
        }
    }

    /// The full, unmasked number. Callers that persist or compare phones
    /// need this; anything that logs should prefer `masked`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First three and last three digits, middle replaced: `987XXXX210`.
    pub fn masked(&self) -> String {
        format!("{}XXXX{}", &self.0[..3], &self.0[7..])
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone({})", self.masked())
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl FromStr for Phone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phone::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}
