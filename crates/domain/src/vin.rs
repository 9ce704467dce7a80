//! Vehicle identification number
//!
//! A `Vin` is normalized on construction:
//! - Leading/trailing whitespace is trimmed
//! - Letters are uppercased
//! - Exactly 17 UTF-16 code units must remain, the way a browser form counts
//!
//! No check-digit or alphabet validation is performed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Required length of a normalized VIN, in UTF-16 code units.
pub const VIN_LENGTH: usize = 17;

/// A normalized 17-character VIN
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Normalize and validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed input is not exactly
    /// 17 UTF-16 code units long.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = input.as_ref().trim().to_uppercase();
        let len = normalized.encode_utf16().count();
        if len != VIN_LENGTH {
            return Err(DomainError::validation(format!(
                "VIN must be {} characters, got {}",
                VIN_LENGTH, len
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the VIN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Vin {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> String {
        vin.0
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
