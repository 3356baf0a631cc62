//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted email shape.
///
/// Local part starts with lowercase letters, then any mix of letters, digits,
/// `.`, `_` and `-`. The domain is dot-separated labels ending in a TLD of at
/// least two letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]+[a-zA-Z0-9._-]*@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use contact_book::domain::Email;
///
/// let email = Email::new("example@gmail.com").unwrap();
/// assert_eq!(email.domain(), "gmail.com");
/// assert!(Email::new("Example@gmail.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address does not match
    /// the accepted shape.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(Self::validate(email.into())?))
    }

    /// Replace the stored address. The old value is kept if the new one is invalid.
    pub fn set(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = Self::validate(email.into())?;
        Ok(())
    }

    fn validate(email: String) -> Result<String, ValidationError> {
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        Ok(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
