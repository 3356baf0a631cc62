//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is one or more ASCII digits with no formatting characters.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("+1-555").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is empty or contains
    /// anything other than ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(Self::validate(phone.into())?))
    }

    /// Replace the stored number. The old value is kept if the new one is invalid.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = Self::validate(phone.into())?;
        Ok(())
    }

    fn validate(phone: String) -> Result<String, ValidationError> {
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        for digits in ["0", "1234567890", "00380501234567"] {
            let phone = Phone::new(digits).unwrap();
            assert_eq!(phone.as_str(), digits);
        }
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123-456").is_err());
        assert!(Phone::new("+14155551234").is_err());
        assert!(Phone::new("555 1234").is_err());
        assert!(Phone::new("12a4").is_err());
        // Non-ASCII digits are rejected too
        assert!(Phone::new("١٢٣").is_err());
    }

    #[test]
    fn test_phone_error_carries_value() {
        let err = Phone::new("12-34").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12-34".to_string()));
    }

    #[test]
    fn test_phone_set_revalidates() {
        let mut phone = Phone::new("111").unwrap();
        phone.set("222").unwrap();
        assert_eq!(phone.as_str(), "222");

        assert!(phone.set("not a phone").is_err());
        assert_eq!(phone.as_str(), "222");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let phone: Phone = serde_json::from_str("\"5551234\"").unwrap();
        assert_eq!(phone.as_str(), "5551234");

        let result: Result<Phone, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
