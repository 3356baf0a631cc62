//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is empty or contains a non-digit.
    InvalidPhone(String),

    /// The provided email address does not match the accepted shape.
    InvalidEmail(String),

    /// The provided birthday is not a `YYYY-MM-DD` date.
    InvalidBirthday(String),

    /// The provided birthday lies after the current date.
    FutureBirthday(NaiveDate),

    /// A page size of zero was requested.
    InvalidPageSize(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (digits only, not empty): {:?}", phone)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthday(value) => {
                write!(f, "Birthday must be in format 'YYYY-MM-DD', got: {}", value)
            }
            Self::FutureBirthday(date) => {
                write!(f, "Birthday must not be in the future: {}", date)
            }
            Self::InvalidPageSize(size) => {
                write!(f, "Page size must be a positive integer, got: {}", size)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
