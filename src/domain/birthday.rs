//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire and input format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A calendar birthday that is never later than the day it was accepted.
///
/// The future check uses the local date at the moment of validation, so a value
/// accepted once stays valid; only new assignments are checked again.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1986-04-27").unwrap();
/// assert_eq!(birthday.to_string(), "1986-04-27");
/// assert!(Birthday::new("27.04.1986").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a `YYYY-MM-DD` birthday against today's local date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not a valid
    /// date and `ValidationError::FutureBirthday` if it lies after today.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        Self::new_as_of(value, today())
    }

    /// Same as [`Birthday::new`], with the current date supplied by the caller.
    pub fn new_as_of(value: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;
        Self::from_date_as_of(date, today)
    }

    /// Validate an already-parsed date against today's local date.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::from_date_as_of(date, today())
    }

    fn from_date_as_of(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::FutureBirthday(date));
        }
        Ok(Self(date))
    }

    /// Replace the stored date. The old value is kept if the new one is invalid.
    pub fn set(&mut self, value: &str) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    /// The stored date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Date of this birthday in `year`.
    ///
    /// Feb 29 falls on Mar 1 in years without a leap day.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// First occurrence of this birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }

    /// Whole days from `today` until the next occurrence; 0 on the birthday itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

/// Current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// Serde support - serialize as `YYYY-MM-DD`
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(BIRTHDAY_FORMAT))
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
