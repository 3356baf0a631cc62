//! Record model representing one contact in the address book.

use crate::domain::{birthday, Birthday, Email, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact entry: a name, ordered phones and emails, and an optional birthday.
///
/// The name is the address book key and cannot change after construction.
/// Phones and emails keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    emails: Vec<Email>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with just a name.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        }
    }

    /// Builder-style phone append.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Builder-style email append.
    pub fn with_email(mut self, email: Email) -> Self {
        self.emails.push(email);
        self
    }

    /// Builder-style birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    // ==================== Phones ====================

    pub fn add_phone(&mut self, phone: Phone) {
        tracing::debug!(record = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &Phone) -> BookResult<Phone> {
        let index = position(&self.phones, phone, "phone")?;
        tracing::debug!(record = %self.name, phone = %phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> BookResult<()> {
        let index = position(&self.phones, old, "phone")?;
        tracing::debug!(record = %self.name, old = %old, new = %new, "Editing phone");
        self.phones[index] = new;
        Ok(())
    }

    // ==================== Emails ====================

    pub fn add_email(&mut self, email: Email) {
        tracing::debug!(record = %self.name, email = %email, "Adding email");
        self.emails.push(email);
    }

    /// Remove the first email equal to `email`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the record has no such email.
    pub fn remove_email(&mut self, email: &Email) -> BookResult<Email> {
        let index = position(&self.emails, email, "email")?;
        tracing::debug!(record = %self.name, email = %email, "Removing email");
        Ok(self.emails.remove(index))
    }

    /// Replace the first email equal to `old` with `new`, keeping its position.
    pub fn edit_email(&mut self, old: &Email, new: Email) -> BookResult<()> {
        let index = position(&self.emails, old, "email")?;
        tracing::debug!(record = %self.name, old = %old, new = %new, "Editing email");
        self.emails[index] = new;
        Ok(())
    }

    // ==================== Birthday ====================

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Days until the next birthday, counted from today's local date.
    ///
    /// Returns `None` when no birthday is set and `Some(0)` on the birthday.
    /// A Feb 29 birthday is celebrated on Mar 1 in common years.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(birthday::today())
    }

    /// Same as [`Record::days_to_birthday`], counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}

fn position<T: PartialEq + fmt::Display>(
    items: &[T],
    target: &T,
    kind: &'static str,
) -> BookResult<usize> {
    items
        .iter()
        .position(|item| item == target)
        .ok_or_else(|| BookError::not_found(kind, target.to_string()))
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, phones: [{}], emails: [{}]",
            self.name,
            join(&self.phones),
            join(&self.emails)
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
