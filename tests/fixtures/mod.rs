//! Test fixtures and sample data.
//!
//! Birthdays are validated against a fixed date so results do not depend on
//! the day the tests run.

use chrono::NaiveDate;
use contact_book::domain::{Birthday, Email, Phone};
use contact_book::{AddressBook, Record};

/// Fixed "today" used to validate fixture birthdays.
#[allow(dead_code)]
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Create a sample record with optional phone, email and birthday.
#[allow(dead_code)]
pub fn sample_record(
    name: &str,
    phone: Option<&str>,
    email: Option<&str>,
    birthday: Option<&str>,
) -> Record {
    let mut record = Record::new(name);
    if let Some(phone) = phone {
        record.add_phone(Phone::new(phone).unwrap());
    }
    if let Some(email) = email {
        record.add_email(Email::new(email).unwrap());
    }
    if let Some(birthday) = birthday {
        record.set_birthday(Birthday::new_as_of(birthday, as_of()).unwrap());
    }
    record
}

/// A small book with Bill, Phil and Anna.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "Bill",
        Some("1234567890"),
        Some("example@gmail.com"),
        Some("1986-04-27"),
    ));
    book.add_record(sample_record(
        "Phil",
        Some("0501112233"),
        Some("phil@example.com"),
        None,
    ));
    book.add_record(sample_record("Anna", None, Some("anna@work.org"), Some("2000-02-29")));
    book
}

/// A book of `count` records named "Contact 1", "Contact 2", ...
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    (1..=count)
        .map(|i| {
            let phone = format!("{:03}", i);
            sample_record(&format!("Contact {}", i), Some(&phone), None, None)
        })
        .collect()
}
