//! Contact Book - a personal contact directory.
//!
//! Records hold a name, phone numbers, email addresses and an optional birthday.
//! Every field is validated when it is set, and records live in an
//! [`AddressBook`] keyed by name with paging, search and file persistence.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, email, birthday)
//! - **models**: The contact record
//! - **book**: The address book container and its page iterator
//! - **search**: Substring search across record fields
//! - **matching**: Fuzzy name suggestions
//! - **storage**: Versioned JSON document and file-backed store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//! use contact_book::domain::{Email, Phone};
//!
//! let mut book = AddressBook::new();
//! book.add_record(
//!     Record::new("Bill")
//!         .with_phone(Phone::new("1234567890").unwrap())
//!         .with_email(Email::new("example@gmail.com").unwrap()),
//! );
//!
//! assert_eq!(book.search("BILL").len(), 1);
//! assert_eq!(book.iterate(10).unwrap().count(), 1);
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod search;
pub mod storage;

// Re-export commonly used types
pub use book::{AddressBook, Pages, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, Email, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use matching::{NameMatcher, Suggestion};
pub use models::Record;
pub use search::{RecordQuery, SearchMatch, SearchableField};
pub use storage::{BookDocument, BookStore, FileStore};
