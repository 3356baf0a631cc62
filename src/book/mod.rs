//! The address book container.

pub mod address_book;
pub mod pages;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use pages::Pages;
