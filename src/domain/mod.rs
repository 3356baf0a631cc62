//! Domain value objects and types.
//!
//! Each field of a contact record is a type-safe wrapper that validates on
//! construction and on every `set`, so an invalid value is never stored.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
