//! Address book persistence.
//!
//! A book is saved and restored as a whole through a [`BookStore`]; the
//! file-backed store writes the versioned JSON [`BookDocument`].

pub mod document;
pub mod file_store;
pub mod traits;

pub use document::{BookDocument, FORMAT_VERSION};
pub use file_store::FileStore;
pub use traits::BookStore;
