//! Substring search across record fields.
//!
//! Names and emails match case-insensitively; phones match on the digits as
//! stored.

pub mod record_search;

pub use record_search::{RecordQuery, SearchMatch, SearchableField};
