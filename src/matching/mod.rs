//! Fuzzy name matching for "did you mean" suggestions.
//!
//! Used when a lookup by exact name misses.

pub mod name_matcher;

pub use name_matcher::{NameMatcher, Suggestion};
