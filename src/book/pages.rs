//! Paged iteration over an address book.

use crate::models::Record;
use indexmap::map::Values;
use std::iter::FusedIterator;

/// Lazy iterator of page strings.
///
/// Each page joins up to `page_size` records' display lines with `'\n'`, in book
/// order. The last page may be shorter; an empty book yields no pages. Once
/// exhausted it stays exhausted, and pages already yielded cannot be replayed:
///
/// ```compile_fail
/// let book = contact_book::AddressBook::new();
/// let pages = book.iterate(2).unwrap();
/// let _replay = pages.clone();
/// ```
#[derive(Debug)]
pub struct Pages<'a> {
    records: Values<'a, String, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// `page_size` is checked to be non-zero by the caller.
    pub(crate) fn new(records: Values<'a, String, Record>, page_size: usize) -> Self {
        Self { records, page_size }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let lines: Vec<String> = self
            .records
            .by_ref()
            .take(self.page_size)
            .map(ToString::to_string)
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
