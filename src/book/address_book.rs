//! AddressBook: records keyed by name, in insertion order.

use super::pages::Pages;
use crate::domain::{birthday, ValidationError};
use crate::error::{BookError, BookResult, StorageError};
use crate::matching::{NameMatcher, Suggestion};
use crate::models::Record;
use crate::search::{RecordQuery, SearchMatch};
use crate::storage::{BookDocument, BookStore, FileStore};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::path::Path;

/// A record whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    pub days: i64,
}

/// A personal contact directory.
///
/// Records are keyed by their own name. Adding a record under an existing name
/// replaces the old record but keeps its position in the book order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the book stored at `path`, or start empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Any failure other than a missing file is returned.
    pub fn open_or_default(path: impl AsRef<Path>) -> BookResult<Self> {
        let path = path.as_ref();
        let mut book = Self::new();
        match book.load(path) {
            Ok(()) => Ok(book),
            Err(BookError::Storage(StorageError::Io { source, .. }))
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::info!(path = %path.display(), "No address book yet, starting empty");
                Ok(book)
            }
            Err(e) => Err(e),
        }
    }

    // ==================== Records ====================

    /// Store `record` under its own name.
    ///
    /// Returns the record previously stored under that name, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key, record);
        tracing::debug!(
            records = self.records.len(),
            replaced = previous.is_some(),
            "Added record"
        );
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access for editing a record's phones, emails or birthday.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove and return the record named `name`; remaining records keep their order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| BookError::not_found("record", name))?;
        tracing::debug!(name, records = self.records.len(), "Deleted record");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in book order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    // ==================== Paging ====================

    /// Lazily render the book as pages of up to `page_size` records.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` if `page_size` is zero.
    pub fn iterate(&self, page_size: usize) -> Result<Pages<'_>, ValidationError> {
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize(page_size));
        }
        Ok(Pages::new(self.records.values(), page_size))
    }

    // ==================== Search ====================

    /// Records whose name or an email contains `query` ignoring case, or a
    /// phone contains it as stored. Book order is kept.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.search_matches(query)
            .into_iter()
            .map(|found| found.record)
            .collect()
    }

    /// Like [`AddressBook::search`], also reporting which field matched.
    pub fn search_matches(&self, query: &str) -> Vec<SearchMatch<'_>> {
        let matches = RecordQuery::new(query).search(self.records.values());
        tracing::debug!(query, matches = matches.len(), "Searched address book");
        matches
    }

    /// Names close to `name`, best first, for a lookup that missed.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<Suggestion<'_>> {
        NameMatcher::default().suggest(name, self.names(), limit)
    }

    // ==================== Birthdays ====================

    /// Records with a birthday in the next `within_days` days (today included),
    /// soonest first.
    pub fn upcoming_birthdays(&self, within_days: i64) -> Vec<UpcomingBirthday<'_>> {
        self.upcoming_birthdays_from(birthday::today(), within_days)
    }

    /// Same as [`AddressBook::upcoming_birthdays`], counted from `today`.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        within_days: i64,
    ) -> Vec<UpcomingBirthday<'_>> {
        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .records
            .values()
            .filter_map(|record| {
                let days = record.days_to_birthday_from(today)?;
                (days <= within_days).then_some(UpcomingBirthday { record, days })
            })
            .collect();
        upcoming.sort_by_key(|entry| entry.days);
        upcoming
    }

    // ==================== Persistence ====================

    /// Save the whole book to `path`, atomically replacing any previous file.
    pub fn save(&self, path: impl AsRef<Path>) -> BookResult<()> {
        self.save_to(&FileStore::new(path.as_ref()))
    }

    /// Replace the whole book with the one stored at `path`.
    ///
    /// On error the current contents are left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        self.load_from(&FileStore::new(path.as_ref()))
    }

    pub fn save_to(&self, store: &dyn BookStore) -> BookResult<()> {
        let document = BookDocument::new(self.records.values().cloned().collect());
        store.write(&document)?;
        tracing::info!(records = self.records.len(), "Saved address book");
        Ok(())
    }

    pub fn load_from(&mut self, store: &dyn BookStore) -> BookResult<()> {
        let records = store
            .read()
            .and_then(BookDocument::into_map)
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to load address book");
                e
            })?;
        self.records = records;
        tracing::info!(records = self.records.len(), "Loaded address book");
        Ok(())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
