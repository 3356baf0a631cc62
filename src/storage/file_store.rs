//! File-backed book store.

use super::document::BookDocument;
use super::traits::BookStore;
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the book as a JSON document at a fixed path.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the destination, so readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl BookStore for FileStore {
    fn write(&self, document: &BookDocument) -> StorageResult<()> {
        let json = document.to_json()?;
        let io_err = |e| StorageError::io(&self.path, e);

        let mut file = NamedTempFile::new_in(self.directory()).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;
        file.as_file().sync_all().map_err(io_err)?;
        file.persist(&self.path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "Wrote address book");
        Ok(())
    }

    fn read(&self) -> StorageResult<BookDocument> {
        let json = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        BookDocument::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Phone};
    use crate::models::Record;

    fn sample_document() -> BookDocument {
        BookDocument::new(vec![
            Record::new("Bill")
                .with_phone(Phone::new("1234567890").unwrap())
                .with_email(Email::new("bill@example.com").unwrap()),
            Record::new("Anna"),
        ])
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("book.json"));

        store.write(&sample_document()).unwrap();
        assert_eq!(store.read().unwrap(), sample_document());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "old contents that are much longer than needed").unwrap();

        let store = FileStore::new(&path);
        store.write(&BookDocument::new(Vec::new())).unwrap();

        assert_eq!(store.read().unwrap().records.len(), 0);
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        match store.read() {
            Err(StorageError::Io { path, source }) => {
                assert_eq!(path, dir.path().join("absent.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[test]
    fn test_read_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, b"\x80\x03}q\x00.").unwrap();

        assert!(FileStore::new(&path).read().is_err());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope").join("book.json"));
        assert!(matches!(
            store.write(&sample_document()),
            Err(StorageError::Io { .. })
        ));
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        let store = FileStore::new("contacts.json");
        assert_eq!(store.directory(), Path::new("."));
    }
}
