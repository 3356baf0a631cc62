use contact_book::error::{StorageError, StorageResult};
use contact_book::storage::{BookDocument, BookStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory book store for testing.
///
/// Keeps the serialized JSON text so the real document format is exercised,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MemoryBookStore {
    contents: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MemoryBookStore {
    /// Create a new empty MemoryBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `json`.
    pub fn with_contents(json: &str) -> Self {
        let store = Self::new();
        *store.contents.lock().unwrap() = Some(json.to_string());
        store
    }

    /// The raw text last written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStore for MemoryBookStore {
    fn write(&self, document: &BookDocument) -> StorageResult<()> {
        self.track_call("write");
        let json = document.to_json()?;
        *self.contents.lock().unwrap() = Some(json);
        Ok(())
    }

    fn read(&self) -> StorageResult<BookDocument> {
        self.track_call("read");
        let contents = self.contents.lock().unwrap();
        match contents.as_deref() {
            Some(json) => BookDocument::from_json(json),
            None => Err(StorageError::Io {
                path: "memory".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing stored"),
            }),
        }
    }
}
