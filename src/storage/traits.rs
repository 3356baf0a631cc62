use super::document::BookDocument;
use crate::error::StorageResult;

/// Backing store for a whole address book.
///
/// Provides abstraction over where the serialized book lives,
/// enabling different implementations (file, in-memory mock).
pub trait BookStore {
    /// Replace the stored book with `document`.
    fn write(&self, document: &BookDocument) -> StorageResult<()>;

    /// Read back the stored book.
    fn read(&self) -> StorageResult<BookDocument>;
}
