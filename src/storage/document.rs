//! Versioned on-disk document for a whole address book.
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Bill", "phones": ["1234567890"], "emails": ["bill@example.com"], "birthday": "1986-04-27" }
//!   ]
//! }
//! ```
//!
//! `records` follows the book's insertion order. `phones`, `emails` and
//! `birthday` are omitted when empty.

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use indexmap::IndexMap;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};

/// Current document format version.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized form of an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    pub version: u32,
    pub records: Vec<Record>,
}

impl BookDocument {
    /// Build a current-version document from records in book order.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            version: FORMAT_VERSION,
            records,
        }
    }

    pub fn to_json(&self) -> StorageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document, rejecting unknown versions before reading records.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let version = match value.get("version") {
            None => return Err(serde_json::Error::missing_field("version").into()),
            Some(field) => field.as_u64().ok_or_else(|| {
                serde_json::Error::invalid_type(unexpected(field), &"an unsigned integer version")
            })?,
        };
        if version != u64::from(FORMAT_VERSION) {
            return Err(StorageError::UnsupportedVersion {
                found: u32::try_from(version).unwrap_or(u32::MAX),
                expected: FORMAT_VERSION,
            });
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Key records by name, keeping document order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateName` if two records share a name.
    pub fn into_map(self) -> StorageResult<IndexMap<String, Record>> {
        let mut map = IndexMap::with_capacity(self.records.len());
        for record in self.records {
            let name = record.name().as_str().to_string();
            if map.contains_key(&name) {
                return Err(StorageError::DuplicateName(name));
            }
            map.insert(name, record);
        }
        Ok(map)
    }
}

fn unexpected(value: &serde_json::Value) -> Unexpected<'_> {
    match value {
        serde_json::Value::Null => Unexpected::Unit,
        serde_json::Value::Bool(b) => Unexpected::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Unexpected::Signed(i),
            None => Unexpected::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Unexpected::Str(s),
        serde_json::Value::Array(_) => Unexpected::Seq,
        serde_json::Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    #[test]
    fn test_document_json_shape() {
        let record = Record::new("Bill").with_phone(Phone::new("123").unwrap());
        let json = BookDocument::new(vec![record]).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"][0]["name"], "Bill");
        assert_eq!(value["records"][0]["phones"][0], "123");
        assert!(value["records"][0].get("birthday").is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_version() {
        let json = r#"{"version": 2, "records": "whatever"}"#;
        assert!(matches!(
            BookDocument::from_json(json),
            Err(StorageError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        for json in [
            "",
            "[]",
            r#"{"records": []}"#,
            r#"{"version": 1}"#,
            r#"{"version": 1, "records": [{"phones": ["1"]}]}"#,
            r#"{"version": 1, "records": [{"name": "A", "phones": ["x"]}]}"#,
        ] {
            assert!(
                matches!(BookDocument::from_json(json), Err(StorageError::Format(_))),
                "{json} should fail as a format error"
            );
        }
    }

    #[test]
    fn test_from_json_reports_mistyped_version() {
        for (json, shown) in [
            (r#"{"version": "1", "records": []}"#, "string \"1\""),
            (r#"{"version": -1, "records": []}"#, "integer `-1`"),
            (r#"{"version": 1.5, "records": []}"#, "floating point `1.5`"),
            (r#"{"version": null, "records": []}"#, "unit value"),
        ] {
            match BookDocument::from_json(json) {
                Err(StorageError::Format(err)) => {
                    let message = err.to_string();
                    assert!(message.contains("invalid type"), "{json}: {message}");
                    assert!(message.contains(shown), "{json}: {message}");
                    assert!(!message.contains("missing field"), "{json}: {message}");
                }
                other => panic!("{json} should be a format error, got {other:?}"),
            }
        }

        assert!(BookDocument::from_json(r#"{"records": []}"#)
            .unwrap_err()
            .to_string()
            .contains("missing field `version`"));
    }

    #[test]
    fn test_into_map_detects_duplicates() {
        let doc = BookDocument::new(vec![Record::new("Anna"), Record::new("Anna")]);
        assert!(matches!(
            doc.into_map(),
            Err(StorageError::DuplicateName(name)) if name == "Anna"
        ));
    }

    #[test]
    fn test_into_map_keeps_order() {
        let doc = BookDocument::new(vec![
            Record::new("Zed"),
            Record::new("Anna"),
            Record::new("Mike"),
        ]);
        let keys: Vec<String> = doc.into_map().unwrap().into_keys().collect();
        assert_eq!(keys, ["Zed", "Anna", "Mike"]);
    }
}
