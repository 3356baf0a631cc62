//! Record search implementation.

use crate::models::Record;

/// Record field that satisfied a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchableField {
    Name,
    Phone,
    Email,
}

impl SearchableField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

/// A record that matched a query, with the first field that matched and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch<'a> {
    pub record: &'a Record,
    pub field: SearchableField,
    pub value: &'a str,
}

/// A prepared substring query.
///
/// The query is lowercased once; stored names and emails are lowercased per
/// comparison. Phones are compared verbatim since they hold digits only.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    raw: String,
    lowered: String,
}

impl RecordQuery {
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        }
    }

    /// Check a record, trying name, then phones, then emails.
    pub fn match_record<'a>(&self, record: &'a Record) -> Option<SearchMatch<'a>> {
        let name = record.name().as_str();
        if name.to_lowercase().contains(&self.lowered) {
            return Some(SearchMatch {
                record,
                field: SearchableField::Name,
                value: name,
            });
        }

        if let Some(phone) = record
            .phones()
            .iter()
            .find(|phone| phone.as_str().contains(&self.raw))
        {
            return Some(SearchMatch {
                record,
                field: SearchableField::Phone,
                value: phone.as_str(),
            });
        }

        record
            .emails()
            .iter()
            .find(|email| email.as_str().to_lowercase().contains(&self.lowered))
            .map(|email| SearchMatch {
                record,
                field: SearchableField::Email,
                value: email.as_str(),
            })
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.match_record(record).is_some()
    }

    /// Scan every record in order and keep the matches.
    pub fn search<'a, I>(&self, records: I) -> Vec<SearchMatch<'a>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter_map(|record| self.match_record(record))
            .collect()
    }
}
