//! Record types for repeating structured entities.

use serde::{Deserialize, Serialize};

/// A flattened key→value view of one structured entity — one extracted
/// markup element instance, with field order preserved.
///
/// Attribute-origin fields carry a `@` prefix so they never collide with a
/// child element of the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field value.
    ///
    /// A repeated key keeps its original position and takes the new value,
    /// matching plain map-assignment semantics.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered run of records judged to be repetitions of the same logical
/// entity (same tag name in markup sources).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordGroup {
    /// Tag name shared by every member.
    pub name: String,

    /// Member records in source order.
    pub records: Vec<Record>,
}

impl RecordGroup {
    /// Create a new group for the given entity name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Add a member record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of member records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_insertion_order() {
        let mut record = Record::new();
        record.set("@id", "7");
        record.set("name", "Widget");
        record.set("price", "9.99");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["@id", "name", "price"]);
        assert_eq!(record.get("name"), Some("Widget"));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_record_repeated_key_keeps_position() {
        let mut record = Record::new();
        record.set("a", "1");
        record.set("b", "2");
        record.set("a", "3");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some("3"));
    }

    #[test]
    fn test_group() {
        let mut group = RecordGroup::new("product");
        assert!(group.is_empty());

        let mut record = Record::new();
        record.set("name", "Widget");
        group.push(record);
        assert_eq!(group.len(), 1);
        assert_eq!(group.name, "product");
    }
}
