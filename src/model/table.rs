//! Rectangular table projection.

use super::RecordGroup;
use serde::{Deserialize, Serialize};

/// The row/column view derived from a record group, a flattenable JSON
/// array, or a CSV body.
///
/// For projections built from records, every row has exactly
/// `headers.len()` cells — records missing a field contribute an empty
/// string. CSV source rows are carried as parsed: ragged widths in the
/// source are preserved rather than silently padded or truncated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableProjection {
    /// Unique field names, in order of first appearance across all records.
    pub headers: Vec<String>,

    /// Body rows (the header row is not repeated here).
    pub rows: Vec<Vec<String>>,
}

impl TableProjection {
    /// Create an empty projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projection from explicit headers and rows.
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build a projection from a record group.
    ///
    /// Headers are collected in first-appearance order across all member
    /// records; every row is padded to the full header width.
    pub fn from_group(group: &RecordGroup) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for record in &group.records {
            for key in record.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.to_string());
                }
            }
        }

        let rows = group
            .records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|h| record.get(h).unwrap_or("").to_string())
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the projection has no headers and no rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_from_group_pads_missing_fields() {
        let mut group = RecordGroup::new("item");

        let mut a = Record::new();
        a.set("name", "Alice");
        a.set("age", "30");
        group.push(a);

        let mut b = Record::new();
        b.set("name", "Bob");
        b.set("city", "Paris");
        group.push(b);

        let table = TableProjection::from_group(&group);
        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.rows[0], vec!["Alice", "30", ""]);
        assert_eq!(table.rows[1], vec!["Bob", "", "Paris"]);
        for row in &table.rows {
            assert_eq!(row.len(), table.column_count());
        }
    }

    #[test]
    fn test_empty() {
        let table = TableProjection::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }
}
