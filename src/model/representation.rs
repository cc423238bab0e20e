//! The chosen document representation.

use super::{DocumentLine, TableProjection};
use serde::{Deserialize, Serialize};

/// What the layout planner receives: either a rectangular table or a
/// line-oriented structured view. The flattening heuristic decides which.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Representation {
    /// Tabular layout
    Table(TableProjection),

    /// Indented hierarchical layout
    Structured(Vec<DocumentLine>),
}

impl Representation {
    /// Check whether this is the tabular variant.
    pub fn is_table(&self) -> bool {
        matches!(self, Representation::Table(_))
    }

    /// Number of content rows or lines.
    pub fn content_count(&self) -> usize {
        match self {
            Representation::Table(table) => table.row_count(),
            Representation::Structured(lines) => lines.len(),
        }
    }

    /// Number of columns for tables, `None` for structured views.
    pub fn column_count(&self) -> Option<usize> {
        match self {
            Representation::Table(table) => Some(table.column_count()),
            Representation::Structured(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineKind;

    #[test]
    fn test_counts() {
        let table = Representation::Table(TableProjection::from_parts(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()]],
        ));
        assert!(table.is_table());
        assert_eq!(table.content_count(), 1);
        assert_eq!(table.column_count(), Some(2));

        let lines = Representation::Structured(vec![DocumentLine::new(0, "{", LineKind::Punctuation)]);
        assert!(!lines.is_table());
        assert_eq!(lines.content_count(), 1);
        assert_eq!(lines.column_count(), None);
    }
}
