//! Delimited-text tokenizer.
//!
//! A minimal single-line-per-record CSV scanner: a double quote toggles
//! delimiter sensitivity, a comma outside quotes ends the current cell, and
//! end-of-line ends the final cell. Known limitations, preserved on purpose:
//! no `""` escape sequences, no embedded newlines inside quoted cells, and
//! ragged rows are kept as-is — cells beyond the header width survive the
//! model but have no column and are not drawn.

/// Tokenize delimited text into rows of trimmed cells.
///
/// Blank or whitespace-only input yields zero rows. The first row is the
/// header by caller convention; the tokenizer itself treats every row alike.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.lines().map(tokenize_line).collect()
}

fn tokenize_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let rows = tokenize("Name,Age\nAlice,30\nBob,25");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Name", "Age"]);
        assert_eq!(rows[1], vec!["Alice", "30"]);
        assert_eq!(rows[2], vec!["Bob", "25"]);
    }

    #[test]
    fn test_tokenize_quoted_delimiter() {
        let rows = tokenize("city,population\n\"Paris, France\",2100000");
        assert_eq!(rows[1], vec!["Paris, France", "2100000"]);
    }

    #[test]
    fn test_tokenize_trims_cells() {
        let rows = tokenize("a ,  b\n 1,2 ");
        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n  \n").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_ragged_rows() {
        // Mismatched widths come through as-is; padding is the projection's
        // business, never the tokenizer's.
        let rows = tokenize("a,b,c\n1,2\n1,2,3,4");
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_tokenize_empty_cells() {
        let rows = tokenize("a,,c\n,,");
        assert_eq!(rows[0], vec!["a", "", "c"]);
        assert_eq!(rows[1], vec!["", "", ""]);
    }
}
