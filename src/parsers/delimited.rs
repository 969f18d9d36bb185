// ==============================================================================
// delimited.rs - Delimited Text Parser
// ==============================================================================
// Description: Parser for comma-delimited client and knowledge table text
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// Format: one row per line, cells split on a single fixed delimiter
// Example:
//   rs4988235,13,intron,CT
//   rs1801133,1,missense,TT
// ==============================================================================

use crate::models::{Row, Table};

/// Caller-specified parse behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Discard rows whose cells are all empty after trimming
    pub filter_blank_rows: bool,

    /// Drop the first surviving row. Set when the source table is known to
    /// carry a header row; never auto-detected.
    pub drop_header_row: bool,
}

/// Parser for delimited text sources.
///
/// No quoting or escaping semantics: a delimiter inside a field always
/// splits the field. This is a documented limitation of the input format,
/// not a bug to fix.
#[derive(Debug, Clone)]
pub struct DelimitedTextParser {
    delimiter: char,
}

impl Default for DelimitedTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitedTextParser {
    /// Create a parser for comma-delimited text
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Create a parser with a specific cell delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse raw text into a table of trimmed string cells.
    ///
    /// Splits input on line breaks, then each line on the delimiter, and
    /// trims leading/trailing whitespace from every cell (CRLF input is
    /// handled by the trim). Unequal column counts across rows are
    /// permitted; rows are independent sequences. Pure function: the same
    /// text and options always produce the same table.
    pub fn parse(&self, text: &str, options: ParseOptions) -> Table {
        let mut rows: Table = text
            .split('\n')
            .map(|line| self.parse_line(line))
            .collect();

        if options.filter_blank_rows {
            rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));
        }

        if options.drop_header_row && !rows.is_empty() {
            rows.remove(0);
        }

        rows
    }

    fn parse_line(&self, line: &str) -> Row {
        line.split(self.delimiter)
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse("a,b\nc,d", ParseOptions::default());
        assert_eq!(
            table,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn test_blank_row_filtering_preserves_empty_cells() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse(
            "a,,\n\n",
            ParseOptions {
                filter_blank_rows: true,
                drop_header_row: false,
            },
        );
        // Second and third lines are blank; empty cells in the surviving
        // row are preserved.
        assert_eq!(
            table,
            vec![vec!["a".to_string(), String::new(), String::new()]]
        );
    }

    #[test]
    fn test_blank_rows_kept_without_filtering() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse("a\n\nb", ParseOptions::default());
        assert_eq!(table.len(), 3);
        assert_eq!(table[1], vec![String::new()]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse("  rs1 ,  1 , 100 ,  TT  ", ParseOptions::default());
        assert_eq!(table, vec![vec!["rs1", "1", "100", "TT"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()]);
    }

    #[test]
    fn test_crlf_line_breaks() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse("a,b\r\nc,d\r\n", ParseOptions {
            filter_blank_rows: true,
            drop_header_row: false,
        });
        assert_eq!(
            table,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn test_drop_header_row() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse(
            "\ngene,name\nrs1,LCT",
            ParseOptions {
                filter_blank_rows: true,
                drop_header_row: true,
            },
        );
        // The blank first line is filtered before the header drop, so the
        // header is the first surviving row.
        assert_eq!(table, vec![vec!["rs1".to_string(), "LCT".to_string()]]);
    }

    #[test]
    fn test_unequal_column_counts_permitted() {
        let parser = DelimitedTextParser::new();
        let table = parser.parse("a,b,c\nd\ne,f", ParseOptions::default());
        assert_eq!(table[0].len(), 3);
        assert_eq!(table[1].len(), 1);
        assert_eq!(table[2].len(), 2);
    }

    #[test]
    fn test_parse_is_pure() {
        let parser = DelimitedTextParser::new();
        let text = "rs1,1,100,CT\nrs2,2,200,GG";
        let options = ParseOptions {
            filter_blank_rows: true,
            drop_header_row: false,
        };
        assert_eq!(parser.parse(text, options), parser.parse(text, options));
    }

    #[test]
    fn test_delimiter_inside_field_always_splits() {
        // No quoting semantics: quotes are ordinary characters.
        let parser = DelimitedTextParser::new();
        let table = parser.parse("\"a,b\",c", ParseOptions::default());
        assert_eq!(
            table,
            vec![vec!["\"a".to_string(), "b\"".to_string(), "c".to_string()]]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = DelimitedTextParser::with_delimiter('\t');
        let table = parser.parse("rs1\t1\t100\tTT", ParseOptions::default());
        assert_eq!(table[0], vec!["rs1", "1", "100", "TT"]);
    }
}
