// ============================================================
// Layer 4 — Minimal CSV Reader / Writer Helpers
// ============================================================
// The input table and the report are both plain CSV files that
// spreadsheet tools open directly. Only what those files need is
// handled here:
//
//   - comma separated fields
//   - double-quoted fields, with "" as an escaped quote
//   - quoted fields may contain commas and newlines
//   - \r\n and \n line endings
//
// Reading works on the whole text at once; the input tables this
// tool sees are a few hundred rows at most.

use crate::domain::error::InputError;

/// One parsed CSV record and the 1-based line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line:   usize,
    pub fields: Vec<String>,
}

/// Split CSV text into rows of fields.
/// Blank lines are skipped.
pub fn parse_rows(text: &str) -> Result<Vec<CsvRow>, InputError> {
    // Strip a UTF-8 byte order mark written by spreadsheet exports
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let mut rows       = Vec::new();
    let mut fields     = Vec::new();
    let mut field      = String::new();
    let mut in_quotes  = false;
    let mut line       = 1usize;
    let mut row_start  = 1usize;
    let mut chars      = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_row(&mut rows, std::mem::take(&mut fields), row_start);
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(InputError::UnterminatedQuote { line: row_start });
    }

    // Last row without a trailing newline
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_row(&mut rows, fields, row_start);
    }

    Ok(rows)
}

fn push_row(rows: &mut Vec<CsvRow>, fields: Vec<String>, line: usize) {
    let blank = fields.iter().all(|f| f.trim().is_empty());
    if !blank {
        rows.push(CsvRow { line, fields });
    }
}

/// Quote a field if it contains a delimiter, quote or line break.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join already-formatted values into one CSV line (no newline).
pub fn join_row<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| escape_field(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows() {
        let rows = parse_rows("a,b\n1,2\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].fields, vec!["1", "2"]);
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn test_quoted_field_with_comma_and_quote() {
        let rows = parse_rows("id,url\n1,\"http://x.com/?a=1,b=\"\"2\"\"\"\n").unwrap();
        assert_eq!(rows[1].fields[1], "http://x.com/?a=1,b=\"2\"");
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline() {
        let rows = parse_rows("a,b\r\n1,2").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["a", "b"]);
        assert_eq!(rows[1].fields, vec!["1", "2"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = parse_rows("a,b\n\n,\n1,2\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        let err = parse_rows("a,b\n1,\"oops\n").unwrap_err();
        assert_eq!(err, InputError::UnterminatedQuote { line: 2 });
    }

    #[test]
    fn test_bom_is_stripped() {
        let rows = parse_rows("\u{FEFF}URL_ID,URL\n").unwrap();
        assert_eq!(rows[0].fields[0], "URL_ID");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(
            escape_field("=HYPERLINK(\"u\", \"u\")"),
            "\"=HYPERLINK(\"\"u\"\", \"\"u\"\")\""
        );
    }

    #[test]
    fn test_join_row() {
        assert_eq!(join_row(["1", "x,y", "3"]), "1,\"x,y\",3");
    }
}
