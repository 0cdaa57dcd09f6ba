use crate::Result;
use crate::input::row::RawRow;

use anyhow::Context;
use std::io::{BufRead, Lines};

/// Lines of a source with blank and `#` comment lines removed.
///
/// Yields `(line_number, trimmed_line)`; line numbers are 1-based and count
/// the dropped lines too.
pub struct ContentLines<R> {
    lines: Lines<R>,
    lineno: usize,
}

impl<R: BufRead> ContentLines<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            lineno: 0,
        }
    }
}

impl<R: BufRead> Iterator for ContentLines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.lineno += 1;
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    return Some(
                        Err(e).with_context(|| format!("read input line {}", self.lineno)),
                    );
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(Ok((self.lineno, trimmed.to_string())));
        }
    }
}

/// Comma-split the retained lines of a source into [`RawRow`]s.
pub struct RowReader<R> {
    lines: ContentLines<R>,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: ContentLines::new(source),
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.lines.next()?;
        Some(item.and_then(|(lineno, line)| tokenize(lineno, &line)))
    }
}

/// Split one line into tokens, honoring CSV quoting.
pub fn tokenize(lineno: usize, line: &str) -> Result<RawRow> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    rdr.read_record(&mut record)
        .with_context(|| format!("tokenize input line {}", lineno))?;

    Ok(RawRow::new(
        lineno,
        record.iter().map(str::to_string).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(text: &str) -> Vec<RawRow> {
        RowReader::new(text.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn drops_blank_and_comment_lines() {
        let text = "# started on Mon\n\n   \n  # indented comment\na,b\n\nc,d\n";
        let lines: Vec<(usize, String)> = ContentLines::new(text.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines, vec![(5, "a,b".to_string()), (7, "c,d".to_string())]);
    }

    #[test]
    fn splits_on_commas_and_keeps_empty_cells() {
        let got = rows("     1.000268561,0.0,123,,cycles,,\n");
        assert_eq!(got.len(), 1);
        assert_eq!(
            got[0].tokens,
            vec!["1.000268561", "0.0", "123", "", "cycles", "", ""]
        );
        assert_eq!(got[0].timestamp(), "1.000268561");
    }

    #[test]
    fn honors_quoted_commas() {
        let got = rows("t0,0.0,1,\"a,b\",10,5\n");
        assert_eq!(got[0].cell(3), Some("a,b"));
        assert_eq!(got[0].width(), 6);
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(rows("").is_empty());
        assert!(rows("# only a comment\n\n").is_empty());
    }
}
