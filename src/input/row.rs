/// One retained input line split into tokens.
///
/// token[0] is the reporting timestamp, token[1] the time in decimal seconds,
/// token[3..=5] the event name, run time and run percent of one counter.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source.
    pub line: usize,
    pub tokens: Vec<String>,
}

impl RawRow {
    pub fn new(line: usize, tokens: Vec<String>) -> Self {
        Self { line, tokens }
    }

    pub fn timestamp(&self) -> &str {
        self.cell(0).unwrap_or("")
    }

    pub fn cell(&self, col: usize) -> Option<&str> {
        self.tokens.get(col).map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.tokens.len()
    }
}

/// All raw rows of one reporting tick, one row per active counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub rows: Vec<RawRow>,
}

impl Sample {
    pub fn timestamp(&self) -> &str {
        self.rows.first().map(RawRow::timestamp).unwrap_or("")
    }

    /// Line number of the first row, for diagnostics.
    pub fn line(&self) -> usize {
        self.rows.first().map(|r| r.line).unwrap_or(0)
    }

    /// `None` when the sample is narrower than the schema expects.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.cell(col))
    }
}
