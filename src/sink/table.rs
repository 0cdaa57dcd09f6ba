use crate::Result;
use crate::project::OutputRow;

use anyhow::Context;
use std::io::Write;

/// Leading metadata row of every output.
pub const UNITS_META: [&str; 4] = ["#units", "energy=J", "power=W", "time=ns"];

/// CSV writer for the reshaped table.
pub struct TableWriter<W: Write> {
    csv: csv::Writer<W>,
    rows: u64,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        let csv = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(out);
        Self { csv, rows: 0 }
    }

    pub fn write_metadata(&mut self) -> Result<()> {
        self.csv
            .write_record(UNITS_META)
            .context("write metadata row")
    }

    pub fn write_header<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        self.csv
            .write_record(names)
            .context("write header row")
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.csv
            .write_record(row.values.iter().map(|v| v.to_string()))
            .with_context(|| format!("write data row {}", self.rows))?;
        self.rows += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.csv.flush().context("flush output")
    }
}
