use crate::Result;
use crate::project::OutputRow;
use crate::sink::{Anchoring, RowSink, TableWriter};

use std::io::Write;

/// Writes each row as soon as it is projected.
pub struct ImmediateSink<W: Write> {
    table: TableWriter<W>,
}

impl<W: Write> ImmediateSink<W> {
    pub fn new(table: TableWriter<W>) -> Self {
        Self { table }
    }
}

impl<W: Write> RowSink for ImmediateSink<W> {
    fn accept(&mut self, row: OutputRow) -> Result<()> {
        self.table.write_row(&row)
    }

    fn finish(mut self: Box<Self>) -> Result<Anchoring> {
        self.table.flush()?;
        Ok(Anchoring::Streamed)
    }
}
