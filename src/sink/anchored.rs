use crate::Result;
use crate::error::ConvertError;
use crate::project::OutputRow;
use crate::sink::{Anchoring, RowSink, TableWriter};
use crate::value::Number;

use std::io::Write;
use tracing::{info, warn};

/// Holds every row until the input is exhausted, then re-anchors time.
///
/// If the last row's time is past `end`, all rows are shifted left by the
/// same amount so the last one lands exactly on `end`. The whole table stays
/// in memory: the shift is unknown until the final row has been seen.
pub struct BufferedAnchoredSink<W: Write> {
    table: TableWriter<W>,
    end: Number,
    time_idx: usize,
    rows: Vec<OutputRow>,
}

impl<W: Write> BufferedAnchoredSink<W> {
    pub fn new(table: TableWriter<W>, end: Number, time_idx: usize) -> Self {
        Self {
            table,
            end,
            time_idx,
            rows: Vec::new(),
        }
    }

    fn last_time(&self) -> Result<Option<Number>> {
        let Some(last) = self.rows.last() else {
            return Ok(None);
        };
        match last.get(self.time_idx).and_then(|v| v.as_number()) {
            Some(t) => Ok(Some(t)),
            None => Err(ConvertError::MalformedInput(
                "time field of the last row is not numeric".to_string(),
            )
            .into()),
        }
    }
}

impl<W: Write> RowSink for BufferedAnchoredSink<W> {
    fn accept(&mut self, row: OutputRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<Anchoring> {
        let anchoring = match self.last_time()? {
            None => Anchoring::Streamed,
            Some(last_time) if last_time > self.end => {
                let shift = last_time - self.end;
                info!("counter overhead ~{} ns", shift);
                info!("shifting time values left by {} ns", shift);
                for row in &mut self.rows {
                    row.shift(self.time_idx, shift);
                }
                Anchoring::Shifted { last_time, shift }
            }
            Some(last_time) => {
                warn!(
                    "provided end time {} >= {}, leaving time values unchanged",
                    self.end, last_time
                );
                Anchoring::AlreadySatisfied { last_time }
            }
        };

        let Self { mut table, rows, .. } = *self;
        for row in &rows {
            table.write_row(row)?;
        }
        table.flush()?;
        Ok(anchoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    fn row(count: i64, time: i64) -> OutputRow {
        OutputRow {
            values: vec![Value::from(count), Value::from(time), Value::from(9)],
        }
    }

    fn run(end: Number, times: &[i64]) -> (Anchoring, String) {
        let mut buf = Vec::new();
        let anchoring = {
            let mut sink: Box<dyn RowSink + '_> =
                Box::new(BufferedAnchoredSink::new(TableWriter::new(&mut buf), end, 1));
            for (i, t) in times.iter().enumerate() {
                sink.accept(row(i as i64, *t)).unwrap();
            }
            sink.finish().unwrap()
        };
        (anchoring, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn shifts_every_row_by_the_same_amount() {
        let (anchoring, out) = run(Number::Int(500), &[0, 150, 700]);
        assert_eq!(
            anchoring,
            Anchoring::Shifted {
                last_time: Number::Int(700),
                shift: Number::Int(200)
            }
        );
        assert_eq!(out, "0,-200,9\n1,-50,9\n2,500,9\n");
    }

    #[test]
    fn leaves_rows_alone_when_end_is_not_exceeded() {
        let (anchoring, out) = run(Number::Int(700), &[0, 150, 700]);
        assert_eq!(
            anchoring,
            Anchoring::AlreadySatisfied {
                last_time: Number::Int(700)
            }
        );
        assert_eq!(out, "0,0,9\n1,150,9\n2,700,9\n");
    }

    #[test]
    fn float_end_shifts_into_floats() {
        let (anchoring, out) = run(Number::Float(499.5), &[100, 700]);
        assert_eq!(
            anchoring,
            Anchoring::Shifted {
                last_time: Number::Int(700),
                shift: Number::Float(200.5)
            }
        );
        assert_eq!(out, "0,-100.5,9\n1,499.5,9\n");
    }

    #[test]
    fn nothing_buffered_writes_nothing() {
        let (anchoring, out) = run(Number::Int(500), &[]);
        assert_eq!(anchoring, Anchoring::Streamed);
        assert_eq!(out, "");
    }
}
