//! Output side: the CSV table writer and the two row sinks.
//!
//! Rows either go straight to the writer ([`ImmediateSink`]) or are held
//! until the last one is known so the time axis can be re-anchored
//! ([`BufferedAnchoredSink`]). The choice is made once, by [`select`].

pub mod anchored;
pub mod immediate;
pub mod table;

pub use anchored::BufferedAnchoredSink;
pub use immediate::ImmediateSink;
pub use table::{TableWriter, UNITS_META};

use crate::Result;
use crate::project::OutputRow;
use crate::value::Number;

use serde::Serialize;
use std::io::Write;

/// What happened to the time axis when a sink was finished.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Anchoring {
    /// Rows were written as produced.
    Streamed,
    /// Every time value was reduced by `shift` so the last equals the end.
    Shifted { last_time: Number, shift: Number },
    /// The last time already was at or before the requested end.
    AlreadySatisfied { last_time: Number },
}

pub trait RowSink {
    fn accept(&mut self, row: OutputRow) -> Result<()>;

    /// Flush everything still held and report how time was treated.
    fn finish(self: Box<Self>) -> Result<Anchoring>;
}

/// Pick the sink for a run: anchored when an end boundary is requested.
pub fn select<'a, W: Write + 'a>(
    table: TableWriter<W>,
    end: Option<Number>,
    time_idx: usize,
) -> Box<dyn RowSink + 'a> {
    match end {
        Some(end) => Box::new(BufferedAnchoredSink::new(table, end, time_idx)),
        None => Box::new(ImmediateSink::new(table)),
    }
}
