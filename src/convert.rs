//! The reshaping run: read, group, synthesize once, project, sink.

use crate::Result;
use crate::input::{RowReader, Samples, group_sample};
use crate::options::Options;
use crate::project::{Counter, baseline_row, project};
use crate::report::RunReport;
use crate::schema::{TIME_FIELD, synthesize};
use crate::sink::{self, TableWriter};

use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Reshape a raw counter log from `input` into the wide table produced by
/// `open_output`.
///
/// The output is only opened once the schema has been built (or the input
/// turned out to hold no data rows), so a malformed first sample leaves an
/// existing destination untouched. An input without data rows produces only
/// the metadata row and succeeds.
pub fn convert<R, W, F>(input: R, open_output: F, opts: &Options) -> Result<RunReport>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> Result<W>,
{
    let mut rows = RowReader::new(input);

    if opts.skip_header {
        if let Some(header) = rows.next().transpose()? {
            debug!(line = header.line, columns = header.width(), "skipped input header");
        }
    }

    let Some(first) = rows.next().transpose()? else {
        info!("input has no data rows");
        let mut table = TableWriter::new(open_output()?);
        table.write_metadata()?;
        table.flush()?;
        return Ok(RunReport::empty(opts.start, opts.end));
    };

    let (first_sample, boundary) = group_sample(first, &mut rows)?;
    let schema = synthesize(&first_sample, opts.start)?;
    let time_idx = schema
        .index_of(TIME_FIELD)
        .context("schema lost its time field")?;

    let mut table = TableWriter::new(open_output()?);
    table.write_metadata()?;
    table.write_header(schema.names())?;

    let mut sink = sink::select(table, opts.end, time_idx);
    let mut counter = Counter::new();

    if opts.baseline_row {
        sink.accept(baseline_row(&schema, &mut counter))?;
    }

    sink.accept(project(&schema, &first_sample, &mut counter)?)?;
    let mut samples = 1u64;

    for sample in Samples::with_pending(rows, boundary) {
        let sample = sample?;
        sink.accept(project(&schema, &sample, &mut counter)?)?;
        samples += 1;
    }

    let anchoring = sink.finish()?;
    debug!(samples, rows = counter.issued(), "conversion finished");

    Ok(RunReport {
        samples,
        rows: counter.issued(),
        fields: schema.names().map(str::to_string).collect(),
        start: opts.start,
        end: opts.end,
        anchoring,
    })
}
