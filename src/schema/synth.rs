use crate::Result;
use crate::error::ConvertError;
use crate::input::Sample;
use crate::schema::field::{
    COUNT_FIELD, CellKind, EVENT_COL, Extract, FieldSpec, MIN_ROW_WIDTH, RUN_PERCENT_COL,
    RUN_TIME_COL, Schema, TIME_FIELD,
};
use crate::value::Number;

use tracing::{debug, warn};

/// Build the output schema from the first sample of a run.
///
/// Field order: `count`, `time`, then for each row of the sample its event
/// name, `<event>-counter_run_time` and `<event>-counter_run_percent`.
/// A repeated event name overwrites the earlier row's fields in place.
pub fn synthesize(first: &Sample, start: Number) -> Result<Schema> {
    for row in &first.rows {
        if row.width() < MIN_ROW_WIDTH {
            return Err(ConvertError::MalformedInput(format!(
                "line {}: expected at least {} columns to build the schema, found {}",
                row.line,
                MIN_ROW_WIDTH,
                row.width()
            ))
            .into());
        }
    }

    let mut schema = Schema::new();
    schema.insert(FieldSpec::new(COUNT_FIELD, Extract::Counter));
    schema.insert(FieldSpec::new(TIME_FIELD, Extract::TimeOffset(start)));

    for (i, row) in first.rows.iter().enumerate() {
        let event = match row.cell(EVENT_COL) {
            Some("") | None => "0",
            Some(name) => name,
        };

        let fields = [
            FieldSpec::cell(event, i, EVENT_COL, CellKind::Text),
            FieldSpec::cell(
                format!("{}-counter_run_time", event),
                i,
                RUN_TIME_COL,
                CellKind::Numeric,
            ),
            FieldSpec::cell(
                format!("{}-counter_run_percent", event),
                i,
                RUN_PERCENT_COL,
                CellKind::Numeric,
            ),
        ];
        for spec in fields {
            let name = spec.name.clone();
            if schema.insert(spec) {
                warn!(field = %name, line = row.line, "duplicate field name, later row wins");
            }
        }
    }

    debug!(
        fields = schema.fields().len(),
        rows = first.rows.len(),
        "synthesized schema"
    );
    Ok(schema)
}
