//! Projection of samples onto the schema.

use crate::Result;
use crate::error::ConvertError;
use crate::input::Sample;
use crate::schema::field::TIME_COL;
use crate::schema::{CellKind, Extract, FieldSpec, Schema};
use crate::value::{Number, Value};

/// Sample counter threaded through every projection call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter(u64);

impl Counter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Return the current value and advance.
    pub fn next(&mut self) -> u64 {
        let v = self.0;
        self.0 += 1;
        v
    }

    /// Number of values handed out so far.
    pub fn issued(&self) -> u64 {
        self.0
    }
}

/// One flat output row, values in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub values: Vec<Value>,
}

impl OutputRow {
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    /// Subtract `shift` from the numeric value at `idx`. Text is left alone.
    pub fn shift(&mut self, idx: usize, shift: Number) {
        if let Some(Value::Number(n)) = self.values.get_mut(idx) {
            *n = *n - shift;
        }
    }
}

/// Project `sample` onto `schema`.
pub fn project(schema: &Schema, sample: &Sample, counter: &mut Counter) -> Result<OutputRow> {
    let values = schema
        .fields()
        .iter()
        .map(|spec| extract(spec, sample, counter))
        .collect::<Result<Vec<_>>>()?;
    Ok(OutputRow { values })
}

/// The synthetic all-zero row at `time = start` that can lead the output.
pub fn baseline_row(schema: &Schema, counter: &mut Counter) -> OutputRow {
    let values = schema
        .fields()
        .iter()
        .map(|spec| match &spec.extract {
            Extract::Counter => Value::from(counter.next() as i64),
            Extract::TimeOffset(offset) => Value::Number(*offset),
            Extract::Cell { default, .. } => default.clone(),
        })
        .collect();
    OutputRow { values }
}

fn extract(spec: &FieldSpec, sample: &Sample, counter: &mut Counter) -> Result<Value> {
    match &spec.extract {
        Extract::Counter => Ok(Value::from(counter.next() as i64)),
        Extract::TimeOffset(offset) => {
            let seconds = match sample.cell(0, TIME_COL) {
                None | Some("") => Number::ZERO,
                Some(raw) => parse_number(raw, sample.line(), &spec.name)?,
            };
            Ok(Value::Number(seconds.seconds_to_nanos() + *offset))
        }
        Extract::Cell {
            row,
            col,
            default,
            kind,
        } => match sample.cell(*row, *col) {
            // Later samples are not re-validated; a missing cell counts as empty.
            None | Some("") => Ok(default.clone()),
            Some(raw) => match kind {
                CellKind::Text => Ok(Value::Text(raw.to_string())),
                CellKind::Numeric => {
                    let line = sample.rows.get(*row).map(|r| r.line).unwrap_or(0);
                    parse_number(raw, line, &spec.name).map(Value::Number)
                }
            },
        },
    }
}

fn parse_number(raw: &str, line: usize, field: &str) -> Result<Number> {
    Number::parse(raw).ok_or_else(|| {
        ConvertError::MalformedInput(format!(
            "line {}: field {}: {:?} is not a number",
            line, field, raw
        ))
        .into()
    })
}
