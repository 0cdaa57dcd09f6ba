use crate::value::{Number, Value};

pub const COUNT_FIELD: &str = "count";
pub const TIME_FIELD: &str = "time";

/// Column of the time value (decimal seconds) in a raw row.
pub const TIME_COL: usize = 1;
pub const EVENT_COL: usize = 3;
pub const RUN_TIME_COL: usize = 4;
pub const RUN_PERCENT_COL: usize = 5;

/// Narrowest raw row the schema can be built from.
pub const MIN_ROW_WIDTH: usize = RUN_PERCENT_COL + 1;

/// How a cell is interpreted once read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Integer if lossless, float otherwise.
    Numeric,
    /// Passed through verbatim.
    Text,
}

/// Extraction rule of one output field.
#[derive(Debug, Clone, PartialEq)]
pub enum Extract {
    /// Running sample counter, starting at zero.
    Counter,
    /// `round(row0[TIME_COL] * 1e9) + offset`.
    TimeOffset(Number),
    /// `sample[row][col]`, or `default` when the cell is empty.
    Cell {
        row: usize,
        col: usize,
        default: Value,
        kind: CellKind,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub extract: Extract,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, extract: Extract) -> Self {
        Self {
            name: name.into(),
            extract,
        }
    }

    pub fn cell(name: impl Into<String>, row: usize, col: usize, kind: CellKind) -> Self {
        Self::new(
            name,
            Extract::Cell {
                row,
                col,
                default: Value::from(0),
                kind,
            },
        )
    }
}

/// Ordered name -> extraction rule mapping.
///
/// Inserting an existing name replaces its rule but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `spec.name` was already present and got overwritten.
    pub fn insert(&mut self, spec: FieldSpec) -> bool {
        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => {
                *existing = spec;
                true
            }
            None => {
                self.fields.push(spec);
                false
            }
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}
