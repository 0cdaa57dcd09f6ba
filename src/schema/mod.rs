//! Output schema: the ordered field list synthesized from the first sample.

pub mod field;
pub mod synth;

pub use field::{CellKind, Extract, FieldSpec, Schema, TIME_FIELD};
pub use synth::synthesize;
