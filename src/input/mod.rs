//! Input side of the reshaper: comment stripping, tokenizing and grouping
//! raw counter rows into samples.

pub mod reader;
pub mod row;
pub mod sample;

pub use reader::RowReader;
pub use row::{RawRow, Sample};
pub use sample::{Samples, group_sample};
