//! perfshape: reshape multiplexed performance-counter logs into a flat table.
//!
//! ```text
//! lines ──► RowReader ──► Samples ──► synthesize (first sample only)
//!                             │                │
//!                             └──► project ◄───┘
//!                                     │
//!                     ImmediateSink / BufferedAnchoredSink ──► CSV
//! ```

pub mod convert;
pub mod error;
pub mod input;
pub mod options;
pub mod project;
pub mod report;
pub mod schema;
pub mod sink;
pub mod value;

pub use convert::convert;
pub use error::ConvertError;
pub use options::Options;

pub type Result<T> = anyhow::Result<T>;
