use thiserror::Error;

/// Fatal conditions a caller may want to tell apart.
///
/// These travel inside `anyhow::Error`; use `downcast_ref::<ConvertError>()`
/// to inspect them.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("{0}")]
    ArgumentConflict(String),
}
