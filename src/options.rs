//! Validated run options.

use crate::Result;
use crate::error::ConvertError;
use crate::value::Number;

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Nanosecond baseline added to every computed time.
    pub start: Number,
    /// Requested time of the last sample. Enables buffered re-anchoring.
    pub end: Option<Number>,
    /// The first retained input line is a header and is skipped.
    pub skip_header: bool,
    /// Lead the output with an all-zero row at `time = start`.
    pub baseline_row: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start: Number::ZERO,
            end: None,
            skip_header: true,
            baseline_row: false,
        }
    }
}

impl Options {
    /// Check the time window. `end` needs `start` and must lie after it.
    pub fn with_window(start: Option<Number>, end: Option<Number>) -> Result<Self> {
        match (start, end) {
            (None, Some(_)) => {
                return Err(
                    ConvertError::ArgumentConflict("-e/--end requires -s/--start".into()).into(),
                );
            }
            (Some(s), Some(e)) if e <= s => {
                return Err(ConvertError::ArgumentConflict(
                    "-e/--end must be greater than -s/--start".into(),
                )
                .into());
            }
            _ => {}
        }

        Ok(Self {
            start: start.unwrap_or_default(),
            end,
            ..Self::default()
        })
    }
}

/// clap value parser for `--start` / `--end`.
pub fn positive_number(s: &str) -> std::result::Result<Number, String> {
    let n: Number = s.parse()?;
    if !n.is_positive() {
        return Err("value must be positive".to_string());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn conflict(start: Option<Number>, end: Option<Number>) -> ConvertError {
        Options::with_window(start, end)
            .unwrap_err()
            .downcast::<ConvertError>()
            .unwrap()
    }

    #[test]
    fn end_without_start_is_rejected() {
        assert_eq!(
            conflict(None, Some(Number::Int(500))),
            ConvertError::ArgumentConflict("-e/--end requires -s/--start".into())
        );
    }

    #[test]
    fn end_must_exceed_start() {
        let expected =
            ConvertError::ArgumentConflict("-e/--end must be greater than -s/--start".into());
        assert_eq!(conflict(Some(Number::Int(500)), Some(Number::Int(500))), expected);
        assert_eq!(conflict(Some(Number::Int(500)), Some(Number::Float(499.9))), expected);
    }

    #[test]
    fn valid_windows() {
        let opts = Options::with_window(Some(Number::Int(1)), Some(Number::Float(2.5))).unwrap();
        assert_eq!(opts.start, Number::Int(1));
        assert_eq!(opts.end, Some(Number::Float(2.5)));

        let opts = Options::with_window(None, None).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn parser_accepts_only_positive_numbers() {
        assert_eq!(positive_number("1000000000"), Ok(Number::Int(1_000_000_000)));
        assert_eq!(positive_number("0.5"), Ok(Number::Float(0.5)));
        assert_eq!(positive_number("0"), Err("value must be positive".to_string()));
        assert_eq!(positive_number("-3"), Err("value must be positive".to_string()));
        assert!(positive_number("soon").is_err());
        assert!(positive_number("nan").is_err());
        assert!(positive_number("inf").is_err());
    }
}
