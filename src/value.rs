//! Cell values of the reshaped table.
//!
//! Raw counter cells are parsed "integer if lossless, else float"; event
//! names stay text. Time arithmetic only ever happens on [`Number`].

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A numeric cell or CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub const ZERO: Number = Number::Int(0);

    /// Parse as an integer when that is lossless, otherwise as a finite float.
    pub fn parse(s: &str) -> Option<Number> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Some(Number::Int(i));
        }
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Float)
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Number::Int(i) => i > 0,
            Number::Float(f) => f > 0.0,
        }
    }

    /// Decimal seconds to whole nanoseconds. Widens to float past `i64`.
    pub fn seconds_to_nanos(self) -> Number {
        match self {
            Number::Int(i) => match i.checked_mul(1_000_000_000) {
                Some(ns) => Number::Int(ns),
                None => Number::Float(i as f64 * 1e9),
            },
            Number::Float(f) => {
                let ns = (f * 1e9).round();
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if ns >= i64::MIN as f64 && ns < i64::MAX as f64 {
                    Number::Int(ns as i64)
                } else {
                    Number::Float(ns)
                }
            }
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(v) => Number::Int(v),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_sub(b) {
                Some(v) => Number::Int(v),
                None => Number::Float(a as f64 - b as f64),
            },
            (a, b) => Number::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl FromStr for Number {
    type Err = String;

    fn from_str(s: &str) -> Result<Number, String> {
        Number::parse(s).ok_or_else(|| format!("could not convert {:?} to a number", s))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole floats.
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// One cell of an output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(Number),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => n.fmt(f),
            Value::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_prefers_integers() {
        assert_eq!(Number::parse("42"), Some(Number::Int(42)));
        assert_eq!(Number::parse(" -7 "), Some(Number::Int(-7)));
        assert_eq!(Number::parse("1.5"), Some(Number::Float(1.5)));
        assert_eq!(Number::parse("100.00"), Some(Number::Float(100.0)));
        assert_eq!(Number::parse("<not counted>"), None);
    }

    #[test]
    fn parse_rejects_non_finite_floats() {
        assert_eq!(Number::parse("nan"), None);
        assert_eq!(Number::parse("NaN"), None);
        assert_eq!(Number::parse("inf"), None);
        assert_eq!(Number::parse("-infinity"), None);
        assert_eq!(Number::parse("1e400"), None);
    }

    #[test]
    fn nanos_overflow_widens_to_float() {
        assert_eq!(
            Number::Int(10_000_000_000).seconds_to_nanos(),
            Number::Float(1e19)
        );
        assert_eq!(Number::Float(1e12).seconds_to_nanos(), Number::Float(1e21));
        assert_eq!(
            Number::Float(-9.3e9).seconds_to_nanos(),
            Number::Float(-9.3e18)
        );
        assert_eq!(
            Number::Int(9_000_000_000).seconds_to_nanos(),
            Number::Int(9_000_000_000_000_000_000)
        );
    }

    #[test]
    fn seconds_round_to_nanos() {
        assert_eq!(Number::Float(1.000268561).seconds_to_nanos(), Number::Int(1_000_268_561));
        assert_eq!(Number::Float(0.0).seconds_to_nanos(), Number::Int(0));
        assert_eq!(Number::Int(2).seconds_to_nanos(), Number::Int(2_000_000_000));
        assert_eq!(Number::Float(0.1).seconds_to_nanos(), Number::Int(100_000_000));
    }

    #[test]
    fn mixed_arithmetic_widens_to_float() {
        assert_eq!(Number::Int(150) - Number::Int(200), Number::Int(-50));
        assert_eq!(Number::Int(10) + Number::Float(0.5), Number::Float(10.5));
        assert!(Number::Int(700) > Number::Float(500.0));
        assert!(Number::Float(499.5) <= Number::Int(500));
    }

    #[test]
    fn display_matches_csv_output() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::Number(Number::Float(100.0)).to_string(), "100.0");
        assert_eq!(Value::Number(Number::Float(0.25)).to_string(), "0.25");
        assert_eq!(Value::Text("cycles".into()).to_string(), "cycles");
    }
}
