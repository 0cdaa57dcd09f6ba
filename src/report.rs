//! JSON summary of one run, written on request next to the CSV output.

use crate::Result;
use crate::sink::Anchoring;
use crate::value::Number;

use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Samples read from the input.
    pub samples: u64,
    /// Data rows written, including a baseline row.
    pub rows: u64,
    /// Output header, empty when the input had no data.
    pub fields: Vec<String>,
    pub start: Number,
    pub end: Option<Number>,
    pub anchoring: Anchoring,
}

impl RunReport {
    pub fn empty(start: Number, end: Option<Number>) -> Self {
        Self {
            samples: 0,
            rows: 0,
            fields: Vec::new(),
            start,
            end,
            anchoring: Anchoring::Streamed,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))
    }
}
