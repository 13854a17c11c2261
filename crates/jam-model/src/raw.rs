//! Raw spreadsheet rows as produced by the decoding layer.
//!
//! Column names are whatever the spreadsheet export happened to use;
//! the normalizer resolves them against per-field alias lists. `Null`
//! is the decoder's explicit empty-cell sentinel, distinct from an
//! absent column.

use std::collections::BTreeMap;

/// An untyped cell value from a decoded spreadsheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl RawValue {
    /// Returns true for the explicit empty-cell sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// One decoded spreadsheet row: column name to raw value.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawRow {
    pub cells: BTreeMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, trimming the column name the way header
    /// normalization does on ingest.
    pub fn insert(&mut self, column: &str, value: RawValue) {
        self.cells.insert(column.trim().to_string(), value);
    }

    /// Look up a cell by exact column name, treating `Null` as absent.
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.cells.get(column).filter(|v| !v.is_null())
    }
}
