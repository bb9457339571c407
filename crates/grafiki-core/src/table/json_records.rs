//! Row tables from JSON "records" documents (`[{"col": value, ...}, ...]`).

use super::{Cell, RowTable};
use crate::error::BridgeError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a JSON array of row objects into a [`RowTable`].
///
/// Columns are taken in order of first appearance across all rows. A row that
/// lacks a column gets `Null` there. Nested arrays/objects are kept as their
/// compact JSON text.
pub fn records_from_json_str(text: &str) -> Result<RowTable, BridgeError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| BridgeError::InvalidInput(format!("records JSON: {e}")))?;
    let Value::Array(items) = value else {
        return Err(BridgeError::InvalidInput(
            "records JSON must be an array of objects".to_string(),
        ));
    };

    let mut objects = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(BridgeError::InvalidInput(format!(
                    "record {i} is {}, expected an object",
                    json_type_name(&other)
                )))
            }
        }
    }

    let mut columns: Vec<String> = Vec::new();
    for obj in &objects {
        for key in obj.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut table = RowTable::new(columns.iter().cloned());
    for mut obj in objects {
        let row: Vec<Cell> = columns
            .iter()
            .map(|c| obj.remove(c).map(cell_from_json).unwrap_or(Cell::Null))
            .collect();
        table.push_row(row);
    }
    Ok(table)
}

/// Read and parse a records file.
pub fn records_from_json_path(path: &Path) -> anyhow::Result<RowTable> {
    use anyhow::Context;

    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let table = records_from_json_str(&text).with_context(|| format!("parse {}", path.display()))?;
    Ok(table)
}

fn cell_from_json(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Int(i)
            } else if let Some(u) = n.as_u64() {
                Cell::UInt(u)
            } else {
                n.as_f64().map(Cell::Float).unwrap_or(Cell::Other(n.to_string()))
            }
        }
        Value::String(s) => Cell::Str(s),
        nested @ (Value::Array(_) | Value::Object(_)) => Cell::Other(nested.to_string()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
