//! Tabular input abstraction.
//!
//! Anything that can expose ordered column names and ordered rows of cells
//! implements [`TabularSource`]; the dataset builder only talks to this trait.

mod json_records;

pub use json_records::{records_from_json_path, records_from_json_str};

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A single table cell as exposed by a source.
///
/// The first six variants are carried through as typed JSON scalars. The rest
/// are stringified when a dataset is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Any other value, already rendered to its canonical text form.
    Other(String),
}

impl Cell {
    /// Wrap a non-primitive value by its `Display` form.
    pub fn other(value: impl fmt::Display) -> Self {
        Cell::Other(value.to_string())
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Int(v.into())
    }
}

impl From<u64> for Cell {
    fn from(v: u64) -> Self {
        Cell::UInt(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Str(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Str(v)
    }
}

impl From<NaiveDate> for Cell {
    fn from(v: NaiveDate) -> Self {
        Cell::Date(v)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(v: NaiveDateTime) -> Self {
        Cell::DateTime(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Cell::Null)
    }
}

/// Capability interface for tabular input: ordered columns, ordered rows.
///
/// Row `i` yields one cell per column, in column order.
pub trait TabularSource {
    fn columns(&self) -> &[String];

    fn rows(&self) -> Box<dyn Iterator<Item = &[Cell]> + '_>;

    fn row_count(&self) -> usize {
        self.rows().count()
    }
}

/// In-memory row-major table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RowTable {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Length is checked when the dataset is built, not here.
    pub fn push_row<I, C>(&mut self, row: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn with_row<I, C>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.push_row(row);
        self
    }
}

impl TabularSource for RowTable {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn rows(&self) -> Box<dyn Iterator<Item = &[Cell]> + '_> {
        Box::new(self.rows.iter().map(Vec::as_slice))
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}
