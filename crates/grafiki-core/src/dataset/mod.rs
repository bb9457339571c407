//! The canonical dataset record that travels inside a link.

mod build;
mod record;
mod scalar;

pub use build::{build, build_at, default_name, default_name_now, DEFAULT_NAME_PREFIX};
pub use record::Record;
pub use scalar::Scalar;

use crate::error::BridgeError;
use serde::Serialize;

/// Rows, a display name and free-form tags.
///
/// Field order is the wire order of the envelope (`data`, `name`, `tags`).
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    data: Vec<Record>,
    name: String,
    tags: Vec<String>,
}

impl Dataset {
    /// Assemble a dataset from already-built records.
    ///
    /// The name must be non-empty and every record must carry the same
    /// column set.
    pub fn from_records(
        data: Vec<Record>,
        name: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self, BridgeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BridgeError::InvalidInput(
                "dataset name must not be empty".to_string(),
            ));
        }
        if let Some(first) = data.first() {
            if let Some(i) = data.iter().position(|r| !r.same_columns(first)) {
                return Err(BridgeError::InvalidInput(format!(
                    "record {i} does not have the same columns as record 0"
                )));
            }
        }
        Ok(Self { data, name, tags })
    }

    /// Decoded datasets keep whatever row shape the sender produced.
    pub(crate) fn from_wire(data: Vec<Record>, name: String, tags: Vec<String>) -> Self {
        Self { data, name, tags }
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Column names in row order, taken from the first record.
    pub fn columns(&self) -> Vec<&str> {
        self.data
            .first()
            .map(|r| r.keys().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, i64)]) -> Record {
        Record::from_fields(pairs.iter().map(|(k, v)| (*k, Scalar::Int(*v)))).unwrap()
    }

    #[test]
    fn from_records_checks_uniform_columns() {
        let ok = Dataset::from_records(
            vec![rec(&[("a", 1), ("b", 2)]), rec(&[("b", 3), ("a", 4)])],
            "d",
            vec![],
        );
        assert!(ok.is_ok());

        let err = Dataset::from_records(vec![rec(&[("a", 1)]), rec(&[("b", 2)])], "d", vec![])
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));
    }

    #[test]
    fn from_records_requires_a_name() {
        assert!(Dataset::from_records(vec![], "", vec![]).is_err());
    }

    #[test]
    fn columns_come_from_first_record() {
        let d = Dataset::from_records(vec![rec(&[("y", 1), ("x", 2)])], "d", vec![]).unwrap();
        assert_eq!(d.columns(), ["y", "x"]);
        assert_eq!(d.row_count(), 1);

        let empty = Dataset::from_records(vec![], "d", vec![]).unwrap();
        assert!(empty.columns().is_empty());
    }

    #[test]
    fn serializes_fields_in_wire_order() {
        let d = Dataset::from_records(vec![rec(&[("x", 1)])], "n", vec!["t".into()]).unwrap();
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"data":[{"x":1}],"name":"n","tags":["t"]}"#
        );
    }
}
