//! One dataset row: an ordered, duplicate-free column → scalar mapping.

use super::Scalar;
use crate::error::BridgeError;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    /// Build a record from `(column, value)` pairs, keeping their order.
    ///
    /// Fails on a repeated column name. Unsigned values that fit in `i64` are
    /// stored as `Int` so that a decoded record compares equal to its source.
    pub fn from_fields<I, K>(fields: I) -> Result<Self, BridgeError>
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        let mut record = Record::default();
        for (key, value) in fields {
            let key = key.into();
            if record.get(&key).is_some() {
                return Err(BridgeError::InvalidInput(format!(
                    "duplicate column `{key}` in record"
                )));
            }
            record.fields.push((key, normalize(value)));
        }
        Ok(record)
    }

    pub fn get(&self, column: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(k, _)| k == column).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Same column set as `other`, ignoring order.
    pub(crate) fn same_columns(&self, other: &Record) -> bool {
        self.len() == other.len() && self.keys().all(|k| other.get(k).is_some())
    }
}

fn normalize(value: Scalar) -> Scalar {
    match value {
        Scalar::UInt(u) => i64::try_from(u).map(Scalar::Int).unwrap_or(Scalar::UInt(u)),
        other => other,
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record object of scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
        let mut fields: Vec<(String, Scalar)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Scalar>()? {
            if fields.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(format_args!("duplicate column `{key}`")));
            }
            fields.push((key, value));
        }
        Ok(Record { fields })
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_when_serialized() {
        let r = Record::from_fields([
            ("z", Scalar::Int(1)),
            ("a", Scalar::Str("x".into())),
        ])
        .unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"z":1,"a":"x"}"#);
        assert_eq!(r.keys().collect::<Vec<_>>(), ["z", "a"]);
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = Record::from_fields([("a", Scalar::Null), ("a", Scalar::Null)]).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));
        assert!(serde_json::from_str::<Record>(r#"{"a": 1, "a": 2}"#).is_err());
    }

    #[test]
    fn unsigned_values_that_fit_are_stored_as_int() {
        let r = Record::from_fields([("n", Scalar::UInt(5)), ("big", Scalar::UInt(u64::MAX))])
            .unwrap();
        assert_eq!(r.get("n"), Some(&Scalar::Int(5)));
        assert_eq!(r.get("big"), Some(&Scalar::UInt(u64::MAX)));
    }

    #[test]
    fn same_columns_ignores_order() {
        let a = Record::from_fields([("x", Scalar::Null), ("y", Scalar::Null)]).unwrap();
        let b = Record::from_fields([("y", Scalar::Null), ("x", Scalar::Null)]).unwrap();
        let c = Record::from_fields([("x", Scalar::Null)]).unwrap();
        assert!(a.same_columns(&b));
        assert!(!a.same_columns(&c));
    }
}
