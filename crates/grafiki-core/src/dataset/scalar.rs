//! JSON-representable cell values.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use std::fmt;

/// A cell value as it travels inside a dataset record.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Whether this value has a JSON representation.
    ///
    /// Only non-finite floats fail; JSON has no NaN or infinity.
    pub fn is_json_representable(&self) -> bool {
        match self {
            Scalar::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::UInt(u) => serializer.serialize_u64(*u),
            Scalar::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Scalar::Float(f) => Err(ser::Error::custom(format_args!(
                "float value {f} is not representable in JSON"
            ))),
            Scalar::Str(s) => serializer.serialize_str(s),
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON scalar (null, boolean, number or string)")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
        Ok(Scalar::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(i64::try_from(v).map(Scalar::Int).unwrap_or(Scalar::UInt(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        Ok(Scalar::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
        Ok(Scalar::Str(v))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_floats_fail_to_serialize() {
        assert!(serde_json::to_string(&Scalar::Float(f64::NAN)).is_err());
        assert!(serde_json::to_string(&Scalar::Float(f64::INFINITY)).is_err());
        assert!(!Scalar::Float(f64::NEG_INFINITY).is_json_representable());
        assert_eq!(serde_json::to_string(&Scalar::Float(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn deserializes_every_scalar_kind() {
        let v: Vec<Scalar> =
            serde_json::from_str(r#"[null, true, -1, 18446744073709551615, 1.0, "s"]"#).unwrap();
        assert_eq!(
            v,
            vec![
                Scalar::Null,
                Scalar::Bool(true),
                Scalar::Int(-1),
                Scalar::UInt(u64::MAX),
                Scalar::Float(1.0),
                Scalar::Str("s".to_string()),
            ]
        );
    }

    #[test]
    fn small_unsigned_values_come_back_as_int() {
        let v: Scalar = serde_json::from_str("7").unwrap();
        assert_eq!(v, Scalar::Int(7));
    }

    #[test]
    fn rejects_nested_values() {
        assert!(serde_json::from_str::<Scalar>("[1]").is_err());
        assert!(serde_json::from_str::<Scalar>(r#"{"a": 1}"#).is_err());
    }
}
