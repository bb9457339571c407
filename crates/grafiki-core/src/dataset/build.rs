//! Normalize a tabular source into a [`Dataset`].

use super::{Dataset, Record, Scalar};
use crate::error::BridgeError;
use crate::table::{Cell, TabularSource};
use chrono::{Local, NaiveDateTime};

/// Prefix of generated dataset names.
pub const DEFAULT_NAME_PREFIX: &str = "Dataset_";

const DEFAULT_NAME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build a dataset from `source`, naming it from the local clock when `name`
/// is absent or empty.
pub fn build<T>(
    source: &T,
    name: Option<&str>,
    tags: Option<Vec<String>>,
) -> Result<Dataset, BridgeError>
where
    T: TabularSource + ?Sized,
{
    build_at(source, name, tags, Local::now().naive_local())
}

/// [`build`] with an explicit clock reading for the default name.
pub fn build_at<T>(
    source: &T,
    name: Option<&str>,
    tags: Option<Vec<String>>,
    now: NaiveDateTime,
) -> Result<Dataset, BridgeError>
where
    T: TabularSource + ?Sized,
{
    let columns = source.columns();
    for (i, col) in columns.iter().enumerate() {
        if columns[..i].contains(col) {
            return Err(BridgeError::InvalidInput(format!(
                "duplicate column `{col}`"
            )));
        }
    }

    let mut data = Vec::with_capacity(source.row_count());
    for (row_idx, row) in source.rows().enumerate() {
        if row.len() != columns.len() {
            return Err(BridgeError::InvalidInput(format!(
                "row {row_idx} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
        let fields = columns
            .iter()
            .zip(row)
            .map(|(col, cell)| (col.as_str(), scalar_from_cell(cell)));
        data.push(Record::from_fields(fields)?);
    }

    let name = match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => default_name(now),
    };
    let tags = tags.unwrap_or_default();

    tracing::debug!(
        rows = data.len(),
        columns = columns.len(),
        name = %name,
        "built dataset"
    );
    Ok(Dataset::from_wire(data, name, tags))
}

/// `Dataset_<YYYYMMDD_HHMMSS>` for the given instant.
pub fn default_name(now: NaiveDateTime) -> String {
    format!("{DEFAULT_NAME_PREFIX}{}", now.format(DEFAULT_NAME_FORMAT))
}

pub fn default_name_now() -> String {
    default_name(Local::now().naive_local())
}

/// Primitive cells pass through; dates and other values become their text form.
fn scalar_from_cell(cell: &Cell) -> Scalar {
    match cell {
        Cell::Null => Scalar::Null,
        Cell::Bool(b) => Scalar::Bool(*b),
        Cell::Int(i) => Scalar::Int(*i),
        Cell::UInt(u) => Scalar::UInt(*u),
        Cell::Float(f) => Scalar::Float(*f),
        Cell::Str(s) => Scalar::Str(s.clone()),
        Cell::Date(d) => Scalar::Str(d.to_string()),
        Cell::DateTime(dt) => Scalar::Str(dt.to_string()),
        Cell::Other(s) => Scalar::Str(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RowTable;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap()
    }

    fn sample() -> RowTable {
        RowTable::new(["x", "y"])
            .with_row([Cell::Int(1), Cell::from("a")])
            .with_row([Cell::Int(2), Cell::from("b")])
    }

    #[test]
    fn keeps_row_and_column_order() {
        let d = build_at(&sample(), Some("S"), None, fixed_now()).unwrap();
        assert_eq!(d.name(), "S");
        assert!(d.tags().is_empty());
        assert_eq!(d.columns(), ["x", "y"]);
        assert_eq!(d.data()[1].get("x"), Some(&Scalar::Int(2)));
        assert_eq!(d.data()[1].get("y"), Some(&Scalar::Str("b".into())));
    }

    #[test]
    fn default_name_uses_clock() {
        let d = build_at(&sample(), None, None, fixed_now()).unwrap();
        assert_eq!(d.name(), "Dataset_20240309_070501");
        let d = build_at(&sample(), Some(""), None, fixed_now()).unwrap();
        assert_eq!(d.name(), "Dataset_20240309_070501");
    }

    #[test]
    fn default_name_now_has_expected_shape() {
        let name = default_name_now();
        let rest = name.strip_prefix(DEFAULT_NAME_PREFIX).unwrap();
        let (date, time) = rest.split_once('_').unwrap();
        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().chain(time.chars()).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn tags_are_kept_verbatim() {
        let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let d = build_at(&sample(), Some("S"), Some(tags.clone()), fixed_now()).unwrap();
        assert_eq!(d.tags(), tags.as_slice());
    }

    #[test]
    fn non_primitive_cells_are_stringified() {
        let when = fixed_now();
        let t = RowTable::new(["d", "ts", "o"]).with_row([
            Cell::Date(when.date()),
            Cell::DateTime(when),
            Cell::other(std::net::Ipv4Addr::LOCALHOST),
        ]);
        let d = build_at(&t, Some("S"), None, when).unwrap();
        let r = &d.data()[0];
        assert_eq!(r.get("d"), Some(&Scalar::Str("2024-03-09".into())));
        assert_eq!(r.get("ts"), Some(&Scalar::Str("2024-03-09 07:05:01".into())));
        assert_eq!(r.get("o"), Some(&Scalar::Str("127.0.0.1".into())));
    }

    #[test]
    fn ragged_rows_and_duplicate_columns_are_rejected() {
        let ragged = RowTable::new(["a", "b"]).with_row([Cell::Int(1)]);
        assert!(matches!(
            build_at(&ragged, Some("S"), None, fixed_now()),
            Err(BridgeError::InvalidInput(_))
        ));

        let dup = RowTable::new(["a", "a"]).with_row([Cell::Int(1), Cell::Int(2)]);
        assert!(matches!(
            build_at(&dup, Some("S"), None, fixed_now()),
            Err(BridgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_table_builds_empty_dataset() {
        let d = build_at(&RowTable::new(["a"]), Some("E"), None, fixed_now()).unwrap();
        assert!(d.data().is_empty());
    }
}
