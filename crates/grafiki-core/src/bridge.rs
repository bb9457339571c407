//! High-level bridge: dataset in, link plus size and compatibility summary out.
//!
//! This is what a rendering layer (notebook widget, CLI printer) consumes; it
//! holds no state beyond the validated base URL and compression level.

use crate::codec::{EncodedToken, TransportCodec};
use crate::compat::{self, CompatibilityReport, CompatibilityStatus};
use crate::config::GrafikiConfig;
use crate::dataset::{self, Dataset};
use crate::error::BridgeError;
use crate::link::BaseUrl;
use crate::stats::{self, CompressionStats};
use crate::table::TabularSource;
use serde::Serialize;

/// How many column names a summary previews.
pub const COLUMN_PREVIEW: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct GrafikiBridge {
    base_url: BaseUrl,
    codec: TransportCodec,
}

/// Row/column counts plus the first few column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetShape {
    pub rows: usize,
    pub columns: usize,
    pub column_preview: Vec<String>,
    /// More columns exist than `column_preview` lists.
    pub more_columns: bool,
}

impl DatasetShape {
    pub fn of(dataset: &Dataset) -> Self {
        let columns = dataset.columns();
        Self {
            rows: dataset.row_count(),
            columns: columns.len(),
            column_preview: columns
                .iter()
                .take(COLUMN_PREVIEW)
                .map(|c| c.to_string())
                .collect(),
            more_columns: columns.len() > COLUMN_PREVIEW,
        }
    }
}

/// Everything a presentation layer needs to show one link.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeSummary {
    pub name: String,
    pub url: String,
    pub shape: DatasetShape,
    pub stats: CompressionStats,
    pub report: CompatibilityReport,
    pub status: CompatibilityStatus,
}

impl GrafikiBridge {
    pub fn new(base_url: &str) -> Result<Self, BridgeError> {
        Ok(Self {
            base_url: BaseUrl::parse(base_url)?,
            codec: TransportCodec::default(),
        })
    }

    pub fn from_config(cfg: &GrafikiConfig) -> Result<Self, BridgeError> {
        Ok(Self {
            base_url: cfg.base_url()?,
            codec: TransportCodec::with_level(cfg.compression()?),
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn compress(&self, dataset: &Dataset) -> Result<EncodedToken, BridgeError> {
        self.codec.encode(dataset)
    }

    pub fn create_link(&self, dataset: &Dataset) -> Result<String, BridgeError> {
        let token = self.compress(dataset)?;
        Ok(self.base_url.link(&token))
    }

    pub fn compression_stats(&self, dataset: &Dataset) -> Result<CompressionStats, BridgeError> {
        stats::stats_with(&self.codec, dataset)
    }

    pub fn check_compatibility(&self, url: &str) -> CompatibilityReport {
        compat::evaluate(url)
    }

    /// Encode once and derive the link, stats and compatibility verdict from it.
    pub fn summarize(&self, dataset: &Dataset) -> Result<BridgeSummary, BridgeError> {
        let token = self.compress(dataset)?;
        let original = crate::codec::json::to_wire_json(dataset.data())?.len();
        let stats = CompressionStats::from_sizes(original, token.len());
        let url = self.base_url.link(&token);
        let report = self.check_compatibility(&url);
        let status = report.status();

        tracing::info!(
            name = dataset.name(),
            rows = dataset.row_count(),
            url_length = report.url_length,
            status = %status,
            "summarized dataset link"
        );

        Ok(BridgeSummary {
            name: dataset.name().to_string(),
            url,
            shape: DatasetShape::of(dataset),
            stats,
            report,
            status,
        })
    }
}

/// Build a dataset from `source` and return its link in one call.
pub fn bridge_link<T>(
    source: &T,
    name: Option<&str>,
    tags: Option<Vec<String>>,
    base_url: &str,
) -> Result<String, BridgeError>
where
    T: TabularSource + ?Sized,
{
    let bridge = GrafikiBridge::new(base_url)?;
    let dataset = dataset::build(source, name, tags)?;
    bridge.create_link(&dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, token_from_url};
    use crate::link::DEFAULT_BASE_URL;
    use crate::table::{Cell, RowTable};

    fn table() -> RowTable {
        RowTable::new(["x", "y"])
            .with_row([Cell::Int(1), Cell::from("a")])
            .with_row([Cell::Int(2), Cell::from("b")])
            .with_row([Cell::Int(3), Cell::from("c")])
    }

    #[test]
    fn bridge_link_points_at_default_app() {
        let url = bridge_link(
            &table(),
            Some("Test DF"),
            Some(vec!["unit".into(), "test".into()]),
            DEFAULT_BASE_URL,
        )
        .unwrap();
        assert!(url.starts_with("https://www.grafiki.app/d#"));
        let back = decode(token_from_url(&url)).unwrap();
        assert_eq!(back.name(), "Test DF");
        assert_eq!(back.tags(), ["unit", "test"]);
    }

    #[test]
    fn new_rejects_empty_base_url() {
        assert!(matches!(
            GrafikiBridge::new("/"),
            Err(BridgeError::Configuration(_))
        ));
    }

    #[test]
    fn summarize_agrees_with_individual_operations() {
        let bridge = GrafikiBridge::new("https://example.org/").unwrap();
        let d = dataset::build(&table(), Some("S"), None).unwrap();
        let summary = bridge.summarize(&d).unwrap();

        assert_eq!(summary.url, bridge.create_link(&d).unwrap());
        assert_eq!(summary.stats, bridge.compression_stats(&d).unwrap());
        assert_eq!(summary.report.url_length, summary.url.chars().count());
        assert_eq!(summary.status, CompatibilityStatus::Compatible);
        assert_eq!(
            summary.shape,
            DatasetShape {
                rows: 3,
                columns: 2,
                column_preview: vec!["x".into(), "y".into()],
                more_columns: false,
            }
        );
    }

    #[test]
    fn shape_previews_first_five_columns() {
        let cols: Vec<String> = (0..7).map(|i| format!("c{i}")).collect();
        let t = RowTable::new(cols.clone()).with_row((0..7).map(Cell::Int));
        let d = dataset::build(&t, Some("wide"), None).unwrap();
        let shape = DatasetShape::of(&d);
        assert_eq!(shape.columns, 7);
        assert_eq!(shape.column_preview, cols[..5]);
        assert!(shape.more_columns);
    }

    #[test]
    fn from_config_applies_level_and_url() {
        let cfg = GrafikiConfig {
            base_url: "http://localhost:5173".into(),
            compression_level: Some(1),
        };
        let bridge = GrafikiBridge::from_config(&cfg).unwrap();
        assert_eq!(bridge.base_url().as_str(), "http://localhost:5173");
        let d = dataset::build(&table(), Some("S"), None).unwrap();
        let url = bridge.create_link(&d).unwrap();
        assert_eq!(decode(token_from_url(&url)).unwrap(), d);
    }
}
