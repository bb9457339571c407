//! Size accounting: payload JSON bytes vs. the token text that travels in the URL.

use crate::codec::{json, TransportCodec};
use crate::dataset::Dataset;
use crate::error::BridgeError;
use serde::Serialize;

/// Sizes and derived savings for one dataset.
///
/// `ratio` can be below 1 and `percent_saved` negative for tiny inputs, where
/// gzip and base64 overhead outweigh the savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    /// UTF-8 length of the JSON text of the rows alone (no envelope).
    pub original_bytes: usize,
    /// Length of the base64 token text.
    pub compressed_bytes: usize,
    pub original_kb: f64,
    pub compressed_kb: f64,
    pub ratio: f64,
    pub percent_saved: f64,
}

impl CompressionStats {
    /// Derive the metrics from the two sizes, guarding both divisions.
    pub fn from_sizes(original_bytes: usize, compressed_bytes: usize) -> Self {
        let original = original_bytes as f64;
        let compressed = compressed_bytes as f64;
        let ratio = if compressed_bytes > 0 {
            original / compressed
        } else {
            0.0
        };
        let percent_saved = if original_bytes > 0 {
            (original - compressed) / original * 100.0
        } else {
            0.0
        };
        Self {
            original_bytes,
            compressed_bytes,
            original_kb: original / 1024.0,
            compressed_kb: compressed / 1024.0,
            ratio,
            percent_saved,
        }
    }
}

/// Stats using the default compression level.
pub fn stats(dataset: &Dataset) -> Result<CompressionStats, BridgeError> {
    stats_with(&TransportCodec::default(), dataset)
}

pub fn stats_with(
    codec: &TransportCodec,
    dataset: &Dataset,
) -> Result<CompressionStats, BridgeError> {
    let original = json::to_wire_json(dataset.data())?.len();
    let token = codec.encode(dataset)?;
    Ok(CompressionStats::from_sizes(original, token.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Record, Scalar};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn from_sizes_computes_ratio_and_savings() {
        let s = CompressionStats::from_sizes(2048, 512);
        assert!(approx(s.ratio, 4.0));
        assert!(approx(s.percent_saved, 75.0));
        assert!(approx(s.original_kb, 2.0));
        assert!(approx(s.compressed_kb, 0.5));
    }

    #[test]
    fn from_sizes_guards_zero_divisors() {
        let s = CompressionStats::from_sizes(0, 0);
        assert_eq!(s.ratio, 0.0);
        assert_eq!(s.percent_saved, 0.0);
        let s = CompressionStats::from_sizes(0, 40);
        assert_eq!(s.ratio, 0.0);
        assert_eq!(s.percent_saved, 0.0);
    }

    #[test]
    fn tiny_inputs_may_grow() {
        let s = CompressionStats::from_sizes(10, 40);
        assert!(s.ratio < 1.0);
        assert!(approx(s.percent_saved, -300.0));
    }

    #[test]
    fn original_bytes_counts_rows_only() {
        let rows = ["a", "b", "c"]
            .iter()
            .zip(1..)
            .map(|(y, x)| {
                Record::from_fields([("x", Scalar::Int(x)), ("y", Scalar::Str(y.to_string()))])
                    .unwrap()
            })
            .collect();
        let d = Dataset::from_records(rows, "Test DF", vec!["unit".into(), "test".into()]).unwrap();
        let s = stats(&d).unwrap();
        // len('[{"x": 1, "y": "a"}, {"x": 2, "y": "b"}, {"x": 3, "y": "c"}]')
        assert_eq!(s.original_bytes, 60);
        assert_eq!(s.compressed_bytes, crate::codec::encode(&d).unwrap().len());
    }

    #[test]
    fn empty_dataset_still_counts_the_brackets() {
        let d = Dataset::from_records(vec![], "empty", vec![]).unwrap();
        let s = stats(&d).unwrap();
        assert_eq!(s.original_bytes, 2);
        assert!(s.compressed_bytes > 0);
        assert!(s.percent_saved < 0.0);
    }
}
