//! Grafiki bridge core: turn a table into a single `base64(gzip(json))` link
//! for the Grafiki web app and check it against browser URL limits.

pub mod config;
pub mod error;
pub mod logging;

pub mod bridge;
pub mod codec;
pub mod compat;
pub mod dataset;
pub mod link;
pub mod stats;
pub mod table;

pub use bridge::{bridge_link, BridgeSummary, DatasetShape, GrafikiBridge};
pub use codec::{decode, encode, EncodedToken, TransportCodec};
pub use compat::{evaluate, CompatibilityReport, CompatibilityStatus};
pub use dataset::{build, Dataset, Record, Scalar};
pub use error::{BridgeError, DecodeError};
pub use link::{assemble, BaseUrl, DEFAULT_BASE_URL};
pub use stats::{stats, CompressionStats};
pub use table::{Cell, RowTable, TabularSource};
