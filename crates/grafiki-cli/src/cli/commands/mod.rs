//! CLI command handlers, one file per command.

mod check;
mod completions;
mod decode;
mod encode;
mod link;
mod stats;
mod summary;

pub use check::run_check;
pub use completions::{run_completions, run_manpage};
pub use decode::run_decode;
pub use encode::run_encode;
pub use link::run_link;
pub use stats::run_stats;
pub use summary::run_summary;

use super::DatasetArgs;
use anyhow::Result;
use grafiki_core::dataset::{self, Dataset};
use grafiki_core::table;

/// Read the input table and build the dataset the encoding commands share.
pub(crate) fn load_dataset(args: &DatasetArgs) -> Result<Dataset> {
    let rows = table::records_from_json_path(&args.input)?;
    let tags = (!args.tags.is_empty()).then(|| args.tags.clone());
    Ok(dataset::build(&rows, args.name.as_deref(), tags)?)
}
