//! `grafiki link <input>` – print the web-app link.

use super::load_dataset;
use crate::cli::DatasetArgs;
use anyhow::Result;
use grafiki_core::GrafikiBridge;

pub fn run_link(bridge: &GrafikiBridge, args: &DatasetArgs) -> Result<()> {
    let dataset = load_dataset(args)?;
    let url = bridge.create_link(&dataset)?;
    let report = bridge.check_compatibility(&url);
    if report.has_compatibility_issues {
        eprintln!(
            "warning: {} ({} characters)",
            report.status_text(),
            report.url_length
        );
    }
    println!("{url}");
    Ok(())
}
