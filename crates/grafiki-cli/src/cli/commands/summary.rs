//! `grafiki summary <input>` – link, statistics and compatibility in one view.

use super::check::print_report;
use super::load_dataset;
use super::stats::print_stats;
use crate::cli::DatasetArgs;
use anyhow::{Context, Result};
use grafiki_core::GrafikiBridge;

pub fn run_summary(bridge: &GrafikiBridge, args: &DatasetArgs, json: bool) -> Result<()> {
    let dataset = load_dataset(args)?;
    let summary = bridge.summarize(&dataset)?;

    if json {
        let text = serde_json::to_string_pretty(&summary).context("render summary")?;
        println!("{text}");
        return Ok(());
    }

    let shape = &summary.shape;
    println!("Dataset: {}", summary.name);
    println!("Rows:    {}", shape.rows);
    println!(
        "Columns: {} ({}{})",
        shape.columns,
        shape.column_preview.join(", "),
        if shape.more_columns { ", ..." } else { "" }
    );
    print_stats(&summary.stats);
    print_report(&summary.report);
    if summary.status.is_usable() {
        println!("Link: {}", summary.url);
    } else {
        println!("Link withheld: no browser accepts a URL this long.");
    }
    Ok(())
}
