//! `grafiki stats <input>` – compression statistics.

use super::load_dataset;
use crate::cli::DatasetArgs;
use anyhow::Result;
use grafiki_core::{CompressionStats, GrafikiBridge};

pub(crate) fn print_stats(s: &CompressionStats) {
    println!(
        "Original:    {:>10} bytes ({:.2} KB)",
        s.original_bytes, s.original_kb
    );
    println!(
        "Compressed:  {:>10} bytes ({:.2} KB)",
        s.compressed_bytes, s.compressed_kb
    );
    println!("Compression: {:>10.1}x", s.ratio);
    println!("Space saved: {:>10.1}%", s.percent_saved);
}

pub fn run_stats(bridge: &GrafikiBridge, args: &DatasetArgs) -> Result<()> {
    let dataset = load_dataset(args)?;
    let stats = bridge.compression_stats(&dataset)?;
    print_stats(&stats);
    Ok(())
}
