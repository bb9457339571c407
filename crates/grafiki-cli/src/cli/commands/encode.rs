//! `grafiki encode <input>` – print only the token.

use super::load_dataset;
use crate::cli::DatasetArgs;
use anyhow::Result;
use grafiki_core::GrafikiBridge;

pub fn run_encode(bridge: &GrafikiBridge, args: &DatasetArgs) -> Result<()> {
    let dataset = load_dataset(args)?;
    println!("{}", bridge.compress(&dataset)?);
    Ok(())
}
