//! `grafiki decode <token|url>` – print the decoded dataset.

use anyhow::{Context, Result};
use grafiki_core::codec::{decode, token_from_url};

pub fn run_decode(input: &str) -> Result<()> {
    let dataset = decode(token_from_url(input)).map_err(|e| {
        let kind = e.kind();
        anyhow::Error::new(e).context(format!("decode token ({kind})"))
    })?;
    let text = serde_json::to_string_pretty(&dataset).context("render dataset")?;
    println!("{text}");
    Ok(())
}
