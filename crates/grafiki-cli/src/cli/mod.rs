//! CLI for building and inspecting Grafiki dataset links.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use grafiki_core::config;
use grafiki_core::GrafikiBridge;
use std::path::PathBuf;

use commands::{
    run_check, run_completions, run_decode, run_encode, run_link, run_manpage, run_stats,
    run_summary,
};

/// Top-level CLI for Grafiki links.
#[derive(Debug, Parser)]
#[command(name = "grafiki")]
#[command(about = "Grafiki: share tables as compressed web-app links", long_about = None)]
pub struct Cli {
    /// Web app base URL (overrides `base_url` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Input table plus dataset metadata, shared by the encoding commands.
#[derive(Debug, Args)]
pub struct DatasetArgs {
    /// JSON file holding an array of row objects.
    pub input: PathBuf,

    /// Dataset name (default: Dataset_<YYYYMMDD_HHMMSS>).
    #[arg(long)]
    pub name: Option<String>,

    /// Tag to attach; repeat for several. Order and duplicates are kept.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the web-app link for a table.
    Link {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print only the encoded token for a table.
    Encode {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Decode a token (or a full link) and print the dataset as JSON.
    Decode {
        /// Token, or a link containing `/d#<token>`.
        token: String,
    },

    /// Show compression statistics for a table.
    Stats {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Check a link against browser URL length limits.
    Check {
        /// Full link to check.
        url: String,

        /// Also show the verdict for this browser (chrome, firefox, safari, edge, ...).
        #[arg(long)]
        browser: Option<String>,
    },

    /// Show link, statistics and compatibility for a table.
    Summary {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Manpage,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(url) = cli.base_url {
            cfg.base_url = url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Link { dataset } => run_link(&bridge(&cfg)?, &dataset)?,
            CliCommand::Encode { dataset } => run_encode(&bridge(&cfg)?, &dataset)?,
            CliCommand::Decode { token } => run_decode(&token)?,
            CliCommand::Stats { dataset } => run_stats(&bridge(&cfg)?, &dataset)?,
            CliCommand::Check { url, browser } => run_check(&url, browser.as_deref()),
            CliCommand::Summary { dataset, json } => {
                run_summary(&bridge(&cfg)?, &dataset, json)?
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

fn bridge(cfg: &config::GrafikiConfig) -> Result<GrafikiBridge> {
    Ok(GrafikiBridge::from_config(cfg)?)
}

#[cfg(test)]
mod tests;
