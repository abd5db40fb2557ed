//! CLI for the dropgate file-intake engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dropgate_core::config;
use std::path::PathBuf;

use commands::{run_check, run_ingest, run_types};

/// Top-level CLI for the dropgate file-intake engine.
#[derive(Debug, Parser)]
#[command(name = "dropgate")]
#[command(about = "dropgate: file-intake validation and normalization", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one intake batch over the given files and report the outcome.
    Ingest {
        /// Files to offer for intake.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Override the configured per-batch file count limit.
        #[arg(long, value_name = "N")]
        max_count: Option<u32>,

        /// Override the configured per-file size limit in bytes.
        #[arg(long, value_name = "BYTES")]
        max_size: Option<u64>,

        /// Emit the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check a single file against the active policy (type and size verdicts).
    Check {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print the active MIME type → extension map.
    Types,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Ingest {
                paths,
                max_count,
                max_size,
                json,
            } => {
                if let Some(n) = max_count {
                    cfg.max_upload_count = Some(n);
                }
                if let Some(bytes) = max_size {
                    cfg.max_file_size = bytes;
                }
                run_ingest(cfg, &paths, json).await?;
            }
            CliCommand::Check { path } => run_check(&cfg, &path).await?,
            CliCommand::Types => run_types(&cfg),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
