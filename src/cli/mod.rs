//! CLI command definitions and handlers

mod history;
mod index;
mod manifest;
mod serve;

pub use history::HistoryConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codetrend - structural code metrics across git history
#[derive(Parser, Debug)]
#[command(name = "codetrend")]
#[command(
    version,
    about = "Mine a file's git history into a chronological series of structural code metrics",
    after_help = "\
Examples:
  codetrend . history src/app.py                 Build git_log_db.json for src/app.py
  codetrend . history src/app.py -o trends.json  Custom artifact path
  codetrend . index --summaries                  Index the workspace with per-file summaries
  codetrend . manifest --name my-project         Emit the project manifest
  codetrend . serve --port 5000                  Serve the artifacts read-only"
)]
pub struct Cli {
    /// Path to repository (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the history database for one tracked file
    #[command(after_help = "\
Examples:
  codetrend . history app.py                     History of app.py in the current repo
  codetrend /path/to/repo history src/app.py     History in a specific repo
  codetrend . history app.py -o trends.json      Write the artifact somewhere else")]
    History {
        /// Tracked file, relative to the repository root
        file: String,

        /// Output artifact path
        #[arg(long, short = 'o', default_value = "git_log_db.json")]
        output: PathBuf,
    },

    /// Build the workspace index artifact
    Index {
        /// Attach structural summaries to recognized source files
        #[arg(long)]
        summaries: bool,

        /// Output artifact path
        #[arg(long, short = 'o', default_value = "workspace_index.json")]
        output: PathBuf,
    },

    /// Build the project manifest artifact (embeds the workspace index)
    Manifest {
        /// Index artifact to embed
        #[arg(long, default_value = "workspace_index.json")]
        index: PathBuf,

        /// Project name recorded in the manifest
        #[arg(long, default_value = "codetrend-workspace")]
        name: String,

        /// One-line project description
        #[arg(long, default_value = "Workspace indexed by codetrend")]
        description: String,

        /// Entry-point files to advertise (repeatable)
        #[arg(long = "main-file")]
        main_files: Vec<String>,

        /// Output artifact path
        #[arg(long, short = 'o', default_value = "codebot.json")]
        output: PathBuf,
    },

    /// Serve the index and manifest artifacts read-only over HTTP
    Serve {
        /// Address to bind (loopback only by default)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Index artifact to serve
        #[arg(long, default_value = "workspace_index.json")]
        index: PathBuf,

        /// Manifest artifact to serve
        #[arg(long, default_value = "codebot.json")]
        manifest: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::History { file, output } => history::run(&HistoryConfig {
            repo_path: cli.path,
            file_path: file,
            artifact_path: output,
        }),

        Commands::Index { summaries, output } => index::run(&cli.path, summaries, &output),

        Commands::Manifest {
            index,
            name,
            description,
            main_files,
            output,
        } => manifest::run(&index, &name, &description, main_files, &output),

        Commands::Serve {
            host,
            port,
            index,
            manifest,
        } => serve::run(index, manifest, &host, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_history_command() {
        let cli = Cli::try_parse_from(["codetrend", ".", "history", "app.py"]).unwrap();
        match cli.command {
            Commands::History { file, output } => {
                assert_eq!(file, "app.py");
                assert_eq!(output, PathBuf::from("git_log_db.json"));
            }
            other => panic!("expected History, got {other:?}"),
        }
    }

    #[test]
    fn test_serve_binds_loopback_by_default() {
        let cli = Cli::try_parse_from(["codetrend", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port, .. } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 5000);
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["codetrend", "index"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.log_level, "info");
    }
}
