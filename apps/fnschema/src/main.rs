//! Fnschema CLI.
//!
//! The `fnschema` command compiles function manifests into tool-calling
//! schemas for LLM providers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod manifest;

#[derive(Parser)]
#[command(name = "fnschema")]
#[command(about = "Compile function manifests into LLM tool-calling schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile every function and print the rendered schemas
    Compile {
        /// Manifest file (.json or .toml)
        manifest: PathBuf,

        /// Provider wire format
        #[arg(long, short, default_value = "openai")]
        provider: String,

        /// Print ready-to-send invocation parameters instead of tool definitions
        #[arg(long, conflicts_with = "intermediate")]
        invocation: bool,

        /// Print the provider-agnostic intermediate schemas
        #[arg(long)]
        intermediate: bool,
    },

    /// Compile every function and report which ones fail
    Check {
        /// Manifest file (.json or .toml)
        manifest: PathBuf,
    },

    /// List the available providers
    Providers,

    /// Output the JSON Schema for manifest files
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match cli.command {
        Commands::Compile {
            manifest,
            provider,
            invocation,
            intermediate,
        } => {
            let output = if intermediate {
                commands::compile::Output::Intermediate
            } else if invocation {
                commands::compile::Output::Invocation
            } else {
                commands::compile::Output::Wire
            };
            commands::compile::execute(&manifest, &provider, output)
        }
        Commands::Check { manifest } => commands::check::execute(&manifest),
        Commands::Providers => commands::cmd_providers(),
        Commands::Schema => commands::cmd_schema(),
    }
}
