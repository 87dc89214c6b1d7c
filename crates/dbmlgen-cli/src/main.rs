use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dbmlgen_config::FileFormat;
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;
use commands::{cmd_generate, cmd_init, cmd_print};

/// dbmlgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "dbmlgen", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize dbmlgen.json with defaults.
    Init,
    /// Render the schema description and write the DBML file.
    Generate {
        /// Schema description to read instead of the configured one.
        #[arg(short = 's', long = "schema")]
        schema: Option<PathBuf>,
        /// Parse the schema description as this format instead of guessing
        /// from its extension.
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<FileFormat>,
        /// Directory to write into instead of the configured one.
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
        /// Skip join tables for many-to-many relations.
        #[arg(long = "no-many-to-many")]
        no_many_to_many: bool,
    },
    /// Render the schema description to stdout.
    Print {
        #[arg(short = 's', long = "schema")]
        schema: Option<PathBuf>,
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<FileFormat>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Init => cmd_init(),
        Commands::Generate {
            schema,
            format,
            out,
            no_many_to_many,
        } => cmd_generate(schema, format, out, no_many_to_many).await,
        Commands::Print { schema, format } => cmd_print(schema, format),
    }
}
