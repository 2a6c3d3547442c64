// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # tablecodec CLI
//!
//! Command-line tool for reading and converting CT binary table files.
//!
//! ## Usage
//!
//! ```sh
//! # Show header/schema/warnings for a CT file
//! tablecodec inspect input.ct
//!
//! # Print a CT file's schema as JSON
//! tablecodec schema input.ct
//!
//! # Convert a CT file to its tabular JSON form, or back
//! tablecodec convert input.ct
//! tablecodec convert input.json
//!
//! # Recursively convert every .ct file under a directory
//! tablecodec convert ./data
//! ```

mod cmd;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertArgs, InspectArgs, SchemaArgs};

/// tablecodec - CT binary table format codec
#[derive(Parser)]
#[command(name = "tablecodec")]
#[command(about = "Bidirectional codec for the CT binary table format", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Show header, schema, and read warnings
    Inspect(InspectArgs),

    /// Print a CT file's schema as JSON
    Schema(SchemaArgs),

    /// Convert CT <-> tabular JSON, dispatched by extension
    Convert(ConvertArgs),
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Schema(cmd) => cmd.run(),
        Commands::Convert(cmd) => cmd.run(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
