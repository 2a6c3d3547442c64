// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command — show a CT file's header, schema, and read warnings.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tablecodec::format::read_ct;

/// Show header, schema, and read warnings for a CT file.
#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// CT file to inspect
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        let outcome = read_ct(&self.input)?;
        let table = &outcome.table;

        println!("file: {}", self.input.display());
        println!("timestamp: {}", table.header_timestamp);
        println!("columns: {}", table.schema.len());
        println!("rows: {}", table.row_count());
        for (name, ty) in &table.schema.columns {
            println!("  {name}: {ty}");
        }

        if outcome.warnings.is_empty() {
            println!("warnings: none");
        } else {
            println!("warnings:");
            for warning in &outcome.warnings {
                println!("  {warning}");
            }
        }

        Ok(())
    }
}
