// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema command — print a CT file's column/type pairs as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tablecodec::format::read_ct;

/// Print a CT file's schema as JSON.
#[derive(Args, Clone, Debug)]
pub struct SchemaArgs {
    /// CT file to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Serialize)]
struct ColumnView {
    name: String,
    r#type: String,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let outcome = read_ct(&self.input)?;
        let columns: Vec<ColumnView> = outcome
            .table
            .schema
            .columns
            .iter()
            .map(|(name, ty)| ColumnView {
                name: name.clone(),
                r#type: ty.name(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&columns)?);
        Ok(())
    }
}
