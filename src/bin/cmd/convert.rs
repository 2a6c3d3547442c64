// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command — CT ↔ tabular, dispatched by file extension.
//!
//! The spreadsheet (XLSX) and delimited-text (CSV) layers are thin
//! collaborators this crate doesn't implement (see
//! [`tablecodec::collaborators`]); this command uses a JSON string
//! matrix as the tabular interchange format in their place, so the
//! extension-dispatch and directory-recursion contract still has a real
//! tabular side to exercise end to end.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::Args;

use tablecodec::format::{read_ct, write_ct};
use tablecodec::projection::{lift, project};
use tablecodec::table::Table;

const CT_EXTENSION: &str = "ct";
const TABULAR_EXTENSION: &str = "json";

/// Convert a CT file to its tabular JSON form, or back, by extension.
/// Given a directory, recursively converts every `.ct` file found.
#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    /// CT file, tabular JSON file, or a directory of `.ct` files
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Override the embedded creation timestamp (CT → tabular direction
    /// ignores this; tabular → CT uses it verbatim if given)
    #[arg(long)]
    pub timestamp: Option<String>,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        if self.input.is_dir() {
            let mut failures = 0usize;
            for entry in walk_ct_files(&self.input)? {
                if let Err(err) = convert_file(&entry, self.timestamp.as_deref()) {
                    eprintln!("{}: {err}", entry.display());
                    failures += 1;
                }
            }
            if failures > 0 {
                bail!("{failures} file(s) failed to convert");
            }
            return Ok(());
        }

        if !self.input.is_file() {
            bail!("no such file or directory: {}", self.input.display());
        }
        convert_file(&self.input, self.timestamp.as_deref())
    }
}

fn walk_ct_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            found.extend(walk_ct_files(&path)?);
        } else if path.extension().and_then(|e| e.to_str()) == Some(CT_EXTENSION) {
            found.push(path);
        }
    }
    Ok(found)
}

fn convert_file(input: &Path, timestamp: Option<&str>) -> Result<()> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| anyhow!("file has no extension: {}", input.display()))?;

    match extension {
        CT_EXTENSION => ct_to_tabular(input),
        TABULAR_EXTENSION => tabular_to_ct(input, timestamp),
        other => bail!("unsupported extension: {other}"),
    }
}

fn sibling_with_extension(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let stem = stem.strip_suffix("_converted").unwrap_or(stem);
    input.with_file_name(format!("{stem}.{extension}"))
}

fn ct_to_tabular(input: &Path) -> Result<()> {
    let outcome = read_ct(input)?;
    for warning in &outcome.warnings {
        tracing::warn!(file = %input.display(), "{warning}");
    }
    let matrix = project(&outcome.table);
    let output = sibling_with_extension(input, TABULAR_EXTENSION);
    std::fs::write(&output, serde_json::to_string_pretty(&matrix)?)?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

fn tabular_to_ct(input: &Path, timestamp: Option<&str>) -> Result<()> {
    let raw = std::fs::read_to_string(input)?;
    let matrix: Vec<Vec<String>> = serde_json::from_str(&raw)?;
    let timestamp = timestamp
        .map(str::to_string)
        .unwrap_or_else(|| source_timestamp(input));
    let table: Table = lift(&matrix, timestamp)?;
    let output = sibling_with_extension(input, CT_EXTENSION);
    write_ct(&output, &table)?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

fn source_timestamp(input: &Path) -> String {
    std::fs::metadata(input)
        .and_then(|m| m.modified())
        .ok()
        .map(chrono::DateTime::<chrono::Local>::from)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}
