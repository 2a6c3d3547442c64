// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

pub mod convert;
pub mod inspect;
pub mod schema;

pub use convert::ConvertArgs;
pub use inspect::InspectArgs;
pub use schema::SchemaArgs;
