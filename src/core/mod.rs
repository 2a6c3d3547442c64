// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout tablecodec.
//!
//! This module provides the foundational types for the library:
//! - [`CtError`] - the CT codec error taxonomy
//! - [`Cell`] / [`TypeTag`] - the typed value system

pub mod error;
pub mod value;

pub use error::{CtError, Result};
pub use value::{Cell, TypeTag};
