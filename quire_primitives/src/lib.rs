// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vocabulary types for elastic inline composition.
//!
//! This crate is the lightweight, `no_std`-friendly base layer of the quire
//! composition engine. It holds the small, typed concepts the engine and its
//! collaborators (shapers, line breakers, encoders) need to agree on:
//!
//! - [`FlexLength`]: a length with minimum/optimum/maximum extents and the
//!   arithmetic used to compose shrink/stretch budgets;
//! - [`Level`]: bidirectional embedding levels and their propagation helper;
//! - [`mirror`]: character mirroring for reversed right-to-left runs,
//!   backed by ICU data.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided
//!   for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use quire_primitives::FlexLength;
//!
//! let glue = FlexLength::new(2_500, 3_333, 5_000).unwrap();
//! assert!(glue.is_elastic());
//! assert_eq!((glue + glue).try_sub(glue), Ok(glue));
//! ```
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod flex;
mod level;

pub mod mirror;

pub use flex::{FlexLength, FlexLengthError};
pub use level::{Level, UNRESOLVED_LEVEL, is_resolved, is_rtl, lower_of};
