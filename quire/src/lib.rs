// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elastic-spacing and bidirectional inline composition.
//!
//! This crate is the composition core of a document-formatting engine: it
//! assembles runs of already-shaped text into a tree of positioned inline
//! areas that a line-breaking optimizer can justify and an output encoder
//! can serialize. The shaping stage supplies [`TextRun`] leaves with
//! resolved embedding levels and optional per-character adjustments;
//! [`InlineGroup`] containers aggregate them, propagate the weakest level
//! upward and track the allocation rectangle; the optimizer reads each
//! unit's [`FlexLength`] contribution to compute shrink/stretch budgets and
//! applies its chosen variation factor through
//! [`InlineGroup::apply_variation_factor`].
//!
//! The tree is built and justified on a single logical thread per document.
//! Nothing here blocks or performs I/O, and all mutation requires `&mut`
//! access, so independent documents may be formatted concurrently without
//! synchronization.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided
//!   for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use quire::{FlexLength, InlineGroup, TextRun};
//!
//! let mut line = InlineGroup::new();
//! line.add_child(TextRun::new("fjord", 0, 0).with_advance(FlexLength::fixed(31_000)))?;
//! line.add_child(
//!     TextRun::new(" ", 0, 0).with_advance(FlexLength::new(2_500, 3_333, 5_000).unwrap()),
//! )?;
//! line.mark_measured()?;
//! line.apply_variation_factor(0.5, 1_667, 833)?;
//! assert_eq!(line.extent(), 31_000 + 3_333 + 833);
//! # Ok::<(), quire::Error>(())
//! ```
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub use quire_primitives;

mod error;
mod group;
mod item;
mod run;

pub use error::Error;
pub use group::{GroupState, InlineGroup};
pub use item::{InlineItem, RunSpan};
pub use run::{GlyphAdjust, TextRun};

pub use quire_primitives::{FlexLength, FlexLengthError, Level, UNRESOLVED_LEVEL};
