// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `quire`.
//!
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared helpers can live in one place.
//! - If you want to add new tests, put them into the module matching their topic: glue
//!   arithmetic into `flex.rs`, reversal and mirroring into `bidi.rs`, tree building and
//!   justification into `compose.rs`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod bidi;
