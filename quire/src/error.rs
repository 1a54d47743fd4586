// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::GroupState;

/// Error produced by fallible composition-tree operations.
///
/// Every variant signals a logic defect in the calling stage (the shaper or
/// the line-breaking optimizer), not a transient condition; none of them is
/// meant to be retried. The enclosing document pipeline is expected to abort
/// formatting of the current document and leave other documents unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A per-character index or range outside the run's text.
    IndexOutOfRange {
        /// The offending index (or range start).
        index: usize,
        /// The bound the index exceeded (text length, or range end).
        bound: usize,
    },
    /// A container was mutated in a lifecycle state that forbids it.
    InvalidState {
        /// The state the container was in.
        state: GroupState,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range (bound {bound})")
            }
            Self::InvalidState { state } => {
                write!(f, "operation not permitted on a {state} container")
            }
        }
    }
}

impl core::error::Error for Error {}
