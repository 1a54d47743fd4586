// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A bidirectional embedding level.
///
/// Even levels are left-to-right, odd levels right-to-left. Lower levels
/// represent outer, less deeply nested runs. A negative value means the
/// level has not been resolved yet; see [`UNRESOLVED_LEVEL`].
pub type Level = i8;

/// The sentinel for a level that has not been resolved.
///
/// Distinguished from an absent per-character level array only by
/// convention: lookups into runs without level data also report this value.
pub const UNRESOLVED_LEVEL: Level = -1;

/// Whether `level` carries resolved direction information.
#[must_use]
#[inline]
pub const fn is_resolved(level: Level) -> bool {
    level >= 0
}

/// Whether `level` is a resolved right-to-left level.
#[must_use]
#[inline]
pub const fn is_rtl(level: Level) -> bool {
    level >= 0 && level & 1 == 1
}

/// The weaker (more outer) of two levels.
///
/// An unresolved operand is treated as absent, so the other operand wins;
/// two unresolved operands stay unresolved. This is the rule containers use
/// to adopt the outermost level among their children.
#[must_use]
#[inline]
pub const fn lower_of(a: Level, b: Level) -> Level {
    if !is_resolved(a) {
        b
    } else if !is_resolved(b) {
        a
    } else if a < b {
        a
    } else {
        b
    }
}
