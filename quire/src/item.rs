// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use quire_primitives::{FlexLength, Level, is_resolved};

use crate::{Error, InlineGroup, TextRun};

/// A composition unit: either a leaf text run or a nested group.
///
/// The set of unit kinds is closed; everything the line-breaking optimizer
/// needs from a unit (its allocated extent, its elastic contribution, its
/// level and the justification entry point) is available here without
/// knowing which kind it holds.
#[derive(Clone, Debug, PartialEq)]
pub enum InlineItem {
    /// A leaf run of shaped text.
    Text(TextRun),
    /// A nested container.
    Group(InlineGroup),
}

impl InlineItem {
    /// The allocated inline extent of the unit.
    #[must_use]
    pub fn extent(&self) -> i32 {
        match self {
            Self::Text(run) => run.extent(),
            Self::Group(group) => group.extent(),
        }
    }

    /// The elastic inline contribution of the unit.
    #[must_use]
    pub fn advance(&self) -> FlexLength {
        match self {
            Self::Text(run) => run.advance(),
            Self::Group(group) => group.advance(),
        }
    }

    /// The block-progression offset of the unit itself.
    #[must_use]
    pub fn offset(&self) -> i32 {
        match self {
            Self::Text(run) => run.offset(),
            Self::Group(group) => group.offset(),
        }
    }

    /// The unit's offset as seen by its parent, including descendants.
    #[must_use]
    pub fn virtual_offset(&self) -> i32 {
        match self {
            Self::Text(run) => run.offset(),
            Self::Group(group) => group.virtual_offset(),
        }
    }

    /// The cross-axis extent of the unit's allocation rectangle.
    #[must_use]
    pub fn virtual_cross_extent(&self) -> i32 {
        match self {
            Self::Text(run) => run.cross_extent(),
            Self::Group(group) => group.virtual_cross_extent(),
        }
    }

    /// The embedding level of the unit.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Text(run) => run.level(),
            Self::Group(group) => group.level(),
        }
    }

    /// Sets the embedding level of the unit.
    pub fn set_level(&mut self, level: Level) {
        match self {
            Self::Text(run) => run.set_level(level),
            Self::Group(group) => group.set_level(level),
        }
    }

    /// Applies a line variation factor to the unit; see
    /// [`InlineGroup::apply_variation_factor`].
    ///
    /// Leaves never fail; a group fails unless it is in the `Measured`
    /// state.
    pub fn apply_variation_factor(
        &mut self,
        factor: f64,
        line_stretch: i32,
        line_shrink: i32,
    ) -> Result<bool, Error> {
        match self {
            Self::Text(run) => Ok(run.apply_variation_factor(factor, line_stretch, line_shrink)),
            Self::Group(group) => group.apply_variation_factor(factor, line_stretch, line_shrink),
        }
    }

    /// Collects descriptors for every text-run descendant, in document
    /// order; see [`InlineGroup::collect_runs`].
    pub fn collect_runs<'t>(&'t self, accumulator: &mut Vec<RunSpan<'t>>) {
        self.collect_runs_into(self.level(), accumulator);
    }

    pub(crate) fn collect_runs_into<'t>(&'t self, inherited: Level, out: &mut Vec<RunSpan<'t>>) {
        match self {
            Self::Text(run) => {
                let level = if is_resolved(run.level()) {
                    run.level()
                } else {
                    inherited
                };
                out.push(RunSpan { run, level });
            }
            Self::Group(group) => group.collect_runs_into(inherited, out),
        }
    }
}

impl From<TextRun> for InlineItem {
    fn from(run: TextRun) -> Self {
        Self::Text(run)
    }
}

impl From<InlineGroup> for InlineItem {
    fn from(group: InlineGroup) -> Self {
        Self::Group(group)
    }
}

/// A descriptor for one text run encountered during collection.
///
/// Carries the run's effective embedding level: the run's own level when
/// resolved, otherwise the level inherited from its innermost resolved
/// ancestor group.
#[derive(Clone, Copy, Debug)]
pub struct RunSpan<'t> {
    /// The visited run.
    pub run: &'t TextRun,
    /// The effective embedding level of the run.
    pub level: Level,
}
