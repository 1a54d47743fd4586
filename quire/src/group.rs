// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use quire_primitives::{FlexLength, Level, UNRESOLVED_LEVEL, is_resolved, lower_of};

use crate::{Error, InlineItem, RunSpan};

/// Lifecycle state of an [`InlineGroup`].
///
/// A group moves strictly forward: children are added while `Building`, the
/// extent and offsets become final in `Measured`, the one justification
/// pass moves it to `Justified`, and `Sealed` hands it to the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupState {
    /// Accepting children.
    Building,
    /// Extent and offsets final; awaiting justification.
    Measured,
    /// The variation factor has been applied.
    Justified,
    /// Handed to the output encoder; no further mutation.
    Sealed,
}

impl fmt::Display for GroupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Building => "building",
            Self::Measured => "measured",
            Self::Justified => "justified",
            Self::Sealed => "sealed",
        })
    }
}

/// An ordered container of inline composition units.
///
/// Groups aggregate leaves and nested groups into a paragraph's inline
/// content. They accumulate the children's allocated inline extent (when
/// auto-sizing), track the before/after span of the allocation rectangle,
/// and adopt the weakest (most outer) resolved embedding level observed
/// among their children.
///
/// The container owns its children exclusively; there are no references
/// from a child back to its parent. Where a child needs context from above
/// (an unresolved run inheriting its effective level), the information
/// flows down the recursion instead; see [`collect_runs`].
///
/// [`collect_runs`]: Self::collect_runs
#[derive(Clone, Debug, PartialEq)]
pub struct InlineGroup {
    children: Vec<InlineItem>,
    extent: i32,
    advance: FlexLength,
    offset: i32,
    level: Level,
    min_before_offset: i32,
    max_after_offset: i32,
    auto_extent: bool,
    state: GroupState,
}

impl InlineGroup {
    /// Creates an empty group with no extent and an unresolved level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            extent: 0,
            advance: FlexLength::ZERO,
            offset: 0,
            level: UNRESOLVED_LEVEL,
            min_before_offset: 0,
            max_after_offset: 0,
            auto_extent: false,
            state: GroupState::Building,
        }
    }

    /// Pre-sets a caller-fixed inline extent.
    ///
    /// A group whose extent is non-zero when the first child arrives keeps
    /// that extent; only groups still at zero auto-accumulate.
    #[must_use]
    pub fn with_extent(mut self, extent: i32) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the block-progression offset of the group itself.
    #[must_use]
    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Appends a child composition unit.
    ///
    /// Fails with [`Error::InvalidState`] once the group has left the
    /// `Building` state. The first child decides auto-sizing; every child
    /// updates the group's extent (when auto-sizing), elastic contribution,
    /// level and allocation rectangle. A child group still `Building` is
    /// frozen to `Measured` here: attaching it is the hand-over point.
    pub fn add_child(&mut self, child: impl Into<InlineItem>) -> Result<(), Error> {
        match self.state {
            GroupState::Building => {}
            state => return Err(Error::InvalidState { state }),
        }
        let mut child = child.into();
        if self.children.is_empty() {
            self.auto_extent = self.extent == 0;
        }
        if let InlineItem::Group(group) = &mut child {
            if group.state == GroupState::Building {
                group.state = GroupState::Measured;
            }
        }
        if self.auto_extent {
            self.extent += child.extent();
        }
        self.advance = self.advance + child.advance();
        self.level = lower_of(self.level, child.level());
        let child_before = child.virtual_offset();
        let child_after = child_before + child.virtual_cross_extent();
        self.min_before_offset = self.min_before_offset.min(child_before);
        self.max_after_offset = self.max_after_offset.max(child_after);
        self.children.push(child);
        Ok(())
    }

    /// The children, in document order.
    #[must_use]
    #[inline]
    pub fn children(&self) -> &[InlineItem] {
        &self.children
    }

    /// Mutable access to the children, in document order.
    ///
    /// This serves passes that rework committed leaves in place, such as
    /// bidi reversal and mirroring; membership and sizing stay under
    /// [`add_child`]'s control.
    ///
    /// [`add_child`]: Self::add_child
    #[inline]
    pub fn children_mut(&mut self) -> &mut [InlineItem] {
        &mut self.children
    }

    /// The number of direct children.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The allocated inline extent of the group.
    #[must_use]
    #[inline]
    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// The summed elastic inline contribution of the children.
    #[must_use]
    #[inline]
    pub fn advance(&self) -> FlexLength {
        self.advance
    }

    /// The block-progression offset of the group itself.
    #[must_use]
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The weakest resolved embedding level observed among the children.
    #[must_use]
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Sets the embedding level of the group.
    #[inline]
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// The lowest before-edge offset contributed by any child.
    #[must_use]
    #[inline]
    pub fn min_before_offset(&self) -> i32 {
        self.min_before_offset
    }

    /// The highest after-edge offset contributed by any child.
    #[must_use]
    #[inline]
    pub fn max_after_offset(&self) -> i32 {
        self.max_after_offset
    }

    /// The group's offset as seen by its parent, including descendants.
    #[must_use]
    #[inline]
    pub fn virtual_offset(&self) -> i32 {
        self.offset + self.min_before_offset
    }

    /// The cross-axis extent of the allocation rectangle.
    #[must_use]
    #[inline]
    pub fn virtual_cross_extent(&self) -> i32 {
        self.max_after_offset - self.min_before_offset
    }

    /// The current lifecycle state.
    #[must_use]
    #[inline]
    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Declares the group's extent and offsets final.
    ///
    /// Idempotent in `Measured`; fails once the group has been justified or
    /// sealed.
    pub fn mark_measured(&mut self) -> Result<(), Error> {
        match self.state {
            GroupState::Building | GroupState::Measured => {
                self.state = GroupState::Measured;
                Ok(())
            }
            state => Err(Error::InvalidState { state }),
        }
    }

    /// Hands the finished group to the output encoder.
    ///
    /// Fails while the group is still `Building`.
    pub fn seal(&mut self) -> Result<(), Error> {
        match self.state {
            GroupState::Building => Err(Error::InvalidState {
                state: GroupState::Building,
            }),
            _ => {
                self.state = GroupState::Sealed;
                Ok(())
            }
        }
    }

    /// Applies a line variation factor across the subtree.
    ///
    /// This is the justification pass: it must run exactly once per
    /// finished line, which the lifecycle enforces by requiring a
    /// `Measured` group and moving it to `Justified`. Children are visited in
    /// document order; each leaf moves its allocated extent within its
    /// elastic budget, and the group's extent becomes the sum of the
    /// adjusted child extents. Returns whether any descendant still awaits
    /// resolution.
    pub fn apply_variation_factor(
        &mut self,
        factor: f64,
        line_stretch: i32,
        line_shrink: i32,
    ) -> Result<bool, Error> {
        match self.state {
            GroupState::Measured => {}
            state => return Err(Error::InvalidState { state }),
        }
        self.state = GroupState::Justified;
        let mut pending = false;
        let mut extent = 0;
        for child in &mut self.children {
            pending |= child.apply_variation_factor(factor, line_stretch, line_shrink)?;
            extent += child.extent();
        }
        self.extent = extent;
        Ok(pending)
    }

    /// Collects descriptors for every text-run descendant, in document
    /// order.
    ///
    /// The accumulator is appended to and consumed once per call. Each
    /// descriptor carries the run's effective level: a run with an
    /// unresolved level inherits the level of its innermost resolved
    /// ancestor group, if any. The bidi stage uses this to re-derive
    /// contiguous same-level spans after mutation.
    pub fn collect_runs<'t>(&'t self, accumulator: &mut Vec<RunSpan<'t>>) {
        self.collect_runs_into(UNRESOLVED_LEVEL, accumulator);
    }

    pub(crate) fn collect_runs_into<'t>(&'t self, inherited: Level, out: &mut Vec<RunSpan<'t>>) {
        let effective = if is_resolved(self.level) {
            self.level
        } else {
            inherited
        };
        for child in &self.children {
            child.collect_runs_into(effective, out);
        }
    }

    /// Resets every direct child's level to the unresolved sentinel.
    ///
    /// Used when the group is about to be re-leveled from its parent
    /// context. Fails once the group has been justified or sealed.
    pub fn reset_child_levels(&mut self) -> Result<(), Error> {
        match self.state {
            GroupState::Building | GroupState::Measured => {}
            state => return Err(Error::InvalidState { state }),
        }
        for child in &mut self.children {
            child.set_level(UNRESOLVED_LEVEL);
        }
        Ok(())
    }
}

impl Default for InlineGroup {
    fn default() -> Self {
        Self::new()
    }
}
