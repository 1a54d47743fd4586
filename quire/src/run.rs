// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use quire_primitives::{FlexLength, Level, UNRESOLVED_LEVEL, is_resolved, mirror};

use crate::Error;

/// Per-glyph position adjustment: x-placement, y-placement, x-advance and
/// y-advance deltas, in millipoints.
pub type GlyphAdjust = [i32; 4];

/// An atomic run of already-shaped characters.
///
/// A `TextRun` is the leaf unit of inline composition, conceptually a word
/// or glyph cluster that justification never splits. The shaping stage
/// creates it with a resolved embedding level and optional parallel arrays
/// carrying per-character data; the composition stage may later [`reverse`]
/// or [`mirror`] it in place when laying the run out visually.
///
/// Every parallel array is kept at exactly the run's character count.
/// Arrays supplied longer than the text are truncated, shorter ones are
/// zero-extended; this normalization is silent, not an error.
///
/// [`reverse`]: Self::reverse
/// [`mirror`]: Self::mirror
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    text: String,
    offset: i32,
    cross_extent: i32,
    level: Level,
    advance: FlexLength,
    extent: i32,
    letter_adjust: Option<Vec<i32>>,
    levels: Option<Vec<Level>>,
    glyph_adjust: Option<Vec<GlyphAdjust>>,
    reversed: bool,
    pending: bool,
    pending_factor: f64,
}

impl TextRun {
    /// Creates a run of shaped text.
    ///
    /// `offset` is the block-progression offset of the run relative to its
    /// parent's before-edge. A resolved (non-negative) `level` synthesizes a
    /// homogeneous per-character level array; an unresolved level leaves the
    /// array absent until [`with_levels`] provides one.
    ///
    /// [`with_levels`]: Self::with_levels
    pub fn new(text: impl Into<String>, offset: i32, level: Level) -> Self {
        let text = text.into();
        let levels = if is_resolved(level) {
            Some(vec![level; text.chars().count()])
        } else {
            None
        };
        Self {
            text,
            offset,
            cross_extent: 0,
            level,
            advance: FlexLength::ZERO,
            extent: 0,
            letter_adjust: None,
            levels,
            glyph_adjust: None,
            reversed: false,
            pending: false,
            pending_factor: 0.0,
        }
    }

    /// Sets the measured elastic inline contribution of the run.
    ///
    /// The allocated extent starts at the optimum and moves within the
    /// shrink/stretch range during justification.
    #[must_use]
    pub fn with_advance(mut self, advance: FlexLength) -> Self {
        self.advance = advance;
        self.extent = advance.opt();
        self
    }

    /// Sets the extent of the run perpendicular to the line axis.
    #[must_use]
    pub fn with_cross_extent(mut self, cross_extent: i32) -> Self {
        self.cross_extent = cross_extent;
        self
    }

    /// Sets the per-character advance-width adjustments.
    ///
    /// The array is normalized to the character count of the text.
    #[must_use]
    pub fn with_letter_adjust(mut self, mut letter_adjust: Vec<i32>) -> Self {
        letter_adjust.resize(self.len(), 0);
        self.letter_adjust = Some(letter_adjust);
        self
    }

    /// Sets the per-character embedding levels, replacing any synthesized
    /// array.
    ///
    /// The array is normalized to the character count of the text.
    #[must_use]
    pub fn with_levels(mut self, mut levels: Vec<Level>) -> Self {
        levels.resize(self.len(), 0);
        self.levels = Some(levels);
        self
    }

    /// Sets the per-character glyph-position adjustments.
    ///
    /// The array is normalized to the character count of the text.
    #[must_use]
    pub fn with_glyph_adjust(mut self, mut glyph_adjust: Vec<GlyphAdjust>) -> Self {
        glyph_adjust.resize(self.len(), [0; 4]);
        self.glyph_adjust = Some(glyph_adjust);
        self
    }

    /// Marks the run as awaiting external resolution, e.g. a forward
    /// page-number reference still rendering placeholder digits.
    ///
    /// A pending run keeps its placeholder extent through justification,
    /// remembers the variation factor it was handed, and reports itself as
    /// unresolved; see [`resolve`].
    ///
    /// [`resolve`]: Self::resolve
    #[must_use]
    pub fn with_pending(mut self) -> Self {
        self.pending = true;
        self.pending_factor = 0.0;
        self
    }

    /// The characters of the run, in current (possibly reversed) order.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The number of characters in the run.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the run has no characters.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The block-progression offset of the run.
    #[must_use]
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Sets the block-progression offset of the run.
    #[inline]
    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// The extent of the run perpendicular to the line axis.
    #[must_use]
    #[inline]
    pub fn cross_extent(&self) -> i32 {
        self.cross_extent
    }

    /// The embedding level of the run as a whole.
    #[must_use]
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Sets the embedding level of the run as a whole.
    ///
    /// Per-character levels, if any, are left untouched.
    #[inline]
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// The measured elastic inline contribution of the run.
    #[must_use]
    #[inline]
    pub fn advance(&self) -> FlexLength {
        self.advance
    }

    /// The currently allocated inline extent of the run.
    #[must_use]
    #[inline]
    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Whether the run's characters are stored in reversed (visual) order.
    #[must_use]
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Whether the run awaits external resolution.
    #[must_use]
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The per-character advance-width adjustments, if any.
    #[must_use]
    #[inline]
    pub fn letter_adjust(&self) -> Option<&[i32]> {
        self.letter_adjust.as_deref()
    }

    /// The per-character embedding levels, if any.
    #[must_use]
    #[inline]
    pub fn levels(&self) -> Option<&[Level]> {
        self.levels.as_deref()
    }

    /// The per-character glyph-position adjustments, if any.
    #[must_use]
    #[inline]
    pub fn glyph_adjust(&self) -> Option<&[GlyphAdjust]> {
        self.glyph_adjust.as_deref()
    }

    /// The embedding level of the character at `index`.
    ///
    /// Reports [`UNRESOLVED_LEVEL`] when no per-character levels exist or
    /// the index lies outside the run; absence of information is not an
    /// error here.
    #[must_use]
    pub fn level_at(&self, index: usize) -> Level {
        self.levels
            .as_ref()
            .and_then(|levels| levels.get(index))
            .copied()
            .unwrap_or(UNRESOLVED_LEVEL)
    }

    /// A fresh copy of the per-character levels in `start..end`.
    ///
    /// Returns `None` when the run carries no per-character levels. Fails
    /// with [`Error::IndexOutOfRange`] if `start > end`; an `end` beyond the
    /// text is clamped to it.
    pub fn levels_in_range(&self, start: usize, end: usize) -> Result<Option<Vec<Level>>, Error> {
        if start > end {
            return Err(Error::IndexOutOfRange {
                index: start,
                bound: end,
            });
        }
        Ok(self.levels.as_ref().map(|levels| {
            let end = end.min(levels.len());
            let start = start.min(end);
            levels[start..end].to_vec()
        }))
    }

    /// The glyph-position adjustment of the character at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] only when `index` exceeds the
    /// character count. An index equal to the count is tolerated and yields
    /// `None`; callers probing one past the last character rely on this
    /// boundary.
    pub fn glyph_adjust_at(&self, index: usize) -> Result<Option<GlyphAdjust>, Error> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, bound: len });
        }
        Ok(self
            .glyph_adjust
            .as_ref()
            .and_then(|adjust| adjust.get(index))
            .copied())
    }

    /// Reverses the run in place, from logical into visual order (or back).
    ///
    /// The character sequence and every present parallel array are
    /// reversed, and the `reversed` flag toggles. With `mirror`, each
    /// mirrorable character is additionally replaced by its counterpart;
    /// the substitution happens once per call, so double application
    /// restores the original text while `reversed` round-trips. Empty runs
    /// are left untouched.
    pub fn reverse(&mut self, mirror: bool) {
        if self.text.is_empty() {
            return;
        }
        self.text = self.text.chars().rev().collect();
        if let Some(letter_adjust) = &mut self.letter_adjust {
            letter_adjust.reverse();
        }
        if let Some(levels) = &mut self.levels {
            levels.reverse();
        }
        if let Some(glyph_adjust) = &mut self.glyph_adjust {
            glyph_adjust.reverse();
        }
        self.reversed = !self.reversed;
        if mirror {
            self.text = mirror::mirror_text(&self.text);
        }
    }

    /// Replaces each mirrorable character with its mirrored counterpart,
    /// without reordering anything.
    ///
    /// Used when the per-character levels were already laid out in visual
    /// order and only the glyph substitution remains.
    pub fn mirror(&mut self) {
        self.text = mirror::mirror_text(&self.text);
    }

    /// Applies a line variation factor to the run's allocated extent.
    ///
    /// A non-negative factor consumes the run's stretch, a negative one its
    /// shrink, in either case capped by the line's total budget. Returns
    /// whether the run is still awaiting resolution: pending runs keep
    /// their placeholder extent, remember the factor for [`resolve`] and
    /// report `true`.
    ///
    /// [`resolve`]: Self::resolve
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Adjustments are fractions of i32 millipoint budgets and fit comfortably."
    )]
    pub fn apply_variation_factor(
        &mut self,
        factor: f64,
        line_stretch: i32,
        line_shrink: i32,
    ) -> bool {
        if self.pending {
            self.pending_factor = factor;
            return true;
        }
        let adjustment = if factor >= 0.0 {
            factor * f64::from(self.advance.stretch().min(line_stretch))
        } else {
            factor * f64::from(self.advance.shrink().min(line_shrink))
        };
        self.extent = self.advance.opt() + adjustment as i32;
        false
    }

    /// Substitutes the final text of a pending run.
    ///
    /// Parallel arrays are re-normalized to the new character count, the
    /// remembered variation factor is applied to the new advance, and the
    /// pending flag clears.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Adjustments are fractions of i32 millipoint budgets and fit comfortably."
    )]
    pub fn resolve(&mut self, text: impl Into<String>, advance: FlexLength) {
        self.text = text.into();
        let len = self.len();
        if let Some(letter_adjust) = &mut self.letter_adjust {
            letter_adjust.resize(len, 0);
        }
        if let Some(levels) = &mut self.levels {
            levels.resize(len, 0);
        }
        if let Some(glyph_adjust) = &mut self.glyph_adjust {
            glyph_adjust.resize(len, [0; 4]);
        }
        self.advance = advance;
        let factor = self.pending_factor;
        let adjustment = if factor >= 0.0 {
            factor * f64::from(advance.stretch())
        } else {
            factor * f64::from(advance.shrink())
        };
        self.extent = advance.opt() + adjustment as i32;
        self.pending = false;
        self.pending_factor = 0.0;
    }
}
