// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use icu_properties::CodePointMapData;
use icu_properties::props::BidiMirroringGlyph;

/// Returns the bidi-mirrored counterpart of `c`, if one exists.
///
/// Backed by the Unicode `Bidi_Mirroring_Glyph` property. Characters that
/// are formally mirrored but have no paired glyph (a handful of angled
/// mathematical operators) report `None` and should be left for the font
/// layer to handle.
///
/// ## Example
///
/// ```
/// use quire_primitives::mirror;
///
/// assert_eq!(mirror::mirrored('('), Some(')'));
/// assert_eq!(mirror::mirrored('x'), None);
/// ```
#[must_use]
pub fn mirrored(c: char) -> Option<char> {
    CodePointMapData::<BidiMirroringGlyph>::new()
        .get(c)
        .mirroring_glyph
}

/// Replaces every mirrorable character in `text` with its counterpart.
///
/// Characters without a paired mirror glyph pass through unchanged, so the
/// result always has the same character count as the input.
#[must_use]
pub fn mirror_text(text: &str) -> String {
    text.chars().map(|c| mirrored(c).unwrap_or(c)).collect()
}
