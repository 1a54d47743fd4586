// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reversal, mirroring and level bookkeeping across a mixed-direction
//! paragraph.

use quire::{InlineGroup, RunSpan, TextRun};
use quire_primitives::{FlexLength, UNRESOLVED_LEVEL, is_rtl, mirror};

fn run(text: &str, level: i8, advance: i32) -> TextRun {
    TextRun::new(text, 0, level).with_advance(FlexLength::fixed(advance))
}

/// Collect the runs of a mixed-direction paragraph and lay the
/// right-to-left ones out visually, the way the reordering stage does once
/// the line breaker has committed a line.
#[test]
fn bidi_rtl_runs_reverse_into_visual_order() {
    let mut paragraph = InlineGroup::new();
    paragraph.add_child(run("book ", 0, 28_000)).unwrap();
    paragraph.add_child(run("ספר", 1, 17_000)).unwrap();
    paragraph.add_child(run("(note)", 1, 30_000)).unwrap();

    let mut spans: Vec<RunSpan<'_>> = Vec::new();
    paragraph.collect_runs(&mut spans);
    let rtl: Vec<&str> = spans
        .iter()
        .filter(|span| is_rtl(span.level))
        .map(|span| span.run.text())
        .collect();
    assert_eq!(rtl, ["ספר", "(note)"]);

    // Mutate the RTL leaves in place; the container level (the weakest
    // observed, here 0) is unaffected.
    for child in paragraph.children_mut() {
        if let quire::InlineItem::Text(run) = child {
            if is_rtl(run.level()) {
                run.reverse(true);
            }
        }
    }
    assert_eq!(paragraph.level(), 0);

    let texts: Vec<&str> = children_texts(&paragraph);
    assert_eq!(texts, ["book ", "רפס", "(eton)"]);
}

/// Reversing a run with every parallel array present keeps the arrays in
/// lockstep with the characters.
#[test]
fn bidi_reversal_keeps_parallel_arrays_aligned() {
    let mut run = TextRun::new("abc", 0, 1)
        .with_letter_adjust(vec![10, 20, 30])
        .with_glyph_adjust(vec![[1, 1, 0, 0], [2, 2, 0, 0], [3, 3, 0, 0]]);
    run.reverse(false);

    // The character now first carries the adjustments it had before.
    assert_eq!(run.text(), "cba");
    assert_eq!(run.letter_adjust().unwrap()[0], 30);
    assert_eq!(run.glyph_adjust().unwrap()[0], [3, 3, 0, 0]);
    assert_eq!(run.levels().unwrap(), &[1, 1, 1]);
}

/// Mirroring without reversal serves runs whose levels were already laid
/// out in visual order.
#[test]
fn bidi_mirror_only_swaps_paired_glyphs() {
    let mut run = TextRun::new("[x](y)", 0, 1);
    run.mirror();
    assert_eq!(run.text(), "]x[)y(");
    assert!(!run.is_reversed());

    // The substitution is driven by the Unicode pairing data.
    assert_eq!(mirror::mirrored('['), Some(']'));
    assert_eq!(mirror::mirrored('x'), None);
}

/// A deeply unresolved subtree inherits its effective level from the
/// closest resolved ancestor at collection time.
#[test]
fn bidi_effective_levels_flow_downward() {
    let mut inner = InlineGroup::new();
    inner
        .add_child(TextRun::new("quoted", 0, UNRESOLVED_LEVEL))
        .unwrap();
    inner.set_level(3);

    let mut outer = InlineGroup::new();
    outer.add_child(run("plain", 0, 10_000)).unwrap();
    outer.add_child(inner).unwrap();

    let mut spans: Vec<RunSpan<'_>> = Vec::new();
    outer.collect_runs(&mut spans);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].level, 0);
    assert_eq!(spans[1].level, 3);
}

fn children_texts(group: &InlineGroup) -> Vec<&str> {
    group
        .children()
        .iter()
        .filter_map(|child| match child {
            quire::InlineItem::Text(run) => Some(run.text()),
            quire::InlineItem::Group(_) => None,
        })
        .collect()
}
