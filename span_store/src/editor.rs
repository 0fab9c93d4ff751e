// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use style_attributes::{StyleAttributes, StyleOperation};

use crate::text::{clamp_range, paragraph_range, utf16_len};
use crate::{Span, SpanStore, classify, merge};

/// Returns the range an operation actually styles.
///
/// Paragraph-scoped operations (header, list, alignment) grow `range` to the enclosing
/// paragraphs; see [`paragraph_range`]. Other operations style `range` as given, clamped to the
/// text.
pub fn effective_range(text: &str, op: &StyleOperation, range: Range<usize>) -> Range<usize> {
    if op.is_paragraph_scoped() {
        paragraph_range(text, range)
    } else {
        clamp_range(range, utf16_len(text))
    }
}

impl SpanStore {
    /// Adds (`add == true`) or removes one style over `range` of `text`.
    ///
    /// `text` must be the text the store currently describes. The decision to add or remove is
    /// the caller's: removing clears the concept everywhere in the range whatever each span held
    /// before, and [`StyleOperation::Default`] always resets. A reset clears header, list and
    /// alignment from every paragraph `range` touches, and the other attributes from `range`
    /// only. Out-of-range input is clamped.
    ///
    /// Returns the spans to re-render: the spans now covering the effective range (for a reset,
    /// the paragraphs it touches), clipped to it. An empty effective range changes nothing and
    /// returns nothing.
    pub fn apply_style(
        &mut self,
        text: &str,
        op: &StyleOperation,
        range: Range<usize>,
        add: bool,
    ) -> Vec<Span> {
        let len = utf16_len(text);
        let range = effective_range(text, op, range);
        if range.is_empty() {
            log::debug!("{op:?} over an empty range, nothing to style");
            return Vec::new();
        }

        if matches!(op, StyleOperation::Default) {
            let paragraphs = paragraph_range(text, range.clone());
            self.restyle(len, range, StyleAttributes::paragraph_attributes);
            self.restyle(len, paragraphs.clone(), |attributes| {
                let mut attributes = attributes.clone();
                attributes.set_paragraph_attributes(&StyleAttributes::default());
                attributes
            });
            return self.clipped_spans(paragraphs);
        }

        self.restyle(len, range.clone(), |attributes| {
            attributes.clone().with(op, add)
        });
        self.clipped_spans(range)
    }

    /// Replaces the attributes over `range` with `update` applied to what each part held.
    ///
    /// Parts of `range` no span covers are treated as plain. `range` must be non-empty and
    /// within a text of `len` code units.
    pub(crate) fn restyle(
        &mut self,
        len: usize,
        range: Range<usize>,
        update: impl Fn(&StyleAttributes) -> StyleAttributes,
    ) {
        let buckets = classify(&self.spans, &range);
        let mut pieces = Vec::with_capacity(buckets.len() + 2);

        // Cut at whichever boundary of `range` falls inside the span.
        for &ix in &buckets.partial {
            let span = &self.spans[ix];
            let cut = if span.range.start < range.start {
                range.start
            } else {
                range.end
            };
            let (outside, inside) = if span.range.start < range.start {
                (span.range.start..cut, cut..span.range.end)
            } else {
                (cut..span.range.end, span.range.start..cut)
            };
            pieces.push(span.with_range(outside));
            pieces.push(Span::new(inside, update(&span.attributes)));
        }

        for &ix in &buckets.complete {
            let span = &self.spans[ix];
            if span.range.start >= range.start && span.range.end <= range.end {
                pieces.push(Span::new(span.range.clone(), update(&span.attributes)));
            } else {
                pieces.push(span.with_range(span.range.start..range.start));
                pieces.push(Span::new(range.clone(), update(&span.attributes)));
                pieces.push(span.with_range(range.end..span.range.end));
            }
        }

        for &ix in &buckets.exact {
            let span = &self.spans[ix];
            pieces.push(Span::new(span.range.clone(), update(&span.attributes)));
        }

        fill_gaps(&mut pieces, &range, &update(&StyleAttributes::default()));

        let touched = buckets.indices();
        let mut ix = 0;
        self.spans.retain(|_| {
            let keep = touched.binary_search(&ix).is_err();
            ix += 1;
            keep
        });
        self.spans.extend(merge(pieces));
        self.settle(len);
    }
}

/// Adds a span carrying `attributes` for every part of `range` no piece covers.
fn fill_gaps(pieces: &mut Vec<Span>, range: &Range<usize>, attributes: &StyleAttributes) {
    let mut covered: Vec<Range<usize>> = pieces
        .iter()
        .filter_map(|piece| piece.clipped(range))
        .map(|piece| piece.range)
        .collect();
    covered.sort_by_key(|r| r.start);

    let mut cursor = range.start;
    for r in covered {
        if r.start > cursor {
            pieces.push(Span::new(cursor..r.start, attributes.clone()));
        }
        cursor = cursor.max(r.end);
    }
    if cursor < range.end {
        pieces.push(Span::new(cursor..range.end, attributes.clone()));
    }
}
