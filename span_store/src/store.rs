// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::mem;
use core::ops::Range;

use style_attributes::{StyleAttributes, StyleSet};

use crate::text::{paragraph_range, utf16_len};
use crate::{Span, merge};

/// The single source of truth for which styles apply where.
///
/// Between public operations the store upholds:
///
/// - spans are sorted by start and do not overlap
/// - spans cover `0..len` of the text exactly, with no gaps
/// - no two adjacent spans carry the same style
///
/// Spans can only be changed through the store's operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanStore {
    pub(crate) spans: Vec<Span>,
}

impl SpanStore {
    /// Creates an empty store, for an empty text.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store covering `text` with a single unstyled span.
    pub fn with_plain_text(text: &str) -> Self {
        Self::with_plain_len(utf16_len(text))
    }

    /// Creates a store covering `len` UTF-16 code units with a single unstyled span.
    pub fn with_plain_len(len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        Self {
            spans: vec![Span::plain(0..len)],
        }
    }

    /// Creates a store from arbitrary spans, normalizing them with [`merge`].
    ///
    /// The caller is responsible for the spans covering the text; see [`SpanStore::heal`].
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self {
            spans: merge(spans),
        }
    }

    /// Borrows the spans, in text order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Iterates the spans, in text order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Returns the number of spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if the store holds no spans.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the end of the last span, which equals the text length when consistent.
    pub fn covered_len(&self) -> usize {
        self.spans.last().map_or(0, |span| span.range.end)
    }

    /// Removes every span.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Returns the index of the span containing `offset`.
    pub fn index_at(&self, offset: usize) -> Option<usize> {
        let ix = self
            .spans
            .partition_point(|span| span.range.start <= offset)
            .checked_sub(1)?;
        self.spans[ix].contains(offset).then_some(ix)
    }

    /// Returns the span containing `offset`.
    pub fn span_at(&self, offset: usize) -> Option<&Span> {
        self.index_at(offset).map(|ix| &self.spans[ix])
    }

    /// Returns the attributes applying at `offset`.
    pub fn attributes_at(&self, offset: usize) -> Option<&StyleAttributes> {
        self.span_at(offset).map(|span| &span.attributes)
    }

    /// Returns the header, list and alignment of the paragraph of `text` holding `offset`.
    ///
    /// `None` for an empty paragraph (after a trailing separator, or in an empty text), which
    /// has no attributes of its own yet.
    pub fn paragraph_attributes_at(&self, text: &str, offset: usize) -> Option<StyleAttributes> {
        let paragraph = paragraph_range(text, offset..offset);
        if paragraph.is_empty() {
            return None;
        }
        self.attributes_at(paragraph.start)
            .map(StyleAttributes::paragraph_attributes)
    }

    /// Returns the styles applying at `offset`; empty outside the text.
    pub fn style_set_at(&self, offset: usize) -> StyleSet {
        self.attributes_at(offset)
            .map(StyleAttributes::style_set)
            .unwrap_or_default()
    }

    /// Iterates the spans sharing at least one offset with `range`.
    pub fn spans_in_range(&self, range: Range<usize>) -> impl Iterator<Item = &Span> + '_ {
        let first = self
            .spans
            .partition_point(|span| span.range.end <= range.start);
        self.spans[first..]
            .iter()
            .take_while(move |span| span.range.start < range.end)
            .filter(|span| !span.is_empty())
    }

    /// Returns the spans intersecting `range`, clipped to it.
    pub fn clipped_spans(&self, range: Range<usize>) -> Vec<Span> {
        self.spans_in_range(range.clone())
            .filter_map(|span| span.clipped(&range))
            .collect()
    }

    /// Returns `true` if the store upholds its invariants for a text of `len` code units.
    pub fn is_consistent(&self, len: usize) -> bool {
        let mut cursor = 0;
        let mut previous: Option<&Span> = None;
        for span in &self.spans {
            if span.is_empty() || span.range.start != cursor {
                return false;
            }
            if previous.is_some_and(|prev| prev.same_style(span)) {
                return false;
            }
            cursor = span.range.end;
            previous = Some(span);
        }
        cursor == len
    }

    /// Re-merges the spans.
    pub fn normalize(&mut self) {
        self.spans = merge(mem::take(&mut self.spans));
    }

    /// Restores the invariants for a text of `len` code units, whatever state the spans are in.
    ///
    /// Spans are clipped to the text, overlaps are resolved in favour of the span that starts
    /// later, gaps are filled with unstyled spans, then everything is re-merged.
    pub fn heal(&mut self, len: usize) {
        let mut spans = mem::take(&mut self.spans);
        spans.retain_mut(|span| {
            span.range.end = span.range.end.min(len);
            !span.is_empty()
        });
        spans.sort_by_key(|span| span.range.start);

        let mut healed: Vec<Span> = Vec::with_capacity(spans.len() + 1);
        let mut cursor = 0;
        for span in spans {
            if let Some(last) = healed.last_mut() {
                if last.range.end > span.range.start {
                    last.range.end = span.range.start;
                }
            }
            if span.range.start > cursor {
                healed.push(Span::plain(cursor..span.range.start));
            }
            cursor = span.range.end;
            healed.push(span);
        }
        if cursor < len {
            healed.push(Span::plain(cursor..len));
        }
        self.spans = merge(healed);
    }

    /// Normalizes the spans and checks the invariants for a text of `len` code units.
    ///
    /// A violation is a bug: debug builds panic, release builds log it and [`heal`](Self::heal).
    pub(crate) fn settle(&mut self, len: usize) {
        self.normalize();
        let consistent = self.is_consistent(len);
        debug_assert!(
            consistent,
            "span store invariants violated for len {len}: {:?}",
            self.spans
        );
        if !consistent {
            log::warn!("span store out of shape for len {len}, healing");
            self.heal(len);
        }
    }
}

impl<'a> IntoIterator for &'a SpanStore {
    type Item = &'a Span;
    type IntoIter = core::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
