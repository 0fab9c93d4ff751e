// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use style_attributes::{StyleAttributes, StyleSet};

/// A contiguous range of text paired with one attribute bundle.
///
/// Spans are plain values: they are identified by their position in a
/// [`SpanStore`](crate::SpanStore), never by a long-lived handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    /// The half-open UTF-16 range covered by this span.
    pub range: Range<usize>,
    /// The styles applied over `range`.
    pub attributes: StyleAttributes,
}

impl Span {
    /// Creates a span.
    #[inline]
    pub fn new(range: Range<usize>, attributes: StyleAttributes) -> Self {
        Self { range, attributes }
    }

    /// Creates a span with no styles.
    #[inline]
    pub fn plain(range: Range<usize>) -> Self {
        Self::new(range, StyleAttributes::default())
    }

    /// The first offset covered (inclusive).
    #[inline]
    pub fn from(&self) -> usize {
        self.range.start
    }

    /// The last offset covered (inclusive).
    ///
    /// An empty span has no last offset; this then returns `from() - 1`, saturating at zero.
    /// Check [`is_empty`](Self::is_empty) first when that distinction matters.
    #[inline]
    pub fn to(&self) -> usize {
        self.range.end.saturating_sub(1)
    }

    /// The number of UTF-16 code units covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Returns `true` if the span covers nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Returns `true` if `offset` lies inside the span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.range.contains(&offset)
    }

    /// Returns `true` if the span shares at least one offset with `range`.
    #[inline]
    pub fn intersects(&self, range: &Range<usize>) -> bool {
        self.range.start < range.end && self.range.end > range.start
    }

    /// Returns `true` if both spans carry the same style.
    #[inline]
    pub fn same_style(&self, other: &Self) -> bool {
        self.attributes.same_style(&other.attributes)
    }

    /// Returns the derived style set of this span's bundle.
    pub fn style_set(&self) -> StyleSet {
        self.attributes.style_set()
    }

    /// Returns the part of this span inside `range`, if any.
    pub fn clipped(&self, range: &Range<usize>) -> Option<Self> {
        let start = self.range.start.max(range.start);
        let end = self.range.end.min(range.end);
        (start < end).then(|| Self::new(start..end, self.attributes.clone()))
    }

    /// Returns a copy of this span covering `range` instead.
    #[must_use]
    pub fn with_range(&self, range: Range<usize>) -> Self {
        Self::new(range, self.attributes.clone())
    }

    /// Moves the span by `delta` code units towards the end of the text.
    pub(crate) fn shift_forward(&mut self, delta: usize) {
        self.range.start += delta;
        self.range.end += delta;
    }

    /// Moves the span by `delta` code units towards the start of the text.
    pub(crate) fn shift_back(&mut self, delta: usize) {
        self.range.start -= delta;
        self.range.end -= delta;
    }
}
