// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use smallvec::SmallVec;

use crate::Span;

/// Indices of the spans intersecting a query range, partitioned by how they overlap it.
///
/// The three buckets are disjoint and each is in ascending index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapBuckets {
    /// Spans that contain the query range, or are contained by it (but are not equal to it).
    pub complete: SmallVec<[usize; 4]>,
    /// Spans that overlap the query range on one side only.
    pub partial: SmallVec<[usize; 4]>,
    /// Spans whose range equals the query range.
    pub exact: SmallVec<[usize; 4]>,
}

impl OverlapBuckets {
    /// Returns `true` if no span intersects the query range.
    pub fn is_empty(&self) -> bool {
        self.complete.is_empty() && self.partial.is_empty() && self.exact.is_empty()
    }

    /// Returns the total number of intersecting spans.
    pub fn len(&self) -> usize {
        self.complete.len() + self.partial.len() + self.exact.len()
    }

    /// Returns every intersecting span index, in ascending order.
    pub fn indices(&self) -> SmallVec<[usize; 8]> {
        let mut all: SmallVec<[usize; 8]> = self
            .complete
            .iter()
            .chain(&self.partial)
            .chain(&self.exact)
            .copied()
            .collect();
        all.sort_unstable();
        all
    }
}

/// Partitions the spans intersecting `range` into complete, partial and exact overlaps.
///
/// A span equal to `range` both contains it and is contained by it; it is reported only as an
/// exact match. Empty spans and an empty `range` intersect nothing.
///
/// ```
/// use span_store::{Span, classify};
///
/// let spans = [Span::plain(0..3), Span::plain(3..8), Span::plain(8..10)];
/// let buckets = classify(&spans, &(2..8));
/// assert_eq!(buckets.partial.as_slice(), &[0]);
/// assert_eq!(buckets.complete.as_slice(), &[1]);
/// assert!(buckets.exact.is_empty());
/// ```
pub fn classify(spans: &[Span], range: &Range<usize>) -> OverlapBuckets {
    let mut buckets = OverlapBuckets::default();
    if range.is_empty() {
        return buckets;
    }
    for (ix, span) in spans.iter().enumerate() {
        if span.is_empty() || !span.intersects(range) {
            continue;
        }
        let contains = span.range.start <= range.start && span.range.end >= range.end;
        let contained = span.range.start >= range.start && span.range.end <= range.end;
        if contains && contained {
            buckets.exact.push(ix);
        } else if contains || contained {
            buckets.complete.push(ix);
        } else {
            buckets.partial.push(ix);
        }
    }
    buckets
}
