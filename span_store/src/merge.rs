// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::mem;

use crate::Span;

/// Normalizes a span list.
///
/// Empty spans are dropped, the rest are sorted by start (stably), then folded left to right:
/// a span that touches or overlaps the running span and carries the same style extends it to
/// the further of the two ends; anything else starts a new running span.
///
/// The result is deterministic and `merge(merge(x)) == merge(x)`.
///
/// ```
/// use span_store::{Span, merge};
///
/// let merged = merge(vec![Span::plain(4..6), Span::plain(0..4), Span::plain(6..6)]);
/// assert_eq!(merged, vec![Span::plain(0..6)]);
/// ```
pub fn merge(mut spans: Vec<Span>) -> Vec<Span> {
    spans.retain(|span| !span.is_empty());
    spans.sort_by_key(|span| span.range.start);

    let mut merged = Vec::with_capacity(spans.len());
    let mut spans = spans.into_iter();
    let Some(mut running) = spans.next() else {
        return merged;
    };
    for span in spans {
        if span.range.start <= running.range.end && span.same_style(&running) {
            running.range.end = running.range.end.max(span.range.end);
        } else {
            merged.push(mem::replace(&mut running, span));
        }
    }
    merged.push(running);
    merged
}
