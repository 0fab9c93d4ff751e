// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use style_attributes::{StyleAttributes, StyleOperation};

use crate::text::{contains_line_separator, paragraph_range, slice, utf16_len};
use crate::{Span, SpanStore};

impl SpanStore {
    /// Records that `len` code units were inserted at `at`.
    ///
    /// `text` is the text *after* the insertion. The inserted run takes `active` as its style,
    /// except that header, list and alignment come from the paragraph it lands in when that
    /// paragraph already has text. The run extends the span before it when that span carries
    /// the same style, and gets a span of its own otherwise (splitting the span it lands in).
    /// Every span starting at or after `at` moves forward by `len`.
    ///
    /// When the run contains a paragraph separator, `active` carries a header, and
    /// `break_header` is set, the paragraph the caret ends up in loses its header.
    ///
    /// Returns the spans to re-render, clipped to the inserted run (and the paragraph whose
    /// header was cleared, if any).
    pub fn insert(
        &mut self,
        text: &str,
        at: usize,
        len: usize,
        active: &StyleAttributes,
        break_header: bool,
    ) -> Vec<Span> {
        if len == 0 {
            return Vec::new();
        }
        let new_len = utf16_len(text);
        let at = at.min(self.covered_len()).min(new_len - len.min(new_len));
        let end = at + len;
        log::trace!("insert {len} at {at}");

        let mut active = active.clone();
        if let Some(paragraph) = self.attributes_at(paragraph_range(text, at..at).start) {
            active.set_paragraph_attributes(paragraph);
        }
        let before = self
            .spans
            .iter()
            .position(|span| span.range.start < at && at <= span.range.end);
        for span in &mut self.spans {
            if span.range.start >= at {
                span.shift_forward(len);
            }
        }

        let inserted = Span::new(at..end, active.clone());
        match before {
            Some(ix) if self.spans[ix].attributes.same_style(&active) => {
                self.spans[ix].range.end += len;
            }
            Some(ix) if self.spans[ix].range.end > at => {
                let tail_end = self.spans[ix].range.end + len;
                let tail = self.spans[ix].with_range(end..tail_end);
                self.spans[ix].range.end = at;
                self.spans.insert(ix + 1, tail);
                self.spans.insert(ix + 1, inserted);
            }
            Some(ix) => self.spans.insert(ix + 1, inserted),
            None => {
                let ix = self.spans.partition_point(|span| span.range.start < at);
                self.spans.insert(ix, inserted);
            }
        }
        self.settle(new_len);

        let mut render = at..end;
        if break_header && active.header.is_some() && contains_line_separator(slice(text, at..end))
        {
            let paragraph = paragraph_range(text, end..end);
            if !paragraph.is_empty() {
                log::trace!("newline ends header, clearing {paragraph:?}");
                self.apply_style(text, &StyleOperation::Header(None), paragraph.clone(), false);
                render.end = render.end.max(paragraph.end);
            }
        }
        self.clipped_spans(render)
    }

    /// Records that the code units in `range` were deleted.
    ///
    /// `range` is in offsets of the text *before* the deletion and `text` is the text *after* it.
    /// Spans before the range are untouched, spans after it move back by its length, and spans
    /// overlapping it are trimmed on whichever edges it covers (or dropped when fully inside).
    ///
    /// When `removed_separator` is set, paragraphs have just been joined and the joined
    /// paragraph takes the header, list and alignment of its first part. With `break_header`,
    /// a header anywhere in the joined paragraph is instead cleared from all of it.
    ///
    /// Returns the spans to re-render, clipped to the joined paragraph when its paragraph styles
    /// changed and empty otherwise.
    pub fn delete(
        &mut self,
        text: &str,
        range: Range<usize>,
        removed_separator: bool,
        break_header: bool,
    ) -> Vec<Span> {
        let covered = self.covered_len();
        let start = range.start.min(covered);
        let end = range.end.clamp(start, covered);
        let removed = end - start;
        if removed == 0 {
            return Vec::new();
        }
        log::trace!("delete {start}..{end}");

        for span in &mut self.spans {
            if span.range.end <= start {
                continue;
            }
            if span.range.start >= end {
                span.shift_back(removed);
                continue;
            }
            let new_start = span.range.start.min(start);
            let new_end = if span.range.end > end {
                span.range.end - removed
            } else {
                start
            };
            span.range = new_start..new_end;
        }
        let len = utf16_len(text);
        self.settle(len);

        if !removed_separator {
            return Vec::new();
        }
        let paragraph = paragraph_range(text, start..start);
        let Some(mut joined) = self
            .attributes_at(paragraph.start)
            .map(StyleAttributes::paragraph_attributes)
        else {
            return Vec::new();
        };
        if break_header
            && self
                .spans_in_range(paragraph.clone())
                .any(|span| span.attributes.header.is_some())
        {
            joined.header = None;
        }
        if self
            .spans_in_range(paragraph.clone())
            .all(|span| span.attributes.same_paragraph_style(&joined))
        {
            return Vec::new();
        }
        log::trace!("paragraphs joined, restyling {paragraph:?}");
        self.restyle(len, paragraph.clone(), |attributes| {
            let mut attributes = attributes.clone();
            attributes.set_paragraph_attributes(&joined);
            attributes
        });
        self.clipped_spans(paragraph)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Span, SpanStore};
    use alloc::vec::Vec;
    use style_attributes::{Alignment, HeaderLevel, StyleAttributes, StyleOperation};

    fn attrs<const N: usize>(ops: [StyleOperation; N]) -> StyleAttributes {
        ops.into_iter().collect()
    }

    fn ranges(store: &SpanStore) -> Vec<(usize, usize)> {
        store.iter().map(|span| (span.from(), span.to())).collect()
    }

    fn bold_hello() -> SpanStore {
        let text = "Hello world";
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &StyleOperation::Bold, 0..5, true);
        store
    }

    #[test]
    fn typing_extends_matching_span() {
        let mut store = bold_hello();
        let render = store.insert("HelloX world", 5, 1, &attrs([StyleOperation::Bold]), true);
        assert_eq!(ranges(&store), [(0, 5), (6, 11)]);
        assert!(store.spans()[0].attributes.has(&StyleOperation::Bold));
        assert!(store.spans()[1].attributes.is_plain());
        assert_eq!(render, [Span::new(5..6, attrs([StyleOperation::Bold]))]);
    }

    #[test]
    fn typing_inside_span_with_other_style_splits_it() {
        let mut store = bold_hello();
        store.insert("HeXllo world", 2, 1, &StyleAttributes::default(), true);
        assert_eq!(ranges(&store), [(0, 1), (2, 2), (3, 5), (6, 11)]);
        assert!(store.spans()[1].attributes.is_plain());
        assert!(store.spans()[2].attributes.has(&StyleOperation::Bold));
        assert!(store.is_consistent(12));
    }

    #[test]
    fn typing_at_boundary_with_new_style() {
        let mut store = bold_hello();
        let italic = attrs([StyleOperation::Italic]);
        store.insert("HelloX world", 5, 1, &italic, true);
        assert_eq!(ranges(&store), [(0, 4), (5, 5), (6, 11)]);
        assert_eq!(store.spans()[1].attributes, italic);
    }

    #[test]
    fn typing_at_start_and_into_empty_store() {
        let mut store = bold_hello();
        store.insert("XHello world", 0, 1, &StyleAttributes::default(), true);
        assert_eq!(ranges(&store), [(0, 0), (1, 5), (6, 11)]);

        let mut empty = SpanStore::new();
        empty.insert("ab", 0, 2, &attrs([StyleOperation::Bold]), true);
        assert_eq!(empty.spans(), &[Span::new(0..2, attrs([StyleOperation::Bold]))]);
    }

    #[test]
    fn newline_ends_header() {
        let text = "Title";
        let h1 = StyleOperation::Header(Some(HeaderLevel::H1));
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &h1, 0..0, true);
        let active = store.spans()[0].attributes.clone();

        store.insert("Ti\ntle", 2, 1, &active, true);
        assert_eq!(ranges(&store), [(0, 2), (3, 5)]);
        assert!(store.spans()[0].attributes.has(&h1));
        assert!(store.spans()[1].attributes.is_plain());

        let mut kept = SpanStore::with_plain_text(text);
        kept.apply_style(text, &h1, 0..0, true);
        kept.insert("Ti\ntle", 2, 1, &active, false);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn deleting_first_character() {
        let mut store = bold_hello();
        let render = store.delete("ello world", 0..1, false, true);
        assert_eq!(ranges(&store), [(0, 3), (4, 9)]);
        assert!(store.spans()[0].attributes.has(&StyleOperation::Bold));
        assert!(render.is_empty());
    }

    #[test]
    fn deletion_trims_both_edges_and_drops_inner_spans() {
        let text = "abcdefghij";
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &StyleOperation::Bold, 2..4, true);
        store.apply_style(text, &StyleOperation::Italic, 4..6, true);
        // bold 2..4, italic 4..6, plain 6..10
        store.delete("abcij", 3..8, false, true);
        assert_eq!(ranges(&store), [(0, 1), (2, 2), (3, 4)]);
        assert!(store.spans()[1].attributes.has(&StyleOperation::Bold));
        assert!(store.spans()[2].attributes.is_plain());
    }

    #[test]
    fn deleting_everything() {
        let mut store = bold_hello();
        store.delete("", 0..11, false, true);
        assert!(store.is_empty());
    }

    #[test]
    fn joining_paragraphs_clears_header() {
        let text = "Title\nbody";
        let h1 = StyleOperation::Header(Some(HeaderLevel::H1));
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &h1, 0..0, true);
        assert_eq!(ranges(&store), [(0, 5), (6, 9)]);

        let render = store.delete("Titlebody", 5..6, true, true);
        assert_eq!(store.spans(), &[Span::plain(0..9)]);
        assert_eq!(render, [Span::plain(0..9)]);
    }

    #[test]
    fn typing_at_paragraph_start_takes_that_paragraph_style() {
        let text = "line one\nline two";
        let h1 = StyleOperation::Header(Some(HeaderLevel::H1));
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &h1, 0..0, true);
        let active = store.spans()[0].attributes.clone();

        // Typed with the header of the separator before it, but into a plain paragraph.
        store.insert("line one\nXline two", 9, 1, &active, true);
        assert_eq!(ranges(&store), [(0, 8), (9, 17)]);
        assert!(store.spans()[1].attributes.is_plain());

        let text = "plain\nTitle";
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &h1, 8..8, true);
        store.insert("plain\nXTitle", 6, 1, &StyleAttributes::default(), true);
        assert_eq!(ranges(&store), [(0, 5), (6, 11)]);
        assert!(store.spans()[1].attributes.has(&h1));
    }

    #[test]
    fn typing_into_empty_last_paragraph_keeps_active_style() {
        let text = "ab\n";
        let mut store = SpanStore::with_plain_text(text);
        let right = attrs([StyleOperation::Align(Some(Alignment::Right))]);
        store.insert("ab\nc", 3, 1, &right, true);
        assert_eq!(ranges(&store), [(0, 2), (3, 3)]);
        assert_eq!(store.spans()[1].attributes, right);
    }

    #[test]
    fn joined_paragraph_takes_first_part_style() {
        let text = "ab\ncd";
        let center = StyleOperation::Align(Some(Alignment::Center));
        let mut store = SpanStore::with_plain_text(text);
        store.apply_style(text, &center, 4..4, true);
        store.apply_style(text, &StyleOperation::Bold, 4..5, true);
        assert_eq!(ranges(&store), [(0, 2), (3, 3), (4, 4)]);

        let render = store.delete("abcd", 2..3, true, true);
        assert_eq!(ranges(&store), [(0, 2), (3, 3)]);
        assert!(store.spans()[0].attributes.is_plain());
        assert_eq!(store.spans()[1].attributes, attrs([StyleOperation::Bold]));
        assert_eq!(render.len(), 2);

        let unchanged = store.delete("bcd", 0..1, true, true);
        assert!(unchanged.is_empty());
    }
}
