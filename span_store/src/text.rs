// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UTF-16 offset helpers over `str` buffers.
//!
//! Text-input controls report positions in UTF-16 code units while Rust strings are indexed by
//! UTF-8 bytes. Offsets that fall between the two halves of a surrogate pair cannot be
//! represented in a `str` and are rounded down to the start of the character.

use core::ops::Range;

/// Returns the length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Returns `true` for the characters that end a paragraph.
///
/// These are line feed, U+2028 LINE SEPARATOR and U+2029 PARAGRAPH SEPARATOR; each is a single
/// UTF-16 code unit.
#[inline]
pub fn is_line_separator(c: char) -> bool {
    matches!(c, '\n' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` if `text` contains a paragraph separator.
pub fn contains_line_separator(text: &str) -> bool {
    text.chars().any(is_line_separator)
}

/// Converts a UTF-16 offset into a byte offset into `text`, clamping to the end.
pub fn byte_offset(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        let next = units + c.len_utf16();
        if next > offset {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// Returns the slice of `text` covered by a UTF-16 range, clamped to the text.
pub fn slice(text: &str, range: Range<usize>) -> &str {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end).max(start);
    &text[start..end]
}

/// Clamps `range` to `0..len`, turning a reversed range into an empty one at its start.
pub fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    start..end
}

/// Expands `range` to the enclosing paragraph boundaries.
///
/// A paragraph runs from just after the previous separator up to and including its own
/// trailing separator (or the end of the text). An empty `range` is a caret: the result is the
/// paragraph holding the caret, which is empty for a caret after a trailing separator.
///
/// ```
/// use span_store::text::paragraph_range;
///
/// let text = "line one\nline two";
/// assert_eq!(paragraph_range(text, 3..3), 0..9);
/// assert_eq!(paragraph_range(text, 9..9), 9..17);
/// assert_eq!(paragraph_range(text, 2..12), 0..17);
/// ```
pub fn paragraph_range(text: &str, range: Range<usize>) -> Range<usize> {
    let len = utf16_len(text);
    let range = clamp_range(range, len);
    // The separator that ends the paragraph may be the last unit of a non-empty range.
    let threshold = if range.is_empty() {
        range.start
    } else {
        range.end - 1
    };

    let mut start = 0;
    let mut end = len;
    let mut pos = 0;
    for c in text.chars() {
        let width = c.len_utf16();
        if is_line_separator(c) {
            if pos < range.start {
                start = pos + width;
            } else if pos >= threshold {
                end = pos + width;
                break;
            }
        }
        pos += width;
    }
    start..end.max(start)
}
