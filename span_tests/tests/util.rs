// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across tests.

use span_store::SpanStore;
use span_store::text::{byte_offset, utf16_len};
use style_attributes::{StyleAttributes, StyleOperation};
use styled_session::{Selection, StyledSession};

/// Builds a bundle from operations.
pub(crate) fn attrs<const N: usize>(ops: [StyleOperation; N]) -> StyleAttributes {
    ops.into_iter().collect()
}

/// The spans of a session as inclusive `(from, to)` pairs.
pub(crate) fn inclusive(session: &StyledSession) -> Vec<(usize, usize)> {
    session
        .spans()
        .iter()
        .map(|span| (span.from(), span.to()))
        .collect()
}

/// Types `s` at `caret` one character at a time, reporting each change like a text view does.
pub(crate) fn type_at(session: &mut StyledSession, caret: usize, s: &str) {
    session.on_selection_changed(Selection::caret(caret));
    let mut caret = session.selection().location;
    for c in s.chars() {
        let mut text = String::from(session.text());
        text.insert(byte_offset(&text, caret), c);
        caret += c.len_utf16();
        session.on_text_changed(&text, Selection::caret(caret));
    }
}

/// Deletes `len` code units starting at `start` in one change, leaving the caret at `start`.
pub(crate) fn delete_at(session: &mut StyledSession, start: usize, len: usize) {
    let mut text = String::from(session.text());
    let from = byte_offset(&text, start);
    let to = byte_offset(&text, start + len);
    text.replace_range(from..to, "");
    session.on_text_changed(&text, Selection::caret(start.min(utf16_len(&text))));
}

/// The attributes at every offset of a text of `len` code units, plain where nothing is stored.
pub(crate) fn per_offset(store: &SpanStore, len: usize) -> Vec<StyleAttributes> {
    (0..len)
        .map(|offset| store.attributes_at(offset).cloned().unwrap_or_default())
        .collect()
}

/// Inserts `inserted` at UTF-16 offset `at` of `text`.
pub(crate) fn spliced(text: &str, at: usize, inserted: &str) -> String {
    let mut out = String::from(text);
    out.insert_str(byte_offset(text, at), inserted);
    out
}

/// Removes the UTF-16 range `start..end` from `text`.
pub(crate) fn without(text: &str, start: usize, end: usize) -> String {
    let mut out = String::from(text);
    out.replace_range(byte_offset(text, start)..byte_offset(text, end), "");
    out
}
