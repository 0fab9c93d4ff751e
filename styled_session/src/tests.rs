// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{SessionConfig, Selection, StyledSession};
use alloc::vec::Vec;
use style_attributes::{Alignment, Color, HeaderLevel, StyleAttributes, StyleOperation};

fn ranges(session: &StyledSession) -> Vec<(usize, usize)> {
    session
        .spans()
        .iter()
        .map(|span| (span.from(), span.to()))
        .collect()
}

/// Types `s` at the caret, one character per event, as a text view would report it.
fn type_str(session: &mut StyledSession, s: &str) {
    for c in s.chars() {
        let caret = session.selection().location;
        let mut text = alloc::string::String::from(session.text());
        let at = span_store::text::byte_offset(&text, caret);
        text.insert(at, c);
        session.on_text_changed(&text, Selection::caret(caret + c.len_utf16()));
    }
}

fn backspace(session: &mut StyledSession) {
    let caret = session.selection().location;
    let mut text = alloc::string::String::from(session.text());
    let start = span_store::text::byte_offset(&text, caret - 1);
    let end = span_store::text::byte_offset(&text, caret);
    text.replace_range(start..end, "");
    session.on_text_changed(&text, Selection::caret(caret - 1));
}

#[test]
fn typing_into_empty_session() {
    let mut session = StyledSession::default();
    session.apply_style(&StyleOperation::Bold, None, true);
    type_str(&mut session, "Hi");
    session.apply_style(&StyleOperation::Bold, None, false);
    type_str(&mut session, " there");

    assert_eq!(session.text(), "Hi there");
    assert_eq!(ranges(&session), [(0, 1), (2, 7)]);
    assert!(session.styles_at(1).contains(&StyleOperation::Bold));
    assert!(session.styles_at(2).is_empty());
}

#[test]
fn caret_toggle_survives_selection_echo() {
    let mut session = StyledSession::from_plain_text("abc");
    assert_eq!(session.selection(), Selection::caret(3));
    assert_eq!(session.toggle_style(&StyleOperation::Italic, None), None);
    session.on_selection_changed(Selection::caret(3));
    assert!(session.active_styles().contains(&StyleOperation::Italic));

    type_str(&mut session, "d");
    assert_eq!(ranges(&session), [(0, 2), (3, 3)]);
}

#[test]
fn typing_follows_caret() {
    let mut session = StyledSession::from_plain_text("Hello world");
    session.apply_style(&StyleOperation::Bold, Some(0..5), true);

    session.on_selection_changed(Selection::caret(3));
    assert!(session.typing_attributes().has(&StyleOperation::Bold));
    session.on_selection_changed(Selection::caret(7));
    assert!(session.typing_attributes().is_plain());
    // At the very start the first character decides.
    session.on_selection_changed(Selection::caret(0));
    assert!(session.typing_attributes().has(&StyleOperation::Bold));

    let mut fixed = StyledSession::from_plain_text_with_config(
        "Hello world",
        SessionConfig::new().with_typing_follows_caret(false),
    );
    fixed.apply_style(&StyleOperation::Bold, Some(0..5), true);
    fixed.on_selection_changed(Selection::caret(3));
    assert!(fixed.typing_attributes().is_plain());
}

#[test]
fn backspace_adopts_style_before_caret() {
    let mut session = StyledSession::from_plain_text("Hello world");
    session.apply_style(&StyleOperation::Bold, Some(0..5), true);
    session.on_selection_changed(Selection::caret(6));
    assert!(session.typing_attributes().is_plain());

    backspace(&mut session);
    assert_eq!(session.text(), "Helloworld");
    assert_eq!(ranges(&session), [(0, 4), (5, 9)]);
    assert!(session.typing_attributes().has(&StyleOperation::Bold));
}

#[test]
fn echoed_text_is_ignored() {
    let mut session = StyledSession::from_plain_text("Hello world");
    let batch = session
        .apply_style(&StyleOperation::Underline, Some(0..5), true)
        .unwrap();
    let before = session.spans().to_vec();

    session.on_text_changed("Hello world", Selection::new(0, 5));
    assert_eq!(session.spans(), before.as_slice());
    assert_eq!(session.selection(), Selection::new(0, 5));
    assert_eq!(session.queued_batches(), 1);
    assert!(session.complete_updates(batch));
    assert!(session.is_settled());
}

#[test]
fn clearing_the_text_resets_everything() {
    let mut session = StyledSession::from_plain_text("abc");
    session.apply_style(&StyleOperation::Bold, Some(0..3), true);
    session.on_selection_changed(Selection::caret(2));
    session.on_text_changed("", Selection::caret(0));
    assert!(session.is_empty());
    assert!(session.spans().is_empty());
    assert!(session.typing_attributes().is_plain());
}

#[test]
fn replacement_is_delete_then_insert() {
    let mut session = StyledSession::from_plain_text("abcdef");
    session.apply_style(&StyleOperation::Bold, Some(0..6), true);
    session.on_selection_changed(Selection::new(2, 2));
    // Autocorrect swaps "cd" for "XY" and reports the caret after it.
    session.on_text_changed("abXYef", Selection::caret(4));
    assert_eq!(session.text(), "abXYef");
    assert!(session.store().is_consistent(6));
    assert_eq!(ranges(&session), [(0, 5)]);
}

#[test]
fn newline_in_header_starts_plain_paragraph() {
    let mut session = StyledSession::from_plain_text("Title");
    let h1 = StyleOperation::Header(Some(HeaderLevel::H1));
    session.apply_style(&h1, Some(5..5), true);
    assert!(session.active_styles().contains(&h1));

    type_str(&mut session, "\nbody");
    assert_eq!(session.text(), "Title\nbody");
    assert_eq!(ranges(&session), [(0, 5), (6, 9)]);
    assert!(session.styles_at(0).contains(&h1));
    assert!(session.styles_at(7).is_empty());
    assert!(!session.typing_attributes().has(&StyleOperation::Header(None)));

    let mut kept = StyledSession::from_plain_text_with_config(
        "Title",
        SessionConfig::new().with_break_header_on_newline(false),
    );
    kept.apply_style(&h1, Some(5..5), true);
    type_str(&mut kept, "\nbody");
    assert!(kept.styles_at(7).contains(&h1));
}

#[test]
fn removal_batches_clear_first() {
    let mut session = StyledSession::from_plain_text("Hello world");
    session.apply_style(&StyleOperation::Bold, Some(0..11), true);
    let first = session.pending_updates().unwrap().id();
    assert!(session.complete_updates(first));

    let red = StyleOperation::Color(Some(Color::rgb(255, 0, 0)));
    session.apply_style(&red, Some(0..5), true);
    let id = session
        .apply_style(&StyleOperation::Bold, Some(0..5), false)
        .unwrap();
    assert_eq!(session.queued_batches(), 2);

    let color_batch = session.pending_updates().unwrap();
    assert!(color_batch.updates().iter().all(|u| u.apply));
    let color_id = color_batch.id();
    assert!(!session.complete_updates(id));
    assert!(session.complete_updates(color_id));

    let batch = session.pending_updates().unwrap();
    assert_eq!(batch.id(), id);
    let updates = batch.updates();
    assert!(!updates[0].apply);
    assert_eq!(updates[0].span.range, 0..5);
    assert!(updates[1].apply);
    assert_eq!(updates[1].span.range, 0..5);
    assert!(updates[1].span.attributes.has(&StyleOperation::Color(None)));
    assert!(!updates[1].span.attributes.has(&StyleOperation::Bold));
}

#[test]
fn active_styles_of_a_range_are_shared_styles() {
    let mut session = StyledSession::from_plain_text("Hello world");
    session.apply_style(&StyleOperation::Bold, Some(0..5), true);
    session.apply_style(&StyleOperation::Italic, Some(2..8), true);

    session.on_selection_changed(Selection::new(2, 3));
    let active = session.active_styles();
    assert!(active.contains(&StyleOperation::Bold));
    assert!(active.contains(&StyleOperation::Italic));

    session.on_selection_changed(Selection::new(2, 6));
    let active = session.active_styles();
    assert!(!active.contains(&StyleOperation::Bold));
    assert!(active.contains(&StyleOperation::Italic));

    assert_eq!(
        session.styles_in_range(0..11),
        [StyleOperation::Bold, StyleOperation::Italic]
    );
    assert!(session.styles_in_range(9..11).is_empty());
}

#[test]
fn toggling_over_a_mixed_range_adds_first() {
    let mut session = StyledSession::from_plain_text("Hello world");
    session.apply_style(&StyleOperation::Bold, Some(0..5), true);
    assert!(!session.is_uniform(&StyleOperation::Bold, 0..8));

    session.toggle_style(&StyleOperation::Bold, Some(0..8));
    assert!(session.is_uniform(&StyleOperation::Bold, 0..8));
    session.toggle_style(&StyleOperation::Bold, Some(0..8));
    assert!(session.styles_in_range(0..8).is_empty());
}

#[test]
fn paragraph_styles_follow_the_caret_paragraph() {
    let mut session = StyledSession::from_plain_text("one\ntwo\nthree");
    session.on_selection_changed(Selection::caret(5));
    let center = StyleOperation::Align(Some(Alignment::Center));
    session.toggle_style(&center, Some(5..5));

    assert_eq!(ranges(&session), [(0, 3), (4, 7), (8, 12)]);
    assert!(session.is_uniform(&StyleOperation::Align(None), 4..4));
    assert!(!session.is_uniform(&center, 0..1));
    assert!(session.active_styles().contains(&center));
}

#[test]
fn out_of_range_styles_are_clamped() {
    let mut session = StyledSession::from_plain_text("abc");
    assert_eq!(
        session.apply_style(&StyleOperation::Bold, Some(7..9), true),
        None
    );
    assert_eq!(session.spans().len(), 1);
    session.apply_style(&StyleOperation::Bold, Some(1..90), true);
    assert_eq!(ranges(&session), [(0, 0), (1, 2)]);
}

#[test]
fn typed_text_gets_a_render_batch() {
    let mut session = StyledSession::from_plain_text("ab");
    session.set_typing_attributes(
        [StyleOperation::Underline]
            .into_iter()
            .collect::<StyleAttributes>(),
    );
    type_str(&mut session, "c");
    let batch = session.pending_updates().unwrap();
    assert_eq!(batch.updates().len(), 1);
    assert_eq!(batch.updates()[0].span.range, 2..3);
    assert!(batch.updates()[0].apply);
}

#[test]
fn paragraph_start_does_not_inherit_previous_header() {
    let mut session = StyledSession::from_plain_text("line one\nline two");
    let h1 = StyleOperation::Header(Some(HeaderLevel::H1));
    session.on_selection_changed(Selection::caret(3));
    session.apply_style(&h1, Some(3..3), true);

    session.on_selection_changed(Selection::caret(9));
    assert!(!session.active_styles().contains(&h1));
    type_str(&mut session, "X");
    assert_eq!(session.text(), "line one\nXline two");
    assert_eq!(ranges(&session), [(0, 8), (9, 17)]);
    assert!(session.styles_at(9).is_empty());
}

#[test]
fn paragraph_start_takes_its_own_header() {
    let mut session = StyledSession::from_plain_text("plain\nTitle");
    let h1 = StyleOperation::Header(Some(HeaderLevel::H1));
    session.apply_style(&h1, Some(8..8), true);

    session.on_selection_changed(Selection::caret(6));
    assert!(session.active_styles().contains(&h1));
    type_str(&mut session, "X");
    assert_eq!(ranges(&session), [(0, 5), (6, 11)]);
    assert!(session.styles_at(6).contains(&h1));
}

#[test]
fn caret_after_trailing_newline_has_no_paragraph_style() {
    let mut session = StyledSession::from_plain_text("Title\n");
    let right = StyleOperation::Align(Some(Alignment::Right));
    session.apply_style(&right, Some(0..0), true);
    session.on_selection_changed(Selection::caret(3));
    session.on_selection_changed(Selection::caret(6));
    assert!(session.typing_attributes().is_plain());

    // A style picked on the empty line applies to what is typed there.
    let h2 = StyleOperation::Header(Some(HeaderLevel::H2));
    session.apply_style(&h2, None, true);
    type_str(&mut session, "x");
    assert_eq!(ranges(&session), [(0, 5), (6, 6)]);
    assert!(session.styles_at(6).contains(&h2));
    assert!(!session.styles_at(6).contains(&right));
}

#[test]
fn backspace_joining_paragraphs_keeps_first_alignment() {
    let mut session = StyledSession::from_plain_text("ab\ncd");
    let center = StyleOperation::Align(Some(Alignment::Center));
    session.apply_style(&center, Some(4..4), true);
    session.on_selection_changed(Selection::caret(3));
    assert!(session.active_styles().contains(&center));

    backspace(&mut session);
    assert_eq!(session.text(), "abcd");
    assert_eq!(ranges(&session), [(0, 3)]);
    assert!(!session.is_uniform(&StyleOperation::Align(None), 0..4));
    assert!(!session.active_styles().contains(&center));
}

#[test]
fn clear_formatting_resets_whole_paragraphs() {
    let mut session = StyledSession::from_plain_text("ab\ncd");
    let right = StyleOperation::Align(Some(Alignment::Right));
    let first = session.apply_style(&right, Some(4..4), true).unwrap();
    assert!(session.complete_updates(first));

    session.apply_style(&StyleOperation::Default, Some(3..4), true);
    assert_eq!(ranges(&session), [(0, 4)]);
    let updates = session.pending_updates().unwrap().updates();
    assert!(!updates[0].apply);
    assert_eq!(updates[0].span.range, 3..5);
    assert_eq!(updates[1].span.range, 3..5);
}
