// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use span_store::text::{clamp_range, contains_line_separator, paragraph_range, slice, utf16_len};
use span_store::{Span, SpanStore, effective_range};
use style_attributes::{StyleAttributes, StyleKind, StyleOperation, StyleSet};

use crate::outbox::{AttributeUpdate, UpdateBatch, UpdateOutbox};
use crate::{BatchId, SessionConfig, Selection};

/// One editing session over a styled text buffer.
///
/// The session owns the text, the [`SpanStore`] describing its styles, the current selection and
/// the typing attributes (the style given to the next typed text). The host reports what the
/// user did through the `on_*` events and [`apply_style`](Self::apply_style), pulls toolbar
/// state through the queries, and applies the resulting render updates from
/// [`pending_updates`](Self::pending_updates).
///
/// ```
/// use style_attributes::StyleOperation;
/// use styled_session::{Selection, StyledSession};
///
/// let mut session = StyledSession::from_plain_text("Hello world");
/// session.apply_style(&StyleOperation::Bold, Some(0..5), true);
///
/// // The user types "X" after "Hello" with bold active.
/// session.on_selection_changed(Selection::caret(5));
/// session.on_text_changed("HelloX world", Selection::caret(6));
///
/// let spans = session.spans();
/// assert_eq!((spans[0].from(), spans[0].to()), (0, 5));
/// assert_eq!((spans[1].from(), spans[1].to()), (6, 11));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledSession {
    pub(crate) text: String,
    pub(crate) store: SpanStore,
    pub(crate) selection: Selection,
    pub(crate) typing: StyleAttributes,
    pub(crate) outbox: UpdateOutbox,
    pub(crate) config: SessionConfig,
}

/// A single replacement `start..start + removed` → `inserted` code units, in old-text offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Edit {
    start: usize,
    removed: usize,
    inserted: usize,
}

impl StyledSession {
    /// Creates an empty session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a session over unstyled `text`, with the caret at the end.
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_plain_text_with_config(text, SessionConfig::default())
    }

    /// Creates a session over unstyled `text` with the given configuration.
    pub fn from_plain_text_with_config(text: &str, config: SessionConfig) -> Self {
        Self {
            text: text.to_owned(),
            store: SpanStore::with_plain_text(text),
            selection: Selection::caret(utf16_len(text)),
            config,
            ..Self::default()
        }
    }

    /// The text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The length of the text in UTF-16 code units.
    pub fn len(&self) -> usize {
        utf16_len(&self.text)
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The spans, in text order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        self.store.spans()
    }

    /// The underlying span store.
    #[inline]
    pub fn store(&self) -> &SpanStore {
        &self.store
    }

    /// The current selection.
    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The configuration.
    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The attributes the next typed text will get.
    #[inline]
    pub fn typing_attributes(&self) -> &StyleAttributes {
        &self.typing
    }

    /// Replaces the typing attributes.
    pub fn set_typing_attributes(&mut self, attributes: StyleAttributes) {
        self.typing = attributes;
    }

    // --- MARK: Events ---

    /// Reports that the host text became `new_text`, with `selection` as the selection after
    /// the change.
    ///
    /// One call is expected per insertion or deletion. The edit is located from the caret:
    /// an insertion of `k` units ends at the caret, a deletion starts there. When the texts do
    /// not agree with that reading, the differing middle is found by comparing the common
    /// prefix and suffix, and handled as a deletion followed by an insertion.
    ///
    /// A `new_text` equal to the current text (the host echoing back a render update) only
    /// updates the selection.
    pub fn on_text_changed(&mut self, new_text: &str, selection: Selection) {
        let new_len = utf16_len(new_text);
        let selection = selection.clamped(new_len);
        if new_text == self.text {
            log::debug!("text unchanged, treating as host echo");
            self.selection = selection;
            return;
        }
        if new_text.is_empty() {
            log::trace!("text cleared");
            self.text.clear();
            self.store.clear();
            self.typing = StyleAttributes::default();
            self.selection = Selection::caret(0);
            return;
        }

        let edit = detect_edit(&self.text, new_text, selection);
        log::trace!("text edit {edit:?}");
        let break_header = self.config.break_header_on_newline;

        if edit.removed > 0 {
            let deleted = edit.start..edit.start + edit.removed;
            let removed_separator = contains_line_separator(slice(&self.text, deleted.clone()));
            let render = if edit.inserted == 0 {
                self.store
                    .delete(new_text, deleted, removed_separator, break_header)
            } else {
                let mut between = String::with_capacity(self.text.len());
                between.push_str(slice(&self.text, 0..edit.start));
                between.push_str(slice(&self.text, deleted.end..usize::MAX));
                self.store
                    .delete(&between, deleted, removed_separator, break_header)
            };
            self.push_render(render, None);
        }

        if edit.inserted > 0 {
            let render = self.store.insert(
                new_text,
                edit.start,
                edit.inserted,
                &self.typing,
                break_header,
            );
            self.push_render(render, None);
            let inserted = slice(new_text, edit.start..edit.start + edit.inserted);
            if break_header && contains_line_separator(inserted) {
                self.typing.clear(StyleKind::Header);
            }
        }

        self.text.clear();
        self.text.push_str(new_text);
        self.selection = selection;
        if edit.inserted == 0 && self.config.typing_follows_caret {
            self.typing = self.attributes_for_selection(selection);
        } else {
            self.sync_paragraph_typing();
        }
    }

    /// Reports that the selection moved.
    ///
    /// With [`SessionConfig::typing_follows_caret`], a moved selection re-derives the typing
    /// attributes from the text before the caret (or at the start of a range selection).
    /// Reporting the current selection again keeps the typing attributes, so styles toggled at
    /// a caret survive the host confirming the caret position.
    pub fn on_selection_changed(&mut self, selection: Selection) {
        let selection = selection.clamped(self.len());
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        if self.config.typing_follows_caret {
            self.typing = self.attributes_for_selection(selection);
        }
    }

    /// Adds (`add == true`) or removes `op` over `range`.
    ///
    /// With no range, or an empty range and a character-scoped operation, only the typing
    /// attributes change. Paragraph-scoped operations (header, list, alignment) grow the range
    /// to whole paragraphs, so a caret is enough for them. The typing attributes also follow
    /// when the selection touches the styled range. Typed text always takes the header, list
    /// and alignment of the paragraph it lands in, so those only matter in the typing
    /// attributes while the caret's paragraph is empty.
    ///
    /// Returns the id of the render batch queued for the host, if anything needs re-rendering.
    pub fn apply_style(
        &mut self,
        op: &StyleOperation,
        range: Option<Range<usize>>,
        add: bool,
    ) -> Option<BatchId> {
        let len = self.len();
        let Some(range) = range else {
            self.typing.apply(op, add);
            return None;
        };
        let clamped = clamp_range(range.clone(), len);
        if clamped != range {
            log::debug!("clamped style range {range:?} to {clamped:?}");
        }
        if clamped.is_empty() && !op.is_paragraph_scoped() {
            log::debug!("{op:?} at a caret only changes the typing attributes");
            self.typing.apply(op, add);
            return None;
        }

        let effective = effective_range(&self.text, op, clamped.clone());
        let render = self.store.apply_style(&self.text, op, clamped, add);
        if self.selection.touches(&effective) {
            self.typing.apply(op, add);
        }
        self.sync_paragraph_typing();

        let clear_first = if matches!(op, StyleOperation::Default) {
            Some(paragraph_range(&self.text, effective))
        } else {
            (!add).then_some(effective)
        };
        self.push_render(render, clear_first)
    }

    /// Adds `op` over `range` unless it already applies throughout, in which case it is removed.
    ///
    /// A `None` range toggles `op` in the typing attributes. See [`is_uniform`](Self::is_uniform).
    pub fn toggle_style(
        &mut self,
        op: &StyleOperation,
        range: Option<Range<usize>>,
    ) -> Option<BatchId> {
        let active = match &range {
            Some(range) => self.is_uniform(op, range.clone()),
            None => self.typing.has(op),
        };
        self.apply_style(op, range, !active)
    }

    // --- MARK: Queries ---

    /// The styles to show as active in a toolbar.
    ///
    /// For a caret this is the typing attributes; for a range selection it is the styles every
    /// selected span shares.
    pub fn active_styles(&self) -> StyleSet {
        if self.selection.is_caret() {
            return self.typing.style_set();
        }
        let mut spans = self.store.spans_in_range(self.selection.range());
        let Some(first) = spans.next() else {
            return self.typing.style_set();
        };
        spans.fold(first.style_set(), |common, span| {
            common.intersection(&span.style_set())
        })
    }

    /// The styles applying at `offset`; empty outside the text.
    pub fn styles_at(&self, offset: usize) -> StyleSet {
        self.store.style_set_at(offset)
    }

    /// Every style applying somewhere in `range`, each once, in text order.
    pub fn styles_in_range(&self, range: Range<usize>) -> Vec<StyleOperation> {
        let range = clamp_range(range, self.len());
        let mut styles: Vec<StyleOperation> = Vec::new();
        for span in self.store.spans_in_range(range) {
            for op in span.attributes.operations() {
                if !styles.contains(&op) {
                    styles.push(op);
                }
            }
        }
        styles
    }

    /// Returns `true` if `op` applies throughout `range`.
    ///
    /// Paragraph-scoped operations are checked over the whole paragraphs `range` touches. Wildcard
    /// operations match any value of their concept. An empty range is checked against the
    /// typing attributes.
    pub fn is_uniform(&self, op: &StyleOperation, range: Range<usize>) -> bool {
        let range = clamp_range(range, self.len());
        let range = if op.is_paragraph_scoped() {
            effective_range(&self.text, op, range)
        } else {
            range
        };
        if range.is_empty() {
            return self.typing.has(op);
        }
        self.store
            .spans_in_range(range)
            .all(|span| span.attributes.has(op))
    }

    // --- MARK: Render updates ---

    /// The render batch the host should apply next, if any.
    #[inline]
    pub fn pending_updates(&self) -> Option<&UpdateBatch> {
        self.outbox.pending()
    }

    /// Acknowledges that the host applied batch `id`, handing out the next one.
    ///
    /// Returns `false` if `id` is not the batch in flight.
    pub fn complete_updates(&mut self, id: BatchId) -> bool {
        self.outbox.complete(id)
    }

    /// Returns `true` if no render batch is waiting for the host.
    pub fn is_settled(&self) -> bool {
        self.outbox.is_settled()
    }

    /// The number of render batches not yet acknowledged.
    pub fn queued_batches(&self) -> usize {
        self.outbox.len()
    }

    /// Queues a render batch made of an optional clearing step followed by `render`.
    pub(crate) fn push_render(
        &mut self,
        render: Vec<Span>,
        clear_first: Option<Range<usize>>,
    ) -> Option<BatchId> {
        let clear = clear_first.filter(|range| !range.is_empty());
        if render.is_empty() && clear.is_none() {
            return None;
        }
        let updates = clear
            .into_iter()
            .map(AttributeUpdate::clearing)
            .chain(render.into_iter().map(AttributeUpdate::applying))
            .collect();
        Some(self.outbox.push(updates))
    }

    /// The attributes the text at `selection` suggests for typing.
    ///
    /// Character styles come from the character before a caret (the first character at offset
    /// zero), or from the first selected character. Header, list and alignment come from the
    /// paragraph the selection starts in, and are unset when that paragraph is still empty.
    pub(crate) fn attributes_for_selection(&self, selection: Selection) -> StyleAttributes {
        let offset = if selection.is_caret() {
            selection.location.saturating_sub(1)
        } else {
            selection.location
        };
        let mut attributes = self
            .store
            .attributes_at(offset)
            .cloned()
            .unwrap_or_default();
        let paragraph = self
            .store
            .paragraph_attributes_at(&self.text, selection.location)
            .unwrap_or_default();
        attributes.set_paragraph_attributes(&paragraph);
        attributes
    }

    /// Matches the paragraph styles of the typing attributes to the caret's paragraph.
    ///
    /// An empty paragraph keeps whatever the typing attributes hold, so a header picked on an
    /// empty last line applies to what is typed there.
    fn sync_paragraph_typing(&mut self) {
        if let Some(paragraph) = self
            .store
            .paragraph_attributes_at(&self.text, self.selection.location)
        {
            self.typing.set_paragraph_attributes(&paragraph);
        }
    }
}

/// Locates the single edit turning `old` into `new`, given the selection after it.
fn detect_edit(old: &str, new: &str, selection: Selection) -> Edit {
    let old_len = utf16_len(old);
    let new_len = utf16_len(new);
    if new_len > old_len {
        let inserted = new_len - old_len;
        if let Some(start) = selection.location.checked_sub(inserted) {
            if slice(new, 0..start) == slice(old, 0..start)
                && slice(new, start + inserted..new_len) == slice(old, start..old_len)
            {
                return Edit {
                    start,
                    removed: 0,
                    inserted,
                };
            }
        }
    } else if new_len < old_len {
        let removed = old_len - new_len;
        let start = selection.location;
        if slice(new, 0..start) == slice(old, 0..start)
            && slice(new, start..new_len) == slice(old, start + removed..old_len)
        {
            return Edit {
                start,
                removed,
                inserted: 0,
            };
        }
    }
    diff_edit(old, new)
}

/// Finds the differing middle of `old` and `new` from their common prefix and suffix.
fn diff_edit(old: &str, new: &str) -> Edit {
    let prefix: usize = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf16())
        .sum();
    let old_len = utf16_len(old);
    let new_len = utf16_len(new);
    let max_suffix = old_len.min(new_len) - prefix;
    let mut suffix = 0;
    for (a, b) in old.chars().rev().zip(new.chars().rev()) {
        if a != b || suffix + a.len_utf16() > max_suffix {
            break;
        }
        suffix += a.len_utf16();
    }
    Edit {
        start: prefix,
        removed: old_len - prefix - suffix,
        inserted: new_len - prefix - suffix,
    }
}
