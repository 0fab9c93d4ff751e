// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use span_store::text::{slice, utf16_len};
use span_store::{Span, SpanStore};
use style_attributes::StyleAttributes;

use crate::outbox::AttributeUpdate;
use crate::{DecodeError, Selection, SessionConfig, StyledSession};

/// One piece of the flat, persisted form of a styled text: some text and the attributes over it.
///
/// With the `serde` feature this serializes as `{ "insert": "...", "attributes": { ... } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledRun {
    /// The text of the run.
    pub insert: String,
    /// The attributes over the whole run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: StyleAttributes,
}

impl StyledRun {
    /// Creates a run.
    pub fn new(insert: impl Into<String>, attributes: StyleAttributes) -> Self {
        Self {
            insert: insert.into(),
            attributes,
        }
    }
}

impl StyledSession {
    /// Converts the session into its flat form: one run per span, in text order.
    pub fn encode(&self) -> Vec<StyledRun> {
        self.store
            .iter()
            .map(|span| StyledRun {
                insert: slice(&self.text, span.range.clone()).to_owned(),
                attributes: span.attributes.clone(),
            })
            .collect()
    }

    /// Rebuilds a session from its flat form.
    ///
    /// The text is the concatenation of the runs; each run's span starts where the previous one
    /// ended, in UTF-16 code units. Empty runs are skipped and neighbouring runs with the same
    /// style are merged. The caret is placed at the end of the text.
    ///
    /// Every run's attributes are validated first; on failure nothing is built.
    pub fn decode(runs: &[StyledRun], config: SessionConfig) -> Result<Self, DecodeError> {
        for (ix, run) in runs.iter().enumerate() {
            run.attributes
                .validate()
                .map_err(|error| DecodeError::invalid_attributes(ix, error))?;
        }

        let mut text = String::with_capacity(runs.iter().map(|run| run.insert.len()).sum());
        let mut spans = Vec::with_capacity(runs.len());
        let mut offset = 0;
        for run in runs {
            let end = offset + utf16_len(&run.insert);
            spans.push(Span::new(offset..end, run.attributes.clone()));
            text.push_str(&run.insert);
            offset = end;
        }

        let mut session = Self {
            text,
            store: SpanStore::from_spans(spans),
            selection: Selection::caret(offset),
            config,
            ..Self::default()
        };
        if config.typing_follows_caret {
            session.typing = session.attributes_for_selection(session.selection);
        }
        Ok(session)
    }

    /// Replaces the text and styles of this session with decoded `runs`, keeping its
    /// configuration.
    ///
    /// On success a render batch clearing the old styles and applying every new span is queued.
    /// On failure the session is left unchanged.
    pub fn load(&mut self, runs: &[StyledRun]) -> Result<(), DecodeError> {
        let decoded = Self::decode(runs, self.config)?;
        self.text = decoded.text;
        self.store = decoded.store;
        self.selection = decoded.selection;
        self.typing = decoded.typing;

        let len = self.len();
        let mut updates = Vec::with_capacity(self.store.len() + 1);
        if len > 0 {
            updates.push(AttributeUpdate::clearing(0..len));
        }
        updates.extend(self.store.iter().cloned().map(AttributeUpdate::applying));
        if !updates.is_empty() {
            self.outbox.push(updates);
        }
        Ok(())
    }
}
