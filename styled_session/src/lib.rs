// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An editing session over styled text, built on [`span_store`].
//!
//! - [`style_attributes`] defines the style vocabulary.
//! - [`span_store`] keeps styles on UTF-16 ranges consistent across edits.
//! - `styled_session` wires them to a text-input control:
//!   - [`StyledSession`]: text, spans, selection and typing attributes for one editing session
//!   - [`StyledRun`]: the flat `insert` + `attributes` form used for persistence and export
//!
//! ## Control flow
//!
//! The host reports every change of its text view with
//! [`on_text_changed`](StyledSession::on_text_changed), every caret move with
//! [`on_selection_changed`](StyledSession::on_selection_changed), and style buttons with
//! [`apply_style`](StyledSession::apply_style) or [`toggle_style`](StyledSession::toggle_style).
//! Toolbar state is pulled with [`active_styles`](StyledSession::active_styles) and
//! [`styles_in_range`](StyledSession::styles_in_range).
//!
//! Applying styles to the host's text view is itself a change the host may report back. To
//! keep that from feeding into the span store, render updates go through an outbox: the host
//! takes the batch from [`pending_updates`](StyledSession::pending_updates), applies it, and
//! acknowledges it with [`complete_updates`](StyledSession::complete_updates). A text-changed
//! event repeating the current text is treated as such an echo.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Implement `Serialize`/`Deserialize` for [`StyledRun`] and [`SessionConfig`].
//!
//! ## Example
//!
//! ```
//! use style_attributes::StyleOperation;
//! use styled_session::{SessionConfig, Selection, StyledSession};
//!
//! let mut session = StyledSession::from_plain_text("Hello world");
//! session.on_selection_changed(Selection::new(0, 5));
//! let batch = session.toggle_style(&StyleOperation::Bold, Some(0..5)).unwrap();
//!
//! // The host applies the update to its view, then acknowledges it.
//! let pending = session.pending_updates().unwrap();
//! assert_eq!(pending.id(), batch);
//! assert_eq!(pending.updates()[0].span.range, 0..5);
//! assert!(session.complete_updates(batch));
//!
//! assert!(session.active_styles().contains(&StyleOperation::Bold));
//!
//! let runs = session.encode();
//! let restored = StyledSession::decode(&runs, SessionConfig::default()).unwrap();
//! assert_eq!(restored.spans(), session.spans());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod codec;
mod config;
mod error;
mod outbox;
mod selection;
mod session;

#[cfg(test)]
mod tests;

pub use crate::codec::StyledRun;
pub use crate::config::SessionConfig;
pub use crate::error::{DecodeError, DecodeErrorKind};
pub use crate::outbox::{AttributeUpdate, BatchId, UpdateBatch};
pub use crate::selection::Selection;
pub use crate::session::StyledSession;

pub use span_store;
pub use style_attributes;
