// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span Store is a small in-memory interval database mapping text ranges to style bundles.
//!
//! A [`SpanStore`] holds an ordered list of [`Span`]s, each pairing a range of the text with a
//! [`StyleAttributes`] bundle. Once any public operation returns, the spans are sorted, do not
//! overlap, cover the whole text without gaps, and no two neighbours carry the same style.
//!
//! - [`classify`] partitions spans by how they overlap a query range.
//! - [`merge`] normalizes a span list by joining same-style neighbours.
//! - [`SpanStore::apply_style`] adds or removes one style over a range.
//! - [`SpanStore::insert`] and [`SpanStore::delete`] keep offsets valid across text edits.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Forwarded to `style_attributes`.
//!
//! ## Indices
//!
//! All offsets are **UTF-16 code unit** offsets, matching what text-input controls report.
//! Ranges are half-open `start..end`; [`Span::from`] and [`Span::to`] give the inclusive view.
//! The helpers in [`text`] convert between UTF-16 offsets and `str` byte offsets.
//!
//! ## Example
//!
//! ```
//! use span_store::SpanStore;
//! use style_attributes::StyleOperation;
//!
//! let text = "Hello world";
//! let mut store = SpanStore::with_plain_text(text);
//! store.apply_style(text, &StyleOperation::Bold, 0..5, true);
//!
//! let spans = store.spans();
//! assert_eq!(spans.len(), 2);
//! assert_eq!((spans[0].from(), spans[0].to()), (0, 4));
//! assert_eq!((spans[1].from(), spans[1].to()), (5, 10));
//! assert!(store.style_set_at(2).contains(&StyleOperation::Bold));
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

pub mod text;

mod adjust;
mod classify;
mod editor;
mod merge;
mod span;
mod store;

pub use crate::classify::{OverlapBuckets, classify};
pub use crate::editor::effective_range;
pub use crate::merge::merge;
pub use crate::span::Span;
pub use crate::store::SpanStore;

pub use style_attributes::{StyleAttributes, StyleOperation, StyleSet};
