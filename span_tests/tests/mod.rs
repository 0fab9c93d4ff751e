// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `span_store` and `styled_session`.
//!
//! - The `util` module holds helpers shared by the other modules: building sessions, simulating
//!   a text view typing and deleting, and flattening spans for comparison.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so the helpers are shared.
//! - `scenarios` walks through concrete editing sessions step by step, `roundtrip` covers the
//!   persisted JSON form, and `properties` checks the store invariants against random edits.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `delete_first_character` rather than `first_character_delete`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
