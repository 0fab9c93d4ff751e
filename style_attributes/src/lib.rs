// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style vocabulary for span-based rich text.
//!
//! This crate is the leaf layer of the workspace. It defines:
//! - [`StyleOperation`]: one formatting concept (bold, color, header level, …), optionally
//!   carrying a value. A `None` value is a wildcard: "the concept is active, value unspecified".
//! - [`StyleAttributes`]: the attribute bundle stored on every span. All fields are optional;
//!   an unset field means "inherit/default", not "explicitly off".
//! - [`StyleSet`]: the derived set view of a bundle. Two bundles are the same style iff their
//!   sets are equal.
//!
//! It knows nothing about text offsets or spans; see the `span_store` crate for that.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Implement `Serialize`/`Deserialize` for the vocabulary types.
//!
//! ## Example
//!
//! ```
//! use style_attributes::{HeaderLevel, StyleAttributes, StyleOperation};
//!
//! let mut attrs = StyleAttributes::new();
//! attrs.apply(&StyleOperation::Bold, true);
//! attrs.apply(&StyleOperation::Header(Some(HeaderLevel::H2)), true);
//!
//! let set = attrs.style_set();
//! assert!(set.contains(&StyleOperation::Bold));
//! assert!(set.contains_matching(&StyleOperation::Header(None)));
//!
//! attrs.apply(&StyleOperation::Bold, false);
//! assert!(!attrs.style_set().contains(&StyleOperation::Bold));
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

mod attributes;
mod color;
mod operation;
mod set;
mod values;

pub use attributes::{AttributeError, StyleAttributes};
pub use color::{Color, ParseColorError};
pub use operation::{StyleKind, StyleOperation};
pub use set::StyleSet;
pub use values::{Alignment, HeaderLevel, ListKind, ListStyle};
