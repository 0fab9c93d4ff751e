// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{Alignment, Color, HeaderLevel, ListKind};

/// A single formatting concept, optionally carrying its value.
///
/// Value-carrying variants use `Option` payloads. `None` is a wildcard meaning "the concept is
/// active, value unspecified"; see [`StyleOperation::matches`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "op", content = "value", rename_all = "snake_case")
)]
pub enum StyleOperation {
    /// Bold weight.
    Bold,
    /// Italic style.
    Italic,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Paragraph header level.
    Header(Option<HeaderLevel>),
    /// Paragraph list membership.
    List {
        /// The marker kind.
        kind: ListKind,
        /// Nesting depth; `None` keeps the current depth when applied.
        indent: Option<u8>,
    },
    /// Text size in points.
    Size(Option<u32>),
    /// Font family name.
    Font(Option<String>),
    /// Foreground color.
    Color(Option<Color>),
    /// Background color.
    Background(Option<Color>),
    /// Paragraph alignment.
    Align(Option<Alignment>),
    /// Link target.
    Link(Option<String>),
    /// Inline image reference.
    Image(Option<String>),
    /// Clear formatting.
    Default,
}

/// The concept a [`StyleOperation`] refers to, without its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// See [`StyleOperation::Bold`].
    Bold,
    /// See [`StyleOperation::Italic`].
    Italic,
    /// See [`StyleOperation::Underline`].
    Underline,
    /// See [`StyleOperation::Strikethrough`].
    Strikethrough,
    /// See [`StyleOperation::Header`].
    Header,
    /// See [`StyleOperation::List`].
    List,
    /// See [`StyleOperation::Size`].
    Size,
    /// See [`StyleOperation::Font`].
    Font,
    /// See [`StyleOperation::Color`].
    Color,
    /// See [`StyleOperation::Background`].
    Background,
    /// See [`StyleOperation::Align`].
    Align,
    /// See [`StyleOperation::Link`].
    Link,
    /// See [`StyleOperation::Image`].
    Image,
    /// See [`StyleOperation::Default`].
    Default,
}

impl StyleKind {
    /// Returns `true` for concepts that apply to whole paragraphs rather than characters.
    pub const fn is_paragraph_scoped(self) -> bool {
        matches!(self, Self::Header | Self::List | Self::Align)
    }
}

impl StyleOperation {
    /// Returns the concept this operation refers to.
    pub fn kind(&self) -> StyleKind {
        match self {
            Self::Bold => StyleKind::Bold,
            Self::Italic => StyleKind::Italic,
            Self::Underline => StyleKind::Underline,
            Self::Strikethrough => StyleKind::Strikethrough,
            Self::Header(_) => StyleKind::Header,
            Self::List { .. } => StyleKind::List,
            Self::Size(_) => StyleKind::Size,
            Self::Font(_) => StyleKind::Font,
            Self::Color(_) => StyleKind::Color,
            Self::Background(_) => StyleKind::Background,
            Self::Align(_) => StyleKind::Align,
            Self::Link(_) => StyleKind::Link,
            Self::Image(_) => StyleKind::Image,
            Self::Default => StyleKind::Default,
        }
    }

    /// Returns `true` if this operation styles whole paragraphs (header, list, alignment).
    pub fn is_paragraph_scoped(&self) -> bool {
        self.kind().is_paragraph_scoped()
    }

    /// Returns `true` if this operation carries no value where one could be given.
    pub fn is_wildcard(&self) -> bool {
        match self {
            Self::Header(v) => v.is_none(),
            Self::List { indent, .. } => indent.is_none(),
            Self::Size(v) => v.is_none(),
            Self::Font(v) | Self::Link(v) | Self::Image(v) => v.is_none(),
            Self::Color(v) | Self::Background(v) => v.is_none(),
            Self::Align(v) => v.is_none(),
            Self::Bold
            | Self::Italic
            | Self::Underline
            | Self::Strikethrough
            | Self::Default => false,
        }
    }

    /// Returns `true` if `self`, used as a pattern, matches `other`.
    ///
    /// Both must refer to the same concept; a wildcard payload in `self` matches any value.
    ///
    /// ```
    /// use style_attributes::{Color, StyleOperation};
    ///
    /// let red = StyleOperation::Color(Some(Color::rgb(255, 0, 0)));
    /// assert!(StyleOperation::Color(None).matches(&red));
    /// assert!(!red.matches(&StyleOperation::Color(Some(Color::BLACK))));
    /// ```
    pub fn matches(&self, other: &Self) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        match (self, other) {
            (Self::List { kind, indent }, Self::List { kind: k, indent: i }) => {
                kind == k && (indent.is_none() || indent == i)
            }
            _ => self.is_wildcard() || self == other,
        }
    }
}
