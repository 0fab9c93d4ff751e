// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use crate::{Alignment, Color, HeaderLevel, ListStyle, StyleKind, StyleOperation, StyleSet};

/// The attribute bundle carried by a span.
///
/// Every field is independently optional. An unset field means "inherit/default", not
/// "explicitly off"; a flag stored as `Some(false)` is likewise not active. Compare bundles with
/// [`StyleAttributes::same_style`], which agrees with equality of their [`StyleSet`] views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StyleAttributes {
    /// Bold weight.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bold: Option<bool>,
    /// Italic style.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub italic: Option<bool>,
    /// Underline decoration.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub underline: Option<bool>,
    /// Strikethrough decoration.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub strikethrough: Option<bool>,
    /// Header level of the enclosing paragraph.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub header: Option<HeaderLevel>,
    /// List membership of the enclosing paragraph.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub list: Option<ListStyle>,
    /// Text size in points.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<u32>,
    /// Font family name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font: Option<String>,
    /// Foreground color.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<Color>,
    /// Background color.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub background: Option<Color>,
    /// Alignment of the enclosing paragraph.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub alignment: Option<Alignment>,
    /// Link target.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub link: Option<String>,
    /// Inline image reference.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub image: Option<String>,
}

impl StyleAttributes {
    /// The largest accepted text size, in points.
    pub const MAX_SIZE: u32 = 4096;

    /// Creates an empty bundle (nothing set).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is active.
    pub fn is_plain(&self) -> bool {
        self.same_style(&Self::default())
    }

    /// Updates the bundle with a single operation.
    ///
    /// When `add` is `true` the concept is set to the operation's value. A wildcard value leaves
    /// an already-set value in place (a wildcard list indent keeps the current depth). When `add`
    /// is `false` the concept is cleared whatever its current value. [`StyleOperation::Default`]
    /// always resets the whole bundle.
    pub fn apply(&mut self, op: &StyleOperation, add: bool) {
        if !add {
            self.clear(op.kind());
            return;
        }
        match op {
            StyleOperation::Bold => self.bold = Some(true),
            StyleOperation::Italic => self.italic = Some(true),
            StyleOperation::Underline => self.underline = Some(true),
            StyleOperation::Strikethrough => self.strikethrough = Some(true),
            StyleOperation::Header(level) => {
                if level.is_some() {
                    self.header = *level;
                }
            }
            StyleOperation::List { kind, indent } => {
                let indent = indent.unwrap_or_else(|| self.list.map_or(0, |l| l.indent));
                self.list = Some(ListStyle::new(*kind, indent));
            }
            StyleOperation::Size(size) => {
                if size.is_some() {
                    self.size = *size;
                }
            }
            StyleOperation::Font(font) => {
                if font.is_some() {
                    self.font.clone_from(font);
                }
            }
            StyleOperation::Color(color) => {
                if color.is_some() {
                    self.color = *color;
                }
            }
            StyleOperation::Background(color) => {
                if color.is_some() {
                    self.background = *color;
                }
            }
            StyleOperation::Align(alignment) => {
                if alignment.is_some() {
                    self.alignment = *alignment;
                }
            }
            StyleOperation::Link(link) => {
                if link.is_some() {
                    self.link.clone_from(link);
                }
            }
            StyleOperation::Image(image) => {
                if image.is_some() {
                    self.image.clone_from(image);
                }
            }
            StyleOperation::Default => *self = Self::default(),
        }
    }

    /// Returns a copy of this bundle updated with `op`.
    #[must_use]
    pub fn with(mut self, op: &StyleOperation, add: bool) -> Self {
        self.apply(op, add);
        self
    }

    /// Clears one concept. Clearing [`StyleKind::Default`] clears everything.
    pub fn clear(&mut self, kind: StyleKind) {
        match kind {
            StyleKind::Bold => self.bold = None,
            StyleKind::Italic => self.italic = None,
            StyleKind::Underline => self.underline = None,
            StyleKind::Strikethrough => self.strikethrough = None,
            StyleKind::Header => self.header = None,
            StyleKind::List => self.list = None,
            StyleKind::Size => self.size = None,
            StyleKind::Font => self.font = None,
            StyleKind::Color => self.color = None,
            StyleKind::Background => self.background = None,
            StyleKind::Align => self.alignment = None,
            StyleKind::Link => self.link = None,
            StyleKind::Image => self.image = None,
            StyleKind::Default => *self = Self::default(),
        }
    }

    /// Returns the derived set view: one operation per active attribute.
    pub fn style_set(&self) -> StyleSet {
        self.operations().collect()
    }

    /// Iterates the active attributes as operations, in field order.
    pub fn operations(&self) -> impl Iterator<Item = StyleOperation> + '_ {
        let flags = [
            (self.bold, StyleOperation::Bold),
            (self.italic, StyleOperation::Italic),
            (self.underline, StyleOperation::Underline),
            (self.strikethrough, StyleOperation::Strikethrough),
        ];
        let flags = flags
            .into_iter()
            .filter_map(|(flag, op)| (flag == Some(true)).then_some(op));
        let values = [
            self.header.map(|h| StyleOperation::Header(Some(h))),
            self.list.map(|l| StyleOperation::List {
                kind: l.kind,
                indent: Some(l.indent),
            }),
            self.size.map(|s| StyleOperation::Size(Some(s))),
            self.font.clone().map(|f| StyleOperation::Font(Some(f))),
            self.color.map(|c| StyleOperation::Color(Some(c))),
            self.background.map(|c| StyleOperation::Background(Some(c))),
            self.alignment.map(|a| StyleOperation::Align(Some(a))),
            self.link.clone().map(|l| StyleOperation::Link(Some(l))),
            self.image.clone().map(|i| StyleOperation::Image(Some(i))),
        ];
        flags.chain(values.into_iter().flatten())
    }

    /// Returns `true` if both bundles describe the same style.
    ///
    /// This is equivalent to comparing [`style_set`](Self::style_set)s, without allocating.
    pub fn same_style(&self, other: &Self) -> bool {
        fn flag(v: Option<bool>) -> bool {
            v == Some(true)
        }
        flag(self.bold) == flag(other.bold)
            && flag(self.italic) == flag(other.italic)
            && flag(self.underline) == flag(other.underline)
            && flag(self.strikethrough) == flag(other.strikethrough)
            && self.header == other.header
            && self.list == other.list
            && self.size == other.size
            && self.font == other.font
            && self.color == other.color
            && self.background == other.background
            && self.alignment == other.alignment
            && self.link == other.link
            && self.image == other.image
    }

    /// Returns `true` if the concept of `op` is set, matching wildcard payloads.
    pub fn has(&self, op: &StyleOperation) -> bool {
        self.operations().any(|active| op.matches(&active))
    }

    /// Returns a copy with only the paragraph-scoped attributes (header, list, alignment).
    #[must_use]
    pub fn paragraph_attributes(&self) -> Self {
        Self {
            header: self.header,
            list: self.list,
            alignment: self.alignment,
            ..Self::default()
        }
    }

    /// Replaces the paragraph-scoped attributes with those of `other`, keeping the rest.
    pub fn set_paragraph_attributes(&mut self, other: &Self) {
        self.header = other.header;
        self.list = other.list;
        self.alignment = other.alignment;
    }

    /// Returns `true` if both bundles agree on header, list and alignment.
    pub fn same_paragraph_style(&self, other: &Self) -> bool {
        self.header == other.header && self.list == other.list && self.alignment == other.alignment
    }

    /// Checks the values against the accepted ranges.
    pub fn validate(&self) -> Result<(), AttributeError> {
        if let Some(size) = self.size {
            if size == 0 || size > Self::MAX_SIZE {
                return Err(AttributeError::InvalidSize);
            }
        }
        if let Some(list) = self.list {
            if list.indent > ListStyle::MAX_INDENT {
                return Err(AttributeError::InvalidIndent);
            }
        }
        if self.font.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(AttributeError::EmptyFont);
        }
        if self.link.as_deref().is_some_and(str::is_empty) {
            return Err(AttributeError::EmptyLink);
        }
        if self.image.as_deref().is_some_and(str::is_empty) {
            return Err(AttributeError::EmptyImage);
        }
        Ok(())
    }
}

impl FromIterator<StyleOperation> for StyleAttributes {
    fn from_iter<I: IntoIterator<Item = StyleOperation>>(iter: I) -> Self {
        let mut attrs = Self::default();
        for op in iter {
            attrs.apply(&op, true);
        }
        attrs
    }
}

/// An error returned when a [`StyleAttributes`] value is out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttributeError {
    /// The text size was zero or above [`StyleAttributes::MAX_SIZE`].
    InvalidSize,
    /// The list indent was above [`ListStyle::MAX_INDENT`].
    InvalidIndent,
    /// The font family name was empty.
    EmptyFont,
    /// The link target was empty.
    EmptyLink,
    /// The image reference was empty.
    EmptyImage,
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(
                f,
                "text size must be in 1..={}",
                StyleAttributes::MAX_SIZE
            ),
            Self::InvalidIndent => write!(
                f,
                "list indent must be at most {}",
                ListStyle::MAX_INDENT
            ),
            Self::EmptyFont => f.write_str("empty font family name"),
            Self::EmptyLink => f.write_str("empty link target"),
            Self::EmptyImage => f.write_str("empty image reference"),
        }
    }
}

impl core::error::Error for AttributeError {}
