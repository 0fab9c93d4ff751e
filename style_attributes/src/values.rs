// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A header level, `H1` being the most prominent.
///
/// The absence of a header is expressed as `None` wherever a level is optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum HeaderLevel {
    /// Level 1.
    H1 = 1,
    /// Level 2.
    H2 = 2,
    /// Level 3.
    H3 = 3,
    /// Level 4.
    H4 = 4,
    /// Level 5.
    H5 = 5,
    /// Level 6.
    H6 = 6,
}

impl HeaderLevel {
    /// Returns the level for a number in `1..=6`.
    ///
    /// ```
    /// use style_attributes::HeaderLevel;
    ///
    /// assert_eq!(HeaderLevel::from_level(2), Some(HeaderLevel::H2));
    /// assert_eq!(HeaderLevel::from_level(0), None);
    /// assert_eq!(HeaderLevel::from_level(7), None);
    /// ```
    pub const fn from_level(level: u8) -> Option<Self> {
        Some(match level {
            1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            6 => Self::H6,
            _ => return None,
        })
    }

    /// Returns the numeric level, `1..=6`.
    pub const fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HeaderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.level())
    }
}

/// Paragraph alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center each line.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the width.
    Justify,
}

/// The marker style of a list paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ListKind {
    /// Unordered list with bullet markers.
    Bullet,
    /// Ordered list with numeric markers.
    Numbered,
    /// List with check box markers.
    Checkbox,
}

/// The list membership of a paragraph: marker kind plus nesting depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListStyle {
    /// The marker kind.
    pub kind: ListKind,
    /// Nesting depth, `0` being the outermost level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub indent: u8,
}

impl ListStyle {
    /// The deepest supported nesting level.
    pub const MAX_INDENT: u8 = 8;

    /// Creates a list style.
    pub const fn new(kind: ListKind, indent: u8) -> Self {
        Self { kind, indent }
    }
}
