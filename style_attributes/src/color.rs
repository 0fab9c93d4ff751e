// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// An sRGB color with alpha, written as a hex string (`#rrggbb` or `#rrggbbaa`).
///
/// Colors are stored as bytes so that equality and hashing are exact; the hex form is only a
/// serialization concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    rgba: [u8; 4],
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Creates an opaque color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgba: [r, g, b, 0xff],
        }
    }

    /// Creates a color from its components, including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { rgba: [r, g, b, a] }
    }

    /// Returns the `[r, g, b, a]` components.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        self.rgba
    }

    /// Parses a hex color.
    ///
    /// Accepts `rgb`, `rrggbb` and `rrggbbaa` digits with an optional leading `#`. Surrounding
    /// whitespace is ignored and digits are case-insensitive.
    ///
    /// ```
    /// use style_attributes::Color;
    ///
    /// assert_eq!(Color::parse("#FF8000"), Ok(Color::rgb(0xff, 0x80, 0x00)));
    /// assert_eq!(Color::parse("f80"), Ok(Color::rgb(0xff, 0x88, 0x00)));
    /// assert!(Color::parse("#12345").is_err());
    /// ```
    #[inline(always)]
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        s.parse()
    }
}

fn hex_digit(b: u8) -> Result<u8, ParseColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(ParseColorError::InvalidDigit),
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        match digits.len() {
            3 => {
                let mut rgba = [0xff_u8; 4];
                for (i, &d) in digits.iter().enumerate() {
                    let v = hex_digit(d)?;
                    rgba[i] = (v << 4) | v;
                }
                Ok(Self { rgba })
            }
            6 | 8 => {
                let mut rgba = [0xff_u8; 4];
                for (i, pair) in digits.chunks_exact(2).enumerate() {
                    rgba[i] = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
                }
                Ok(Self { rgba })
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba;
        if a == 0xff {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        alloc::format!("{value}")
    }
}

/// An error returned when parsing a [`Color`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input contained no hex digits.
    Empty,
    /// The input was not 3, 6 or 8 hex digits long.
    InvalidLength,
    /// The input contained a character that is not a hex digit.
    InvalidDigit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color string"),
            Self::InvalidLength => f.write_str("color must have 3, 6 or 8 hex digits"),
            Self::InvalidDigit => f.write_str("invalid hex digit in color"),
        }
    }
}

impl core::error::Error for ParseColorError {}
