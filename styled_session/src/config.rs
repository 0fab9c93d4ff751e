// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Behaviour switches for a [`StyledSession`](crate::StyledSession).
///
/// ```
/// use styled_session::SessionConfig;
///
/// let config = SessionConfig::new().with_typing_follows_caret(false);
/// assert!(!config.typing_follows_caret);
/// assert!(config.break_header_on_newline);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Re-derive the typing attributes from the text before the caret whenever the selection
    /// moves. When off, the typing attributes only change through explicit style operations.
    pub typing_follows_caret: bool,
    /// End a header at a typed newline, and clear it from paragraphs joined by deleting a
    /// separator.
    pub break_header_on_newline: bool,
}

impl SessionConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            typing_follows_caret: true,
            break_header_on_newline: true,
        }
    }

    /// Sets [`typing_follows_caret`](Self::typing_follows_caret).
    #[must_use]
    pub const fn with_typing_follows_caret(mut self, value: bool) -> Self {
        self.typing_follows_caret = value;
        self
    }

    /// Sets [`break_header_on_newline`](Self::break_header_on_newline).
    #[must_use]
    pub const fn with_break_header_on_newline(mut self, value: bool) -> Self {
        self.break_header_on_newline = value;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
