// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A caret or selection as reported by a text-input control, in UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// The first selected offset, or the caret position.
    pub location: usize,
    /// The number of selected code units; zero for a caret.
    pub length: usize,
}

impl Selection {
    /// Creates a selection of `length` code units starting at `location`.
    #[inline]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Creates a collapsed selection at `offset`.
    #[inline]
    pub const fn caret(offset: usize) -> Self {
        Self::new(offset, 0)
    }

    /// Creates a selection covering `range`.
    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }

    /// Returns `true` if nothing is selected.
    #[inline]
    pub const fn is_caret(&self) -> bool {
        self.length == 0
    }

    /// The offset just past the selection.
    #[inline]
    pub const fn end(&self) -> usize {
        self.location + self.length
    }

    /// The selected range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.location..self.end()
    }

    /// Returns `true` if the selection touches `range`.
    ///
    /// A caret touches a range when it sits anywhere from its start to its end, inclusive.
    pub fn touches(&self, range: &Range<usize>) -> bool {
        if self.is_caret() {
            range.start <= self.location && self.location <= range.end
        } else {
            self.location < range.end && self.end() > range.start
        }
    }

    /// Clamps the selection into a text of `len` code units.
    #[must_use]
    pub fn clamped(self, len: usize) -> Self {
        let location = self.location.min(len);
        let length = self.length.min(len - location);
        Self { location, length }
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}
