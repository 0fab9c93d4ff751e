// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use style_attributes::AttributeError;

/// Error returned when a sequence of [`StyledRun`](crate::StyledRun)s cannot be loaded.
///
/// Carries a non-exhaustive [`DecodeErrorKind`] and the index of the offending run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    run: usize,
}

impl DecodeError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// The index of the run that failed to decode.
    pub fn run(&self) -> usize {
        self.run
    }

    pub(crate) fn invalid_attributes(run: usize, error: AttributeError) -> Self {
        Self {
            kind: DecodeErrorKind::InvalidAttributes(error),
            run,
        }
    }
}

/// Categories of decode failures.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// A run carried attribute values outside their accepted ranges.
    InvalidAttributes(AttributeError),
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttributes(error) => write!(f, "invalid attributes: {error}"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run {}: {}", self.run, self.kind)
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::InvalidAttributes(error) => Some(error),
        }
    }
}
