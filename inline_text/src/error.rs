// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PlaceholderAlignment;

/// Error type for span construction and paragraph building.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the context that was available when the
/// violation was detected. Every error here is a caller bug (an invalid tree or a mismatch between
/// the measure and build passes); none of them are transient.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The placeholder alignment involved, for placeholder validation errors.
    alignment: Option<PlaceholderAlignment>,

    /// The index of the placeholder being built, for dimension errors.
    placeholder_index: Option<usize>,

    /// The number of placeholder dimensions that were supplied, for dimension errors.
    dimensions_len: Option<usize>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The placeholder alignment involved in the error, if any.
    pub fn alignment(&self) -> Option<PlaceholderAlignment> {
        self.alignment
    }

    /// The index of the placeholder whose dimensions were requested, if any.
    pub fn placeholder_index(&self) -> Option<usize> {
        self.placeholder_index
    }

    /// The number of placeholder dimensions that were available, if relevant.
    pub fn dimensions_len(&self) -> Option<usize> {
        self.dimensions_len
    }

    pub(crate) fn missing_baseline(alignment: PlaceholderAlignment) -> Self {
        Self {
            kind: ErrorKind::MissingBaseline,
            alignment: Some(alignment),
            placeholder_index: None,
            dimensions_len: None,
        }
    }

    pub(crate) fn invalid_placeholder_semantics() -> Self {
        Self {
            kind: ErrorKind::InvalidPlaceholderSemantics,
            alignment: None,
            placeholder_index: None,
            dimensions_len: None,
        }
    }

    pub(crate) fn placeholder_dimensions_exhausted(index: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::PlaceholderDimensionsExhausted,
            alignment: None,
            placeholder_index: Some(index),
            dimensions_len: Some(len),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::MissingBaseline => match self.alignment {
                Some(alignment) => write!(f, "{alignment:?} placeholder without a baseline"),
                None => write!(f, "baseline relative placeholder without a baseline"),
            },
            ErrorKind::InvalidPlaceholderSemantics => write!(
                f,
                "placeholder semantics must have the text U+FFFC and no label or recognizer"
            ),
            ErrorKind::PlaceholderDimensionsExhausted => write!(
                f,
                "placeholder {} requested but only {} placeholder dimensions were provided",
                self.placeholder_index.unwrap_or_default(),
                self.dimensions_len.unwrap_or_default()
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A placeholder was aligned relative to a baseline without naming the baseline.
    MissingBaseline,

    /// A placeholder semantics record had text other than U+FFFC, a label, or a recognizer.
    InvalidPlaceholderSemantics,

    /// A widget span was built after every supplied placeholder dimension had been consumed.
    ///
    /// This indicates that the measure pass and the build pass saw different trees.
    PlaceholderDimensionsExhausted,
}
