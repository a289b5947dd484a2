// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which side of a boundary a caret position is attached to.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
pub enum Affinity {
    /// Attached to the content logically following the position.
    #[default]
    Downstream,
    /// Attached to the content logically preceding the position.
    Upstream,
}

/// A caret position in text: a byte offset plus an [`Affinity`].
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
pub struct TextPosition {
    /// Byte offset into the text.
    pub offset: usize,
    /// Tie-break at span boundaries.
    pub affinity: Affinity,
}

impl TextPosition {
    /// Creates a position.
    pub fn new(offset: usize, affinity: Affinity) -> Self {
        Self { offset, affinity }
    }

    /// A position attached to the following content.
    pub fn downstream(offset: usize) -> Self {
        Self::new(offset, Affinity::Downstream)
    }

    /// A position attached to the preceding content.
    pub fn upstream(offset: usize) -> Self {
        Self::new(offset, Affinity::Upstream)
    }

    /// Whether this position belongs to the half-open range `start..end`.
    ///
    /// Interior offsets always match. At `start` only a downstream position matches and at
    /// `end` only an upstream one, so a position on the boundary between two adjacent ranges
    /// matches exactly one of them.
    pub(crate) fn is_within(self, start: usize, end: usize) -> bool {
        (self.offset == start && self.affinity == Affinity::Downstream)
            || (start < self.offset && self.offset < end)
            || (self.offset == end && self.affinity == Affinity::Upstream)
    }
}
