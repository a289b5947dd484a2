// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The amount of work required to bring a rendering up to date after a change.
///
/// Variants are ordered by increasing severity, so comparisons can be combined with
/// [`max`](Ord::max) (or [`RenderComparison::combine`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderComparison {
    /// The two values are identical; nothing needs to be done.
    #[default]
    Identical,
    /// Only metadata that does not affect rendering changed (for example a tap recognizer
    /// or a semantics label).
    Metadata,
    /// Interaction callbacks changed (for example a hover recognizer), which may require the
    /// hit testing setup to be refreshed but does not affect painting.
    Function,
    /// The change affects painting (colors, decorations) but not glyph positions.
    Paint,
    /// The change affects glyph positions and requires a new layout.
    Layout,
}

impl RenderComparison {
    /// Returns the more severe of the two comparisons.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether a new layout is required.
    pub fn needs_layout(self) -> bool {
        self == Self::Layout
    }

    /// Whether anything visible changed, requiring at least a repaint.
    pub fn needs_paint(self) -> bool {
        self >= Self::Paint
    }
}
