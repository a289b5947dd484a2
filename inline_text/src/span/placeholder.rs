// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use text_style::TextBaseline;

use crate::{Error, InlineSpanSemanticsInformation};

/// The object replacement character that stands in for a placeholder in text.
pub const PLACEHOLDER_CHAR: char = '\u{FFFC}';

/// Length in bytes of a placeholder in the flattened text.
pub(crate) const PLACEHOLDER_LEN: usize = PLACEHOLDER_CHAR.len_utf8();

/// Vertical alignment of a placeholder relative to the surrounding text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaceholderAlignment {
    /// The baseline of the placeholder is aligned with the text baseline.
    Baseline,
    /// The bottom edge of the placeholder is aligned with the text baseline.
    AboveBaseline,
    /// The top edge of the placeholder is aligned with the text baseline.
    BelowBaseline,
    /// The top edge of the placeholder is aligned with the top of the line.
    Top,
    /// The bottom edge of the placeholder is aligned with the bottom of the line.
    #[default]
    Bottom,
    /// The placeholder is vertically centered on the middle of the line.
    Middle,
}

impl PlaceholderAlignment {
    /// Whether the alignment is defined relative to a [`TextBaseline`].
    pub fn is_baseline_relative(self) -> bool {
        matches!(
            self,
            Self::Baseline | Self::AboveBaseline | Self::BelowBaseline
        )
    }

    /// Checks that a baseline is present when the alignment needs one.
    pub(crate) fn check_baseline(self, baseline: Option<TextBaseline>) -> Result<(), Error> {
        if self.is_baseline_relative() && baseline.is_none() {
            return Err(Error::missing_baseline(self));
        }
        Ok(())
    }
}

/// The part shared by every placeholder span: how the slot aligns with the text around it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaceholderSpan {
    alignment: PlaceholderAlignment,
    baseline: Option<TextBaseline>,
}

impl PlaceholderSpan {
    /// Creates a placeholder description.
    ///
    /// Fails with [`ErrorKind::MissingBaseline`](crate::ErrorKind::MissingBaseline) when
    /// `alignment` is baseline relative and `baseline` is `None`.
    pub fn new(
        alignment: PlaceholderAlignment,
        baseline: Option<TextBaseline>,
    ) -> Result<Self, Error> {
        alignment.check_baseline(baseline)?;
        Ok(Self {
            alignment,
            baseline,
        })
    }

    /// The vertical alignment of the slot.
    pub fn alignment(&self) -> PlaceholderAlignment {
        self.alignment
    }

    /// The baseline used by baseline relative alignments.
    pub fn baseline(&self) -> Option<TextBaseline> {
        self.baseline
    }

    pub(crate) fn compute_to_plain_text(buffer: &mut String, include_placeholders: bool) {
        if include_placeholders {
            buffer.push(PLACEHOLDER_CHAR);
        }
    }

    pub(crate) fn compute_semantics_information(
        collector: &mut Vec<InlineSpanSemanticsInformation>,
    ) {
        collector.push(InlineSpanSemanticsInformation::PLACEHOLDER);
    }
}
