// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use text_style::{ParagraphStyle, ResolvedStyle, TextBaseline};

use crate::PlaceholderAlignment;

/// A run of text sharing one entry of the style table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    /// Index into [`Paragraph::styles`].
    pub style_index: usize,
    /// Byte range of the run in [`Paragraph::text`].
    pub range: Range<usize>,
}

/// The measured geometry of one placeholder, produced by the external layout pass.
///
/// The vertical alignment is not part of the measurement; it comes from the
/// [`WidgetSpan`](crate::WidgetSpan) the dimensions are applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderDimensions {
    /// Width of the placeholder in logical pixels.
    pub width: f32,
    /// Height of the placeholder in logical pixels.
    pub height: f32,
    /// The baseline the offset below is measured against, or `None` to use the span's baseline.
    pub baseline: Option<TextBaseline>,
    /// Distance from the top of the placeholder to its baseline, or `None` to use the height.
    pub baseline_offset: Option<f32>,
}

impl PlaceholderDimensions {
    /// Dimensions without a baseline.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            baseline: None,
            baseline_offset: None,
        }
    }

    /// Sets the baseline the baseline offset refers to.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Sets the distance from the top of the placeholder to its baseline.
    #[must_use]
    pub fn with_baseline_offset(mut self, offset: f32) -> Self {
        self.baseline_offset = Some(offset);
        self
    }
}

/// A placeholder slot in a built paragraph.
///
/// Sizes are already multiplied by the placeholder's scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderRun {
    /// Byte offset of the placeholder character in [`Paragraph::text`].
    pub index: usize,
    /// Scaled width.
    pub width: f32,
    /// Scaled height.
    pub height: f32,
    /// Vertical alignment.
    pub alignment: PlaceholderAlignment,
    /// Scaled distance from the top of the placeholder to its baseline.
    pub baseline_offset: f32,
    /// The baseline used by baseline relative alignments.
    pub baseline: Option<TextBaseline>,
}

/// The output of a [`ParagraphBuilder`](crate::ParagraphBuilder), ready for shaping and line
/// breaking.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) styles: Vec<ResolvedStyle>,
    pub(crate) runs: Vec<StyleRun>,
    pub(crate) placeholders: Vec<PlaceholderRun>,
    pub(crate) placeholder_scales: Vec<f32>,
    pub(crate) paragraph_style: ParagraphStyle,
}

impl Paragraph {
    /// The flattened text, with [`PLACEHOLDER_CHAR`](crate::PLACEHOLDER_CHAR) at each placeholder.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The append-only style table the runs index into.
    pub fn styles(&self) -> &[ResolvedStyle] {
        &self.styles
    }

    /// Non-empty style runs in text order. Together they cover the text without gaps.
    pub fn style_runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Iterates over runs as (text, resolved style) pairs.
    pub fn runs(&self) -> impl Iterator<Item = (&str, &ResolvedStyle)> + '_ {
        self.runs
            .iter()
            .map(|run| (&self.text[run.range.clone()], &self.styles[run.style_index]))
    }

    /// The resolved style of the run containing byte `offset`.
    pub fn style_at(&self, offset: usize) -> Option<&ResolvedStyle> {
        let index = self.runs.partition_point(|run| run.range.end <= offset);
        let run = self.runs.get(index)?;
        run.range
            .contains(&offset)
            .then(|| &self.styles[run.style_index])
    }

    /// Placeholder slots in declaration order.
    pub fn placeholders(&self) -> &[PlaceholderRun] {
        &self.placeholders
    }

    /// The scale of each placeholder, in declaration order.
    pub fn placeholder_scales(&self) -> &[f32] {
        &self.placeholder_scales
    }

    /// The number of placeholders.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// The paragraph level style.
    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph_style
    }
}
