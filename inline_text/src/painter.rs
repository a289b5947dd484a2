// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the measure-then-build protocol.

use alloc::vec::Vec;

use text_style::{ParagraphStyle, RenderComparison};

use crate::{Error, InlineSpan, Paragraph, ParagraphBuilder, PlaceholderDimensions, WidgetSpan};

/// Measures the widgets embedded in a span tree.
///
/// Called once per widget span, in the order the placeholders are built.
pub trait PlaceholderMeasurer {
    /// Returns the dimensions of the widget span at position `index`.
    fn measure(&mut self, index: usize, span: &WidgetSpan) -> PlaceholderDimensions;
}

impl<F> PlaceholderMeasurer for F
where
    F: FnMut(usize, &WidgetSpan) -> PlaceholderDimensions,
{
    fn measure(&mut self, index: usize, span: &WidgetSpan) -> PlaceholderDimensions {
        self(index, span)
    }
}

/// Holds a span tree and the paragraph built from it, rebuilding only when needed.
///
/// Replacing the tree with [`set_text`](Self::set_text) compares it against the previous tree.
/// Layout changes discard the built paragraph so that the next [`layout`](Self::layout)
/// measures the widgets again. Paint changes rebuild the paragraph right away with the
/// placeholder dimensions from the last measurement.
#[derive(Clone, Debug)]
pub struct TextPainter {
    text: Option<InlineSpan>,
    paragraph_style: ParagraphStyle,
    text_scale_factor: f32,
    paragraph: Option<Paragraph>,
    /// Placeholder dimensions from the last measurement.
    dimensions: Vec<PlaceholderDimensions>,
}

impl TextPainter {
    /// Creates a painter without text.
    pub fn new(paragraph_style: ParagraphStyle) -> Self {
        Self {
            text: None,
            paragraph_style,
            text_scale_factor: 1.0,
            paragraph: None,
            dimensions: Vec::new(),
        }
    }

    /// The current span tree.
    pub fn text(&self) -> Option<&InlineSpan> {
        self.text.as_ref()
    }

    /// Replaces the span tree and returns how much it differs from the previous one.
    ///
    /// A change of [`RenderComparison::Layout`] discards the built paragraph. A change of
    /// [`RenderComparison::Paint`] rebuilds it without measuring the widgets again, so that its
    /// style table carries the new colors and decorations.
    pub fn set_text(&mut self, text: Option<InlineSpan>) -> RenderComparison {
        let comparison = match (&self.text, &text) {
            (Some(old), Some(new)) => old.compare_to(new),
            (None, None) => RenderComparison::Identical,
            _ => RenderComparison::Layout,
        };
        log::debug!("text replaced: {comparison:?}");
        self.text = text;
        if comparison.needs_layout() {
            self.paragraph = None;
        } else if comparison.needs_paint() && self.paragraph.is_some() {
            self.paragraph = match self.build_paragraph() {
                Ok(paragraph) => Some(paragraph),
                Err(err) => {
                    log::debug!("repaint rebuild failed, falling back to layout: {err}");
                    None
                }
            };
        }
        comparison
    }

    /// The paragraph level style.
    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph_style
    }

    /// Replaces the paragraph style, discarding the built paragraph if it changed.
    pub fn set_paragraph_style(&mut self, paragraph_style: ParagraphStyle) {
        if self.paragraph_style != paragraph_style {
            self.paragraph_style = paragraph_style;
            self.paragraph = None;
        }
    }

    /// The factor applied to font sizes and placeholder sizes.
    pub fn text_scale_factor(&self) -> f32 {
        self.text_scale_factor
    }

    /// Replaces the text scale factor, discarding the built paragraph if it changed.
    pub fn set_text_scale_factor(&mut self, text_scale_factor: f32) {
        if self.text_scale_factor != text_scale_factor {
            self.text_scale_factor = text_scale_factor;
            self.paragraph = None;
        }
    }

    /// Discards the built paragraph, so that the next [`layout`](Self::layout) measures the
    /// widgets again.
    ///
    /// Call this when an embedded widget changes size without the span tree changing.
    pub fn mark_needs_layout(&mut self) {
        self.paragraph = None;
    }

    /// Whether the next [`layout`](Self::layout) has to measure and rebuild the paragraph.
    pub fn needs_layout(&self) -> bool {
        self.paragraph.is_none()
    }

    /// The paragraph built by the last [`layout`](Self::layout), unless it has been invalidated.
    pub fn paragraph(&self) -> Option<&Paragraph> {
        self.paragraph.as_ref()
    }

    /// Builds the paragraph if needed and returns it.
    ///
    /// Widget spans are measured with `measurer` first, then the tree is built with the
    /// measured dimensions. A painter without text builds an empty paragraph.
    pub fn layout<M: PlaceholderMeasurer>(
        &mut self,
        measurer: &mut M,
    ) -> Result<&Paragraph, Error> {
        let paragraph = match self.paragraph.take() {
            Some(paragraph) => paragraph,
            None => {
                self.dimensions = self.measure(measurer);
                self.build_paragraph()?
            }
        };
        Ok(self.paragraph.insert(paragraph))
    }

    fn measure(&self, measurer: &mut impl PlaceholderMeasurer) -> Vec<PlaceholderDimensions> {
        let Some(text) = &self.text else {
            return Vec::new();
        };
        let dimensions: Vec<_> = text
            .widget_spans()
            .into_iter()
            .enumerate()
            .map(|(index, span)| measurer.measure(index, span))
            .collect();
        log::debug!("measured {} placeholders", dimensions.len());
        dimensions
    }

    fn build_paragraph(&self) -> Result<Paragraph, Error> {
        let mut builder = ParagraphBuilder::with_text_scale_factor(
            self.paragraph_style.clone(),
            self.text_scale_factor,
        );
        if let Some(text) = &self.text {
            let scale = self.text_scale_factor;
            text.build(&mut builder, &self.dimensions, scale)?;
        }
        Ok(builder.build())
    }
}
