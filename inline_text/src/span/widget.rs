// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::{Hash, Hasher};

use text_style::{RenderComparison, TextBaseline, TextStyle};

use super::placeholder::PLACEHOLDER_LEN;
use crate::{
    Accumulator, Error, ParagraphBuilder, PlaceholderAlignment, PlaceholderDimensions,
    PlaceholderSpan, Recognizer, TextPosition,
};

/// Identifies a widget that is laid out outside of the paragraph.
///
/// The paragraph layer never looks inside the widget; the id is only compared and handed back to
/// the [`PlaceholderMeasurer`](crate::PlaceholderMeasurer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(pub u64);

/// A placeholder span that embeds a widget inline with text.
///
/// Each widget span produces exactly one placeholder slot when the tree is built. Its size is
/// measured by an external layout pass and supplied through the `dimensions` argument of
/// [`InlineSpan::build`](crate::InlineSpan::build), in declaration order.
#[derive(Clone, Debug)]
pub struct WidgetSpan {
    widget: WidgetId,
    placeholder: PlaceholderSpan,
    style: Option<TextStyle>,
    hover_recognizer: Option<Recognizer>,
}

impl WidgetSpan {
    /// Creates a widget span.
    ///
    /// Fails with [`ErrorKind::MissingBaseline`](crate::ErrorKind::MissingBaseline) when
    /// `alignment` is baseline relative and `baseline` is `None`.
    pub fn new(
        widget: WidgetId,
        alignment: PlaceholderAlignment,
        baseline: Option<TextBaseline>,
    ) -> Result<Self, Error> {
        Ok(Self {
            widget,
            placeholder: PlaceholderSpan::new(alignment, baseline)?,
            style: None,
            hover_recognizer: None,
        })
    }

    /// Creates a bottom aligned widget span, which needs no baseline.
    pub fn bottom(widget: WidgetId) -> Self {
        Self {
            widget,
            placeholder: PlaceholderSpan::default(),
            style: None,
            hover_recognizer: None,
        }
    }

    /// Sets the style pushed around the placeholder.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the hover recognizer.
    #[must_use]
    pub fn with_hover_recognizer(mut self, recognizer: Recognizer) -> Self {
        self.hover_recognizer = Some(recognizer);
        self
    }

    /// The embedded widget.
    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    /// Alignment settings of the slot.
    pub fn placeholder(&self) -> &PlaceholderSpan {
        &self.placeholder
    }

    /// The vertical alignment of the slot.
    pub fn alignment(&self) -> PlaceholderAlignment {
        self.placeholder.alignment()
    }

    /// The baseline used by baseline relative alignments.
    pub fn baseline(&self) -> Option<TextBaseline> {
        self.placeholder.baseline()
    }

    /// The style of this span.
    pub fn style(&self) -> Option<&TextStyle> {
        self.style.as_ref()
    }

    /// The hover recognizer.
    pub fn hover_recognizer(&self) -> Option<&Recognizer> {
        self.hover_recognizer.as_ref()
    }

    pub(crate) fn build(
        &self,
        builder: &mut ParagraphBuilder,
        dimensions: &[PlaceholderDimensions],
        text_scale_factor: f32,
    ) -> Result<(), Error> {
        let index = builder.placeholder_count();
        let Some(current) = dimensions.get(index) else {
            let len = dimensions.len();
            return Err(Error::placeholder_dimensions_exhausted(index, len));
        };
        let widget = self.widget;
        log::trace!("widget {widget:?} takes placeholder {index}: {current:?}");

        if let Some(style) = &self.style {
            builder.push_style(style, text_scale_factor);
        }
        builder.add_placeholder(
            current.width,
            current.height,
            self.alignment(),
            current.baseline_offset,
            current.baseline.or(self.baseline()),
            text_scale_factor,
        )?;
        if self.style.is_some() {
            builder.pop();
        }
        Ok(())
    }

    /// Claims `position` if it falls on this placeholder, otherwise advances `offset` past it.
    ///
    /// Unlike text, the start of a placeholder is claimed regardless of affinity.
    pub(crate) fn claim_position(&self, position: TextPosition, offset: &mut Accumulator) -> bool {
        let start = offset.value();
        if position.offset == start || position.is_within(start, start + PLACEHOLDER_LEN) {
            return true;
        }
        offset.increment(PLACEHOLDER_LEN);
        false
    }

    pub(crate) fn code_unit_at_visitor(offset: &mut Accumulator) -> Option<u8> {
        offset.increment(PLACEHOLDER_LEN);
        None
    }

    pub(crate) fn compare_to(&self, other: &Self) -> RenderComparison {
        if core::ptr::eq(self, other) {
            return RenderComparison::Identical;
        }
        if self.style.is_some() != other.style.is_some()
            || self.widget != other.widget
            || self.placeholder != other.placeholder
        {
            return RenderComparison::Layout;
        }

        let mut result = RenderComparison::Identical;
        if self.hover_recognizer != other.hover_recognizer {
            result = RenderComparison::Function;
        }
        if let (Some(style), Some(other_style)) = (&self.style, &other.style) {
            result = result.combine(style.compare_to(other_style));
        }
        result
    }
}

impl PartialEq for WidgetSpan {
    fn eq(&self, other: &Self) -> bool {
        self.widget == other.widget
            && self.placeholder == other.placeholder
            && self.style == other.style
    }
}

impl Hash for WidgetSpan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.widget.hash(state);
        self.placeholder.hash(state);
    }
}
