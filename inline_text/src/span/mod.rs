// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inline span tree.

mod clusters;
mod placeholder;
mod text;
mod widget;

use alloc::string::String;
use alloc::vec::Vec;

use text_style::{RenderComparison, TextStyle};

pub use placeholder::{PLACEHOLDER_CHAR, PlaceholderAlignment, PlaceholderSpan};
pub use text::TextSpan;
pub use widget::{WidgetId, WidgetSpan};

use crate::{
    Accumulator, Error, InlineSpanSemanticsInformation, ParagraphBuilder, PlaceholderDimensions,
    Recognizer, TextPosition,
};

/// Options for [`InlineSpan::to_plain_text_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlainTextOptions {
    /// Emit a span's semantics label instead of its text when it has one.
    pub include_semantics_labels: bool,
    /// Emit [`PLACEHOLDER_CHAR`] for each placeholder.
    pub include_placeholders: bool,
}

impl Default for PlainTextOptions {
    fn default() -> Self {
        Self {
            include_semantics_labels: true,
            include_placeholders: true,
        }
    }
}

/// A node in an inline span tree.
///
/// Trees are immutable once constructed; rebuilding the UI constructs a new tree, which is then
/// compared against the previous one with [`compare_to`](Self::compare_to).
#[derive(Clone, Debug, PartialEq, Hash)]
pub enum InlineSpan {
    /// Styled text with optional children.
    Text(TextSpan),
    /// A placeholder for an inline widget.
    Widget(WidgetSpan),
}

impl InlineSpan {
    /// The style of this span, if it has one.
    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            Self::Text(span) => span.style(),
            Self::Widget(span) => span.style(),
        }
    }

    /// The hover recognizer of this span, if it has one.
    pub fn hover_recognizer(&self) -> Option<&Recognizer> {
        match self {
            Self::Text(span) => span.hover_recognizer(),
            Self::Widget(span) => span.hover_recognizer(),
        }
    }

    /// Returns the text span, if this is one.
    pub fn as_text(&self) -> Option<&TextSpan> {
        match self {
            Self::Text(span) => Some(span),
            Self::Widget(_) => None,
        }
    }

    /// Returns the widget span, if this is one.
    pub fn as_widget(&self) -> Option<&WidgetSpan> {
        match self {
            Self::Text(_) => None,
            Self::Widget(span) => Some(span),
        }
    }

    /// Walks the tree depth first, calling `visitor` for every span that contributes content.
    ///
    /// Text spans are visited only when they have text, but their children are always walked.
    /// Returns `false` as soon as `visitor` returns `false`, and `true` if the walk completed.
    pub fn visit_children<'a>(&'a self, visitor: &mut impl FnMut(&'a Self) -> bool) -> bool {
        match self {
            Self::Text(span) => {
                if span.text().is_some() && !visitor(self) {
                    return false;
                }
                for child in span.children().unwrap_or_default() {
                    if !child.visit_children(visitor) {
                        return false;
                    }
                }
                true
            }
            Self::Widget(_) => visitor(self),
        }
    }

    /// Whether any span in the tree has a hover recognizer.
    pub fn has_hover_recognizer(&self) -> bool {
        let mut found = false;
        self.visit_children(&mut |span| {
            found = span.hover_recognizer().is_some();
            !found
        });
        found
    }

    /// The widget spans of the tree, in the order their placeholders are built.
    pub fn widget_spans(&self) -> Vec<&WidgetSpan> {
        let mut spans = Vec::new();
        self.visit_children(&mut |span| {
            if let Self::Widget(widget) = span {
                spans.push(widget);
            }
            true
        });
        spans
    }

    /// Emits this span into `builder`.
    ///
    /// Styles are pushed and popped around the span's content, text is appended, and each widget
    /// span consumes the entry of `dimensions` at the builder's current placeholder count. Fails
    /// with [`ErrorKind::PlaceholderDimensionsExhausted`](crate::ErrorKind::PlaceholderDimensionsExhausted)
    /// if the tree holds more widget spans than `dimensions` has entries.
    pub fn build(
        &self,
        builder: &mut ParagraphBuilder,
        dimensions: &[PlaceholderDimensions],
        text_scale_factor: f32,
    ) -> Result<(), Error> {
        match self {
            Self::Text(span) => span.build(builder, dimensions, text_scale_factor),
            Self::Widget(span) => span.build(builder, dimensions, text_scale_factor),
        }
    }

    /// Returns the span that owns `position` in the plain text of the tree.
    pub fn span_for_position(&self, position: TextPosition) -> Option<&Self> {
        let mut offset = Accumulator::default();
        let mut result = None;
        self.visit_children(&mut |span| {
            result = span.span_for_position_visitor(position, &mut offset);
            result.is_none()
        });
        result
    }

    /// Checks this span alone against `position`, with `offset` holding the start of the span.
    ///
    /// Returns the span if it owns the position; otherwise advances `offset` by the span's length
    /// and returns `None`.
    pub fn span_for_position_visitor(
        &self,
        position: TextPosition,
        offset: &mut Accumulator,
    ) -> Option<&Self> {
        let claimed = match self {
            Self::Text(span) => span.claim_position(position, offset),
            Self::Widget(span) => span.claim_position(position, offset),
        };
        claimed.then_some(self)
    }

    /// Returns the UTF-8 code unit at byte `index` of the tree's text.
    ///
    /// Semantics labels are ignored and placeholders never yield a code unit.
    pub fn code_unit_at(&self, index: usize) -> Option<u8> {
        let mut offset = Accumulator::default();
        let mut result = None;
        self.visit_children(&mut |span| {
            result = span.code_unit_at_visitor(index, &mut offset);
            result.is_none()
        });
        result
    }

    /// Checks this span alone for byte `index`, with `offset` holding the start of the span.
    pub fn code_unit_at_visitor(&self, index: usize, offset: &mut Accumulator) -> Option<u8> {
        match self {
            Self::Text(span) => span.code_unit_at_visitor(index, offset),
            Self::Widget(_) => WidgetSpan::code_unit_at_visitor(offset),
        }
    }

    /// Flattens the tree to a string, including semantics labels and placeholders.
    pub fn to_plain_text(&self) -> String {
        self.to_plain_text_with(PlainTextOptions::default())
    }

    /// Flattens the tree to a string.
    pub fn to_plain_text_with(&self, options: PlainTextOptions) -> String {
        let mut buffer = String::new();
        self.compute_to_plain_text(&mut buffer, options);
        buffer
    }

    /// Appends the plain text of the tree to `buffer`.
    pub fn compute_to_plain_text(&self, buffer: &mut String, options: PlainTextOptions) {
        match self {
            Self::Text(span) => span.compute_to_plain_text(buffer, options),
            Self::Widget(_) => {
                PlaceholderSpan::compute_to_plain_text(buffer, options.include_placeholders);
            }
        }
    }

    /// Collects the semantics information of the tree.
    pub fn semantics_information(&self) -> Vec<InlineSpanSemanticsInformation> {
        let mut collector = Vec::new();
        self.compute_semantics_information(&mut collector);
        collector
    }

    /// Appends the semantics information of the tree to `collector`, depth first.
    ///
    /// Each text span with text or a semantics label contributes one record; each placeholder
    /// contributes [`InlineSpanSemanticsInformation::PLACEHOLDER`].
    pub fn compute_semantics_information(
        &self,
        collector: &mut Vec<InlineSpanSemanticsInformation>,
    ) {
        match self {
            Self::Text(span) => span.compute_semantics_information(collector),
            Self::Widget(_) => PlaceholderSpan::compute_semantics_information(collector),
        }
    }

    /// Classifies how much `other`, the rebuilt counterpart of this span, differs from it.
    ///
    /// Changes to text, structure, or style presence require [`RenderComparison::Layout`], as
    /// does a change of span kind. Tap recognizer and semantics label changes are
    /// [`RenderComparison::Metadata`], hover recognizer changes are
    /// [`RenderComparison::Function`], and style changes are classified by
    /// [`TextStyle::compare_to`]. Children are compared pairwise and the walk stops early once
    /// a layout change is found.
    pub fn compare_to(&self, other: &Self) -> RenderComparison {
        match (self, other) {
            (Self::Text(span), Self::Text(other)) => span.compare_to(other),
            (Self::Widget(span), Self::Widget(other)) => span.compare_to(other),
            _ => RenderComparison::Layout,
        }
    }
}

impl From<TextSpan> for InlineSpan {
    fn from(span: TextSpan) -> Self {
        Self::Text(span)
    }
}

impl From<WidgetSpan> for InlineSpan {
    fn from(span: WidgetSpan) -> Self {
        Self::Widget(span)
    }
}

impl From<&str> for InlineSpan {
    fn from(text: &str) -> Self {
        Self::Text(TextSpan::new(text))
    }
}
