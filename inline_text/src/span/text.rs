// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Range;

use text_style::{RenderComparison, TextStyle};

use super::clusters::{needs_isolation, split_by_emoji};
use super::{InlineSpan, PlainTextOptions};
use crate::{
    Accumulator, Error, InlineSpanSemanticsInformation, ParagraphBuilder, PlaceholderDimensions,
    Recognizer, TextPosition,
};

/// A span of styled text with optional nested children.
///
/// The text of a span is laid out before its children. A span without text (as opposed to a span
/// with empty text) only contributes its style to its children. A span without children is
/// distinct from a span with an empty child list; the former is a leaf.
///
/// Equality and hashing consider the style, text, children and tap recognizer. Hover recognizers
/// and semantics labels are not part of equality but are still reported by
/// [`InlineSpan::compare_to`].
#[derive(Clone, Default)]
pub struct TextSpan {
    text: Option<String>,
    children: Option<Vec<InlineSpan>>,
    style: Option<TextStyle>,
    recognizer: Option<Recognizer>,
    hover_recognizer: Option<Recognizer>,
    semantics_label: Option<String>,
    /// Byte ranges of `text` that are emitted atomically.
    chunks: Vec<Range<usize>>,
}

impl TextSpan {
    /// Creates a leaf span with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chunks = split_by_emoji(&text);
        Self {
            text: Some(text),
            chunks,
            ..Default::default()
        }
    }

    /// Sets the style applied to this span's text and inherited by its children.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Appends a child span.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<InlineSpan>) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .push(child.into());
        self
    }

    /// Sets the child list, replacing any children added before.
    ///
    /// An empty iterator produces an empty (but present) child list.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<InlineSpan>,
    {
        self.children = Some(children.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the tap recognizer.
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Recognizer) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Sets the hover recognizer.
    #[must_use]
    pub fn with_hover_recognizer(mut self, recognizer: Recognizer) -> Self {
        self.hover_recognizer = Some(recognizer);
        self
    }

    /// Sets a label that replaces the text for accessibility.
    #[must_use]
    pub fn with_semantics_label(mut self, label: impl Into<String>) -> Self {
        self.semantics_label = Some(label.into());
        self
    }

    /// The text of this span, not including children.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The children of this span, or `None` for a leaf.
    pub fn children(&self) -> Option<&[InlineSpan]> {
        self.children.as_deref()
    }

    /// The style of this span.
    pub fn style(&self) -> Option<&TextStyle> {
        self.style.as_ref()
    }

    /// The tap recognizer.
    pub fn recognizer(&self) -> Option<&Recognizer> {
        self.recognizer.as_ref()
    }

    /// The hover recognizer.
    pub fn hover_recognizer(&self) -> Option<&Recognizer> {
        self.hover_recognizer.as_ref()
    }

    /// The accessibility label.
    pub fn semantics_label(&self) -> Option<&str> {
        self.semantics_label.as_deref()
    }

    /// The text split into the chunks emitted by [`build`](InlineSpan::build).
    ///
    /// Each emoji grapheme cluster is a chunk of its own; the text between emoji forms one chunk.
    pub fn chunks(&self) -> impl Iterator<Item = &str> + '_ {
        let text = self.text.as_deref().unwrap_or_default();
        self.chunks.iter().map(move |range| &text[range.clone()])
    }

    fn child_spans(&self) -> &[InlineSpan] {
        self.children.as_deref().unwrap_or_default()
    }

    pub(crate) fn build(
        &self,
        builder: &mut ParagraphBuilder,
        dimensions: &[PlaceholderDimensions],
        text_scale_factor: f32,
    ) -> Result<(), Error> {
        if let Some(style) = &self.style {
            builder.push_style(style, text_scale_factor);
        }

        if let Some(text) = &self.text {
            match self.chunks.as_slice() {
                [] => {}
                [only] if !needs_isolation(&text[only.clone()]) => builder.add_text(text),
                chunks => {
                    let inherit = TextStyle::default();
                    let style = self.style.as_ref().unwrap_or(&inherit);
                    for chunk in chunks {
                        builder.push_style(style, text_scale_factor);
                        builder.add_text(&text[chunk.clone()]);
                        builder.pop();
                    }
                }
            }
        }

        for child in self.child_spans() {
            child.build(builder, dimensions, text_scale_factor)?;
        }

        if self.style.is_some() {
            builder.pop();
        }
        Ok(())
    }

    /// Claims `position` if it falls within this span's text, otherwise advances `offset` past it.
    pub(crate) fn claim_position(&self, position: TextPosition, offset: &mut Accumulator) -> bool {
        let Some(text) = &self.text else {
            return false;
        };
        let start = offset.value();
        if position.is_within(start, start + text.len()) {
            return true;
        }
        offset.increment(text.len());
        false
    }

    pub(crate) fn code_unit_at_visitor(
        &self,
        index: usize,
        offset: &mut Accumulator,
    ) -> Option<u8> {
        let text = self.text.as_ref()?;
        let start = offset.value();
        if let Some(&unit) = index
            .checked_sub(start)
            .and_then(|local| text.as_bytes().get(local))
        {
            return Some(unit);
        }
        offset.increment(text.len());
        None
    }

    pub(crate) fn compute_to_plain_text(&self, buffer: &mut String, options: PlainTextOptions) {
        match (&self.semantics_label, &self.text) {
            (Some(label), _) if options.include_semantics_labels => buffer.push_str(label),
            (_, Some(text)) => buffer.push_str(text),
            _ => {}
        }
        for child in self.child_spans() {
            child.compute_to_plain_text(buffer, options);
        }
    }

    pub(crate) fn compute_semantics_information(
        &self,
        collector: &mut Vec<InlineSpanSemanticsInformation>,
    ) {
        if self.text.is_some() || self.semantics_label.is_some() {
            collector.push(InlineSpanSemanticsInformation::text(
                self.text.clone().unwrap_or_default(),
                self.semantics_label.clone(),
                self.recognizer.clone(),
            ));
        }
        for child in self.child_spans() {
            child.compute_semantics_information(collector);
        }
    }

    pub(crate) fn compare_to(&self, other: &Self) -> RenderComparison {
        if core::ptr::eq(self, other) {
            return RenderComparison::Identical;
        }
        if self.text != other.text
            || self.children.is_some() != other.children.is_some()
            || self.child_spans().len() != other.child_spans().len()
            || self.style.is_some() != other.style.is_some()
        {
            return RenderComparison::Layout;
        }

        let metadata_changed = self.recognizer != other.recognizer
            || self.semantics_label != other.semantics_label;
        let mut result = if metadata_changed {
            RenderComparison::Metadata
        } else {
            RenderComparison::Identical
        };
        if self.hover_recognizer != other.hover_recognizer {
            result = result.combine(RenderComparison::Function);
        }

        if let (Some(style), Some(other_style)) = (&self.style, &other.style) {
            result = result.combine(style.compare_to(other_style));
            if result == RenderComparison::Layout {
                return result;
            }
        }

        for (child, other_child) in self.child_spans().iter().zip(other.child_spans()) {
            result = result.combine(child.compare_to(other_child));
            if result == RenderComparison::Layout {
                return result;
            }
        }
        result
    }
}

impl PartialEq for TextSpan {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style
            && self.text == other.text
            && self.children == other.children
            && self.recognizer == other.recognizer
    }
}

impl Hash for TextSpan {
    // The style holds floats and is left out; equal spans still hash equally.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.is_some().hash(state);
        self.text.hash(state);
        self.children.hash(state);
        self.recognizer.hash(state);
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_none() && self.text.is_none() && self.children.is_none() {
            return f.write_str("TextSpan(empty)");
        }
        let mut s = f.debug_struct("TextSpan");
        if let Some(text) = &self.text {
            s.field("text", text);
        }
        if let Some(style) = &self.style {
            s.field("style", style);
        }
        if let Some(recognizer) = &self.recognizer {
            s.field("recognizer", recognizer);
        }
        if let Some(recognizer) = &self.hover_recognizer {
            s.field("hover_recognizer", recognizer);
        }
        if let Some(label) = &self.semantics_label {
            s.field("semantics_label", label);
        }
        if let Some(children) = &self.children {
            s.field("children", children);
        }
        s.finish_non_exhaustive()
    }
}

impl From<&str> for TextSpan {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextSpan {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InlineSpan;
    use alloc::vec;
    use core::hash::BuildHasher;
    use hashbrown::DefaultHashBuilder;
    use text_style::FontWeight;

    #[test]
    fn equality_ignores_derived_and_non_identity_fields() {
        let a = TextSpan::new("a😀").with_semantics_label("grin");
        let hover = Recognizer::new(());
        let b = TextSpan::new("a😀").with_hover_recognizer(hover);
        assert_eq!(a, b);
    }

    #[test]
    fn equal_spans_hash_equally() {
        let a = TextSpan::new("a😀").with_semantics_label("grin");
        let hover = Recognizer::new(());
        let b = TextSpan::new("a😀").with_hover_recognizer(hover);
        let hasher = DefaultHashBuilder::default();
        assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));

        let a = InlineSpan::from(a.with_style(TextStyle::new().font_size(12.0)));
        let b = InlineSpan::from(b.with_style(TextStyle::new().font_size(12.0)));
        assert_eq!(a, b);
        assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));
    }

    #[test]
    fn equality_distinguishes_absent_and_empty_children() {
        let leaf = TextSpan::new("a");
        let empty_branch = TextSpan::new("a").with_children(Vec::<InlineSpan>::new());
        assert_ne!(leaf, empty_branch);
        assert_eq!(empty_branch.children(), Some(&[][..]));
        assert_eq!(leaf.children(), None);
    }

    #[test]
    fn chunks_cover_the_text() {
        let span = TextSpan::new("hi 👋 there");
        let chunks: Vec<_> = span.chunks().collect();
        assert_eq!(chunks, vec!["hi ", "👋", " there"]);
        assert_eq!(TextSpan::default().chunks().count(), 0);
    }

    #[test]
    fn debug_marks_empty_spans() {
        let empty = alloc::format!("{:?}", TextSpan::default());
        assert_eq!(empty, "TextSpan(empty)");
        let bold = TextStyle::new().font_weight(FontWeight::BOLD);
        let styled = TextSpan::default().with_style(bold);
        assert!(alloc::format!("{styled:?}").starts_with("TextSpan {"));
    }
}
