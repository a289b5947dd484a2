// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::{ResolvedStyle, TextStyle};

/// Horizontal alignment of lines within a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Align to the start edge, as determined by the text direction.
    #[default]
    Start,
    /// Align to the end edge, as determined by the text direction.
    End,
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center lines.
    Center,
    /// Stretch lines to fill the available width.
    Justify,
}

/// Base direction of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// Paragraph level settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub text_align: TextAlign,
    /// Base text direction.
    pub text_direction: TextDirection,
    /// Maximum number of lines, or `None` for no limit.
    pub max_lines: Option<usize>,
    /// String appended to the last line when text is truncated by `max_lines`.
    pub ellipsis: Option<Arc<str>>,
    /// The default text style of the paragraph.
    pub text_style: TextStyle,
}

impl ParagraphStyle {
    /// Creates a paragraph style whose default text style is `text_style`.
    pub fn new(text_style: TextStyle) -> Self {
        Self {
            text_style,
            ..Default::default()
        }
    }

    /// Sets the line alignment.
    #[must_use]
    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    /// Sets the base direction.
    #[must_use]
    pub fn text_direction(mut self, text_direction: TextDirection) -> Self {
        self.text_direction = text_direction;
        self
    }

    /// Sets the maximum number of lines.
    #[must_use]
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Sets the ellipsis string.
    #[must_use]
    pub fn ellipsis(mut self, ellipsis: impl Into<Arc<str>>) -> Self {
        self.ellipsis = Some(ellipsis.into());
        self
    }

    /// Resolves the paragraph's default text style against the built-in defaults.
    ///
    /// The font size is multiplied by `text_scale_factor` whether it comes from the text style
    /// or from the defaults.
    pub fn resolved_text_style(&self, text_scale_factor: f32) -> ResolvedStyle {
        let defaults = ResolvedStyle::default();
        let root = ResolvedStyle {
            font_size: defaults.font_size * text_scale_factor,
            ..defaults
        };
        ResolvedStyle::apply_style(&root, &self.text_style, text_scale_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_text_style_scales_default_and_explicit_sizes() {
        let implicit = ParagraphStyle::default().resolved_text_style(2.0);
        assert_eq!(implicit.font_size, 28.0);

        let style = ParagraphStyle::new(TextStyle::new().font_size(10.0));
        assert_eq!(style.resolved_text_style(3.0).font_size, 30.0);
    }

    #[test]
    fn builder_methods_set_fields() {
        let style = ParagraphStyle::default()
            .text_align(TextAlign::Center)
            .text_direction(TextDirection::Rtl)
            .max_lines(2)
            .ellipsis("…");
        assert_eq!(style.text_align, TextAlign::Center);
        assert_eq!(style.text_direction, TextDirection::Rtl);
        assert_eq!(style.max_lines, Some(2));
        assert_eq!(style.ellipsis.as_deref(), Some("…"));
    }
}
