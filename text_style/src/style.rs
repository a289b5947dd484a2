// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::Color;
use peniko::color::palette;

use crate::{FontFeature, FontStyle, FontWeight, RenderComparison};

/// The baseline used to align text and placeholders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The baseline used for alphabetic scripts such as Latin, Greek and Cyrillic.
    #[default]
    Alphabetic,
    /// The baseline used for ideographic scripts such as Chinese, Japanese and Korean.
    Ideographic,
}

/// A set of lines drawn through or alongside text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextDecoration {
    /// Draw a line underneath the glyphs.
    pub underline: bool,
    /// Draw a line above the glyphs.
    pub overline: bool,
    /// Draw a line through the glyphs.
    pub line_through: bool,
}

impl TextDecoration {
    /// No decoration.
    pub const NONE: Self = Self {
        underline: false,
        overline: false,
        line_through: false,
    };

    /// Underline only.
    pub const UNDERLINE: Self = Self {
        underline: true,
        overline: false,
        line_through: false,
    };

    /// Overline only.
    pub const OVERLINE: Self = Self {
        underline: false,
        overline: true,
        line_through: false,
    };

    /// Line through only.
    pub const LINE_THROUGH: Self = Self {
        underline: false,
        overline: false,
        line_through: true,
    };

    /// Returns the union of both decorations.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            underline: self.underline || other.underline,
            overline: self.overline || other.overline,
            line_through: self.line_through || other.line_through,
        }
    }

    /// Whether no line is drawn.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// The stroke used to draw a [`TextDecoration`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecorationStyle {
    /// A single solid line.
    #[default]
    Solid,
    /// Two parallel lines.
    Double,
    /// A dotted line.
    Dotted,
    /// A dashed line.
    Dashed,
    /// A sinusoidal line.
    Wavy,
}

/// A specified text style.
///
/// Every property is optional; `None` means the value is inherited from the enclosing style when
/// the style is resolved with [`ResolvedStyle::apply_style`].
///
/// Equality is structural, which is what allows span trees to be compared after they have been
/// rebuilt from scratch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    /// Font family name.
    pub font_family: Option<Arc<str>>,
    /// Font size in logical pixels, before the text scale factor is applied.
    pub font_size: Option<f32>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Extra spacing between letters.
    pub letter_spacing: Option<f32>,
    /// Extra spacing between words.
    pub word_spacing: Option<f32>,
    /// Line height as a multiple of the font size.
    pub line_height: Option<f32>,
    /// BCP 47 locale used for shaping.
    pub locale: Option<Arc<str>>,
    /// Baseline used to align the text.
    pub text_baseline: Option<TextBaseline>,
    /// Color of the glyphs.
    pub color: Option<Color>,
    /// Color painted behind the glyphs.
    pub background_color: Option<Color>,
    /// Decoration lines.
    pub decoration: Option<TextDecoration>,
    /// Color of the decoration lines.
    pub decoration_color: Option<Color>,
    /// Stroke of the decoration lines.
    pub decoration_style: Option<DecorationStyle>,
    /// Thickness of the decoration lines as a multiple of the font's default thickness.
    pub decoration_thickness: Option<f32>,
    /// OpenType feature settings.
    pub font_features: Option<Arc<[FontFeature]>>,
    /// A label used only for debugging output.
    pub debug_label: Option<Arc<str>>,
}

impl TextStyle {
    /// Creates a style that inherits every property.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family.
    #[must_use]
    pub fn font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the letter spacing.
    #[must_use]
    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Sets the word spacing.
    #[must_use]
    pub fn word_spacing(mut self, spacing: f32) -> Self {
        self.word_spacing = Some(spacing);
        self
    }

    /// Sets the line height multiplier.
    #[must_use]
    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<Arc<str>>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the text baseline.
    #[must_use]
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.text_baseline = Some(baseline);
        self
    }

    /// Sets the glyph color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the decoration lines.
    #[must_use]
    pub fn decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Sets the decoration color.
    #[must_use]
    pub fn decoration_color(mut self, color: Color) -> Self {
        self.decoration_color = Some(color);
        self
    }

    /// Sets the decoration stroke.
    #[must_use]
    pub fn decoration_style(mut self, style: DecorationStyle) -> Self {
        self.decoration_style = Some(style);
        self
    }

    /// Sets the decoration thickness.
    #[must_use]
    pub fn decoration_thickness(mut self, thickness: f32) -> Self {
        self.decoration_thickness = Some(thickness);
        self
    }

    /// Sets the OpenType feature settings.
    #[must_use]
    pub fn font_features(mut self, features: impl Into<Arc<[FontFeature]>>) -> Self {
        self.font_features = Some(features.into());
        self
    }

    /// Sets the debug label.
    #[must_use]
    pub fn debug_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.debug_label = Some(label.into());
        self
    }

    /// Returns a style where properties set in `other` override those set in `self`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
            letter_spacing: other.letter_spacing.or(self.letter_spacing),
            word_spacing: other.word_spacing.or(self.word_spacing),
            line_height: other.line_height.or(self.line_height),
            locale: other.locale.clone().or_else(|| self.locale.clone()),
            text_baseline: other.text_baseline.or(self.text_baseline),
            color: other.color.or(self.color),
            background_color: other.background_color.or(self.background_color),
            decoration: other.decoration.or(self.decoration),
            decoration_color: other.decoration_color.or(self.decoration_color),
            decoration_style: other.decoration_style.or(self.decoration_style),
            decoration_thickness: other.decoration_thickness.or(self.decoration_thickness),
            font_features: other
                .font_features
                .clone()
                .or_else(|| self.font_features.clone()),
            debug_label: other
                .debug_label
                .clone()
                .or_else(|| self.debug_label.clone()),
        }
    }

    /// Classifies the difference between two styles.
    ///
    /// Properties that move glyphs (family, size, weight, spacing, features, ...) yield
    /// [`RenderComparison::Layout`]. Colors and decorations yield [`RenderComparison::Paint`].
    /// Any other difference (the debug label) yields [`RenderComparison::Metadata`].
    pub fn compare_to(&self, other: &Self) -> RenderComparison {
        if self == other {
            return RenderComparison::Identical;
        }
        if self.font_family != other.font_family
            || self.font_size != other.font_size
            || self.font_weight != other.font_weight
            || self.font_style != other.font_style
            || self.letter_spacing != other.letter_spacing
            || self.word_spacing != other.word_spacing
            || self.line_height != other.line_height
            || self.locale != other.locale
            || self.text_baseline != other.text_baseline
            || self.font_features != other.font_features
        {
            return RenderComparison::Layout;
        }
        if self.color != other.color
            || self.background_color != other.background_color
            || self.decoration != other.decoration
            || self.decoration_color != other.decoration_color
            || self.decoration_style != other.decoration_style
            || self.decoration_thickness != other.decoration_thickness
        {
            return RenderComparison::Paint;
        }
        RenderComparison::Metadata
    }
}

/// A fully resolved text style, as stored in a paragraph's style table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Font family name.
    pub font_family: Arc<str>,
    /// Font size in logical pixels, with the text scale factor applied.
    pub font_size: f32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Extra spacing between letters.
    pub letter_spacing: f32,
    /// Extra spacing between words.
    pub word_spacing: f32,
    /// Line height multiplier, or `None` to use the font's metrics.
    pub line_height: Option<f32>,
    /// BCP 47 locale used for shaping.
    pub locale: Option<Arc<str>>,
    /// Baseline used to align the text.
    pub text_baseline: TextBaseline,
    /// Color of the glyphs.
    pub color: Color,
    /// Color painted behind the glyphs.
    pub background_color: Option<Color>,
    /// Decoration lines.
    pub decoration: TextDecoration,
    /// Color of the decoration lines, or `None` to use [`color`](Self::color).
    pub decoration_color: Option<Color>,
    /// Stroke of the decoration lines.
    pub decoration_style: DecorationStyle,
    /// Thickness multiplier of the decoration lines.
    pub decoration_thickness: f32,
    /// OpenType feature settings.
    pub font_features: Arc<[FontFeature]>,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            font_family: Arc::from("sans-serif"),
            font_size: 14.0,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            line_height: None,
            locale: None,
            text_baseline: TextBaseline::Alphabetic,
            color: palette::css::BLACK,
            background_color: None,
            decoration: TextDecoration::NONE,
            decoration_color: None,
            decoration_style: DecorationStyle::Solid,
            decoration_thickness: 1.0,
            font_features: Arc::from([]),
        }
    }
}

impl ResolvedStyle {
    /// Resolves `style` against `parent`.
    ///
    /// Properties set on `style` win; the rest are inherited from `parent`. A font size taken
    /// from `style` is multiplied by `text_scale_factor`; an inherited size has already been
    /// scaled by the parent.
    pub fn apply_style(parent: &Self, style: &TextStyle, text_scale_factor: f32) -> Self {
        Self {
            font_family: style
                .font_family
                .clone()
                .unwrap_or_else(|| parent.font_family.clone()),
            font_size: style
                .font_size
                .map_or(parent.font_size, |size| size * text_scale_factor),
            font_weight: style.font_weight.unwrap_or(parent.font_weight),
            font_style: style.font_style.unwrap_or(parent.font_style),
            letter_spacing: style.letter_spacing.unwrap_or(parent.letter_spacing),
            word_spacing: style.word_spacing.unwrap_or(parent.word_spacing),
            line_height: style.line_height.or(parent.line_height),
            locale: style.locale.clone().or_else(|| parent.locale.clone()),
            text_baseline: style.text_baseline.unwrap_or(parent.text_baseline),
            color: style.color.unwrap_or(parent.color),
            background_color: style.background_color.or(parent.background_color),
            decoration: style.decoration.unwrap_or(parent.decoration),
            decoration_color: style.decoration_color.or(parent.decoration_color),
            decoration_style: style.decoration_style.unwrap_or(parent.decoration_style),
            decoration_thickness: style
                .decoration_thickness
                .unwrap_or(parent.decoration_thickness),
            font_features: style
                .font_features
                .clone()
                .unwrap_or_else(|| parent.font_features.clone()),
        }
    }

    /// The color used for decoration lines.
    pub fn effective_decoration_color(&self) -> Color {
        self.decoration_color.unwrap_or(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_style_inherits_unset_properties() {
        let parent = ResolvedStyle::apply_style(
            &ResolvedStyle::default(),
            &TextStyle::new().font_family("serif").letter_spacing(2.0),
            1.0,
        );
        let child = ResolvedStyle::apply_style(
            &parent,
            &TextStyle::new().font_weight(FontWeight::BOLD),
            1.0,
        );
        assert_eq!(&*child.font_family, "serif");
        assert_eq!(child.letter_spacing, 2.0);
        assert_eq!(child.font_weight, FontWeight::BOLD);
    }

    #[test]
    fn apply_style_scales_only_specified_font_size() {
        let base = ResolvedStyle::default();
        let scaled = ResolvedStyle::apply_style(&base, &TextStyle::new().font_size(10.0), 2.0);
        assert_eq!(scaled.font_size, 20.0);

        let inherited = ResolvedStyle::apply_style(&scaled, &TextStyle::new(), 2.0);
        assert_eq!(
            inherited.font_size, 20.0,
            "an inherited size must not be scaled a second time"
        );
    }

    #[test]
    fn merge_prefers_other() {
        let a = TextStyle::new().font_size(10.0).color(palette::css::RED);
        let b = TextStyle::new().font_size(12.0);
        let merged = a.merge(&b);
        assert_eq!(merged.font_size, Some(12.0));
        assert_eq!(merged.color, Some(palette::css::RED));
    }

    #[test]
    fn compare_to_classifies_changes() {
        let base = TextStyle::new().font_size(10.0).color(palette::css::RED);
        assert_eq!(base.compare_to(&base.clone()), RenderComparison::Identical);
        assert_eq!(
            base.compare_to(&base.clone().font_size(11.0)),
            RenderComparison::Layout
        );
        assert_eq!(
            base.compare_to(&base.clone().color(palette::css::BLUE)),
            RenderComparison::Paint
        );
        assert_eq!(
            base.compare_to(&base.clone().decoration(TextDecoration::UNDERLINE)),
            RenderComparison::Paint
        );
        assert_eq!(
            base.compare_to(&base.clone().debug_label("title")),
            RenderComparison::Metadata
        );
    }

    #[test]
    fn decoration_combine_is_union() {
        let both = TextDecoration::UNDERLINE.combine(TextDecoration::LINE_THROUGH);
        assert!(both.underline && both.line_through && !both.overline);
        assert!(TextDecoration::NONE.is_none());
    }
}
