// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures.

use text_style::{FontWeight, ParagraphStyle, TextStyle};

use crate::{
    InlineSpan, Paragraph, ParagraphBuilder, PlaceholderDimensions, TextSpan, WidgetId, WidgetSpan,
};

pub(crate) fn bold() -> TextStyle {
    TextStyle::new().font_weight(FontWeight::BOLD)
}

/// `"Hello "` with a bold `"World"` child.
pub(crate) fn hello_world() -> InlineSpan {
    TextSpan::new("Hello ")
        .with_child(TextSpan::new("World").with_style(bold()))
        .into()
}

/// A bottom aligned widget span.
pub(crate) fn widget(id: u64) -> WidgetSpan {
    WidgetSpan::bottom(WidgetId(id))
}

/// Builds `span` at scale 1 with the default paragraph style.
pub(crate) fn build(span: &InlineSpan, dimensions: &[PlaceholderDimensions]) -> Paragraph {
    let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
    span.build(&mut builder, dimensions, 1.0)
        .expect("span tree should build");
    builder.build()
}
