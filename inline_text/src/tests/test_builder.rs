// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening span trees through the paragraph builder.

use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette;
use text_style::{FontWeight, ParagraphStyle, TextStyle};

use super::utils::{bold, build, hello_world, widget};
use crate::{
    ErrorKind, InlineSpan, ParagraphBuilder, PlaceholderAlignment, PlaceholderDimensions, StyleRun,
    TextBaseline, TextSpan, WidgetId, WidgetSpan,
};

#[test]
fn nested_style_splits_runs() {
    let paragraph = build(&hello_world(), &[]);

    assert_eq!(paragraph.text(), "Hello World");
    let ranges: Vec<_> = paragraph
        .style_runs()
        .iter()
        .map(|run| run.range.clone())
        .collect();
    assert_eq!(ranges, vec![0..6, 6..11], "one run per style");

    let weights: Vec<_> = paragraph
        .runs()
        .map(|(text, style)| (text, style.font_weight))
        .collect();
    assert_eq!(
        weights,
        vec![("Hello ", FontWeight::NORMAL), ("World", FontWeight::BOLD)]
    );
    assert_eq!(
        paragraph.style_at(6).map(|style| style.font_weight),
        Some(FontWeight::BOLD)
    );
    assert!(paragraph.style_at(11).is_none(), "past the end");
}

#[test]
fn children_inherit_their_parent_style() {
    let larger = TextStyle::new().font_size(20.0);
    let span: InlineSpan = TextSpan::new("a")
        .with_style(TextStyle::new().color(palette::css::RED))
        .with_child(TextSpan::new("b").with_style(larger))
        .into();
    let paragraph = build(&span, &[]);

    let child = paragraph.style_at(1).expect("child run");
    assert_eq!(child.color, palette::css::RED, "color is inherited");
    assert_eq!(child.font_size, 20.0);
    let parent = paragraph.style_at(0).expect("parent run");
    assert_eq!(parent.font_size, 14.0, "default size is untouched");
}

#[test]
fn text_scale_factor_scales_specified_font_sizes() {
    let span: InlineSpan = TextSpan::new("a")
        .with_style(TextStyle::new().font_size(10.0))
        .into();
    let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
    span.build(&mut builder, &[], 2.0).unwrap();
    let paragraph = builder.build();

    let base = &paragraph.styles()[0];
    assert_eq!(base.font_size, 14.0, "base style uses scale 1");
    assert_eq!(paragraph.style_at(0).unwrap().font_size, 20.0);
}

#[test]
fn emoji_chunks_get_their_own_runs() {
    let span: InlineSpan = TextSpan::new("hi 👋").with_style(bold()).into();
    let paragraph = build(&span, &[]);

    let ranges: Vec<_> = paragraph
        .style_runs()
        .iter()
        .map(|run| run.range.clone())
        .collect();
    assert_eq!(ranges, vec![0..3, 3..7]);
    let all_bold = paragraph
        .runs()
        .all(|(_, style)| style.font_weight == FontWeight::BOLD);
    assert!(all_bold, "every chunk keeps the span style");
}

#[test]
fn widget_spans_consume_dimensions_in_declaration_order() {
    let span: InlineSpan = TextSpan::default()
        .with_child(TextSpan::new("a").with_child(widget(1)))
        .with_child(TextSpan::new("b").with_child(widget(2)))
        .into();
    let dimensions = [
        PlaceholderDimensions::new(10.0, 10.0),
        PlaceholderDimensions::new(20.0, 30.0),
    ];
    let paragraph = build(&span, &dimensions);

    assert_eq!(paragraph.text(), "a\u{FFFC}b\u{FFFC}");
    assert_eq!(paragraph.placeholder_count(), 2);
    let [first, second] = paragraph.placeholders() else {
        panic!("expected two placeholders");
    };
    assert_eq!(first.index, 1);
    assert_eq!(first.width, 10.0);
    assert_eq!(second.index, 5);
    assert_eq!(second.width, 20.0);
    assert_eq!(second.baseline_offset, 30.0, "defaults to the height");
    assert_eq!(paragraph.placeholder_scales(), &[1.0, 1.0]);
}

#[test]
fn missing_dimensions_are_an_error() {
    let span: InlineSpan = TextSpan::new("a")
        .with_child(widget(1))
        .with_child(widget(2))
        .into();
    let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
    let err = span
        .build(&mut builder, &[PlaceholderDimensions::new(1.0, 1.0)], 1.0)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PlaceholderDimensionsExhausted);
    assert_eq!(err.placeholder_index(), Some(1));
    assert_eq!(err.dimensions_len(), Some(1));
}

#[test]
fn measured_baseline_takes_precedence_over_the_span_baseline() {
    let baseline_widget = WidgetSpan::new(
        WidgetId(1),
        PlaceholderAlignment::Baseline,
        Some(TextBaseline::Ideographic),
    )
    .unwrap();
    let span: InlineSpan = baseline_widget.into();
    let dimensions = PlaceholderDimensions::new(4.0, 8.0)
        .with_baseline_offset(6.0);
    let paragraph = build(&span, &[dimensions]);

    let placeholder = paragraph.placeholders()[0];
    assert_eq!(placeholder.alignment, PlaceholderAlignment::Baseline);
    assert_eq!(placeholder.baseline, Some(TextBaseline::Ideographic));
    assert_eq!(placeholder.baseline_offset, 6.0);

    let measured = dimensions.with_baseline(TextBaseline::Alphabetic);
    let paragraph = build(&span, &[measured]);
    let placeholder = paragraph.placeholders()[0];
    assert_eq!(placeholder.baseline, Some(TextBaseline::Alphabetic));
    assert_eq!(placeholder.alignment, PlaceholderAlignment::Baseline);
}

#[test]
fn add_placeholder_validates_the_baseline() {
    let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
    let err = builder
        .add_placeholder(10.0, 10.0, PlaceholderAlignment::Baseline, None, None, 1.0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingBaseline);
    assert_eq!(err.alignment(), Some(PlaceholderAlignment::Baseline));
    assert_eq!(builder.placeholder_count(), 0, "nothing is added");
    assert_eq!(builder.text_len(), 0);

    builder
        .add_placeholder(
            10.0,
            10.0,
            PlaceholderAlignment::Baseline,
            None,
            Some(TextBaseline::Alphabetic),
            2.0,
        )
        .unwrap();
    assert_eq!(builder.placeholder_scales(), &[2.0], "exactly one scale");

    let paragraph = builder.build();
    let placeholder = paragraph.placeholders()[0];
    assert_eq!(placeholder.width, 20.0);
    assert_eq!(placeholder.height, 20.0);
    assert_eq!(placeholder.baseline_offset, 20.0);
}

#[test]
fn unbalanced_pop_is_ignored() {
    let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
    builder.pop();
    builder.add_text("x");
    assert_eq!(builder.peek_style_index(), 0);

    let paragraph = builder.build();
    let expected = StyleRun {
        style_index: 0,
        range: 0..1,
    };
    assert_eq!(paragraph.style_runs(), &[expected]);
}

#[test]
fn push_and_pop_restore_the_previous_style() {
    let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
    builder.push_style(&bold(), 1.0);
    assert_eq!(builder.peek_style().font_weight, FontWeight::BOLD);
    builder.push_style(&TextStyle::new().font_size(30.0), 1.0);
    assert_eq!(
        builder.peek_style().font_weight,
        FontWeight::BOLD,
        "pushed styles resolve against the current one"
    );
    builder.pop();
    assert_eq!(builder.peek_style().font_size, 14.0);
    builder.pop();
    assert_eq!(builder.peek_style_index(), 0);
}

#[test]
fn empty_tree_builds_an_empty_paragraph() {
    let paragraph = build(&InlineSpan::from(TextSpan::default()), &[]);
    assert_eq!(paragraph.text(), "");
    assert!(paragraph.style_runs().is_empty());
    assert_eq!(paragraph.placeholder_count(), 0);
}
