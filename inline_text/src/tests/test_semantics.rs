// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening span trees for accessibility.

use super::utils::widget;
use crate::{InlineSpan, InlineSpanSemanticsInformation, Recognizer, TextSpan};

#[test]
fn one_widget_yields_one_placeholder_record() {
    let tree: InlineSpan = TextSpan::new("a")
        .with_child("b")
        .with_child(widget(1))
        .with_child("c")
        .into();
    let records = tree.semantics_information();

    assert_eq!(records.len(), 4);
    let placeholders: alloc::vec::Vec<_> = records
        .iter()
        .filter(|record| record.is_placeholder())
        .collect();
    let expected = [&InlineSpanSemanticsInformation::PLACEHOLDER];
    assert_eq!(placeholders, expected);
    let texts: alloc::vec::Vec<_> = records
        .iter()
        .filter(|record| !record.is_placeholder())
        .map(InlineSpanSemanticsInformation::text_content)
        .collect();
    assert_eq!(texts, ["a", "b", "c"], "text records stay separate");
}

#[test]
fn spans_without_text_or_label_contribute_only_their_children() {
    let tree: InlineSpan = TextSpan::default()
        .with_child(TextSpan::default().with_semantics_label("icon"))
        .with_child(TextSpan::default().with_child("x"))
        .into();
    let records = tree.semantics_information();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text_content(), "");
    assert_eq!(records[0].semantics_label(), Some("icon"));
    assert_eq!(records[0].announced_text(), "icon");
    assert_eq!(records[1].text_content(), "x");
}

#[test]
fn recognizers_are_carried_into_records() {
    let tap = Recognizer::new("tap");
    let tree: InlineSpan = TextSpan::new("see ")
        .with_child(TextSpan::new("docs").with_recognizer(tap.clone()))
        .into();
    let records = tree.semantics_information();

    assert_eq!(records[0].recognizer(), None);
    assert!(!records[0].requires_own_node());
    assert_eq!(records[1].recognizer(), Some(&tap));
    assert!(records[1].requires_own_node());
}

#[test]
fn collection_appends_in_place() {
    let mut collector = alloc::vec![InlineSpanSemanticsInformation::PLACEHOLDER];
    let tail = InlineSpan::from("tail");
    tail.compute_semantics_information(&mut collector);
    assert_eq!(collector.len(), 2);
    assert_eq!(collector[1].text_content(), "tail");
}
