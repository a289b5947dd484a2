// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline span trees and the paragraph builder that flattens them for text layout.
//!
//! An [`InlineSpan`] tree describes a run of rich text: [`TextSpan`]s carry text, a style, an
//! optional tap recognizer and nested children, while [`WidgetSpan`]s reserve an atomic slot for an
//! externally laid out widget. The tree is built once per UI update and never mutated afterwards.
//!
//! - [`ParagraphBuilder`] receives the tree through [`InlineSpan::build`] and produces a
//!   [`Paragraph`]: the flattened text, style runs over an append-only style table, and one
//!   placeholder slot per widget span.
//! - [`InlineSpan::compare_to`] classifies how much a rebuilt tree differs from the previous one
//!   as a [`RenderComparison`], so callers can skip layout or paint work.
//! - [`InlineSpan::span_for_position`] and [`InlineSpan::code_unit_at`] resolve text offsets back
//!   to spans.
//! - [`InlineSpan::semantics_information`] flattens the tree for accessibility.
//! - [`TextPainter`] drives the measure-then-build protocol for trees that contain widgets.
//!
//! ## Indices
//!
//! All offsets are **byte indices** into UTF-8 text. A placeholder occupies the encoding of
//! [`PLACEHOLDER_CHAR`] in both the built paragraph and the plain text of the tree.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in dependencies.
//! - `libm`: Use `libm` for floating point math in `no_std` builds.
//! - `accesskit`: Lower semantics information to [AccessKit](https://accesskit.dev) nodes.
//!
//! ## Example
//!
//! ```
//! use inline_text::{InlineSpan, ParagraphBuilder, TextSpan};
//! use text_style::{FontWeight, ParagraphStyle, TextStyle};
//!
//! let bold = TextStyle::new().font_weight(FontWeight::BOLD);
//! let span: InlineSpan = TextSpan::new("Hello ")
//!     .with_child(TextSpan::new("World").with_style(bold))
//!     .into();
//!
//! let mut builder = ParagraphBuilder::new(ParagraphStyle::default());
//! span.build(&mut builder, &[], 1.0).unwrap();
//! let paragraph = builder.build();
//!
//! assert_eq!(paragraph.text(), "Hello World");
//! assert_eq!(paragraph.style_runs().len(), 2);
//! assert_eq!(paragraph.style_runs()[1].range, 6..11);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod accumulator;
mod builder;
mod error;
mod painter;
mod paragraph;
mod position;
mod recognizer;
mod semantics;
mod span;

#[cfg(test)]
mod tests;

pub use text_style;
pub use text_style::{RenderComparison, TextBaseline};

pub use accumulator::Accumulator;
pub use builder::ParagraphBuilder;
pub use error::{Error, ErrorKind};
pub use painter::{PlaceholderMeasurer, TextPainter};
pub use paragraph::{Paragraph, PlaceholderDimensions, PlaceholderRun, StyleRun};
pub use position::{Affinity, TextPosition};
pub use recognizer::Recognizer;
pub use semantics::InlineSpanSemanticsInformation;
#[cfg(feature = "accesskit")]
pub use semantics::accesskit::SemanticsNodeIds;
pub use span::{
    InlineSpan, PLACEHOLDER_CHAR, PlaceholderAlignment, PlaceholderSpan, PlainTextOptions, TextSpan,
    WidgetId, WidgetSpan,
};
