// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text style vocabulary for inline spans.
//!
//! - [`TextStyle`] is a *specified* style: every property is optional and an absent property is
//!   inherited from the enclosing style.
//! - [`ResolvedStyle`] is a *resolved* style: every property is concrete. Resolved styles are
//!   produced by merging a specified style onto a parent with [`ResolvedStyle::apply_style`].
//! - [`ParagraphStyle`] carries paragraph level settings plus the default text style of a
//!   paragraph.
//! - [`RenderComparison`] classifies how much two styles (or span trees) differ, from
//!   [`Identical`](RenderComparison::Identical) up to [`Layout`](RenderComparison::Layout).
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `peniko`.
//! - `libm`: Use `libm` for floating point math in `no_std` builds.
//!
//! ## Example
//!
//! ```
//! use text_style::{FontWeight, RenderComparison, ResolvedStyle, TextStyle};
//!
//! let base = ResolvedStyle::default();
//! let bold = TextStyle::new().font_weight(FontWeight::BOLD);
//! let resolved = ResolvedStyle::apply_style(&base, &bold, 1.0);
//! assert_eq!(resolved.font_weight, FontWeight::BOLD);
//! assert_eq!(resolved.font_size, base.font_size);
//!
//! let larger = TextStyle::new().font_size(20.0);
//! assert_eq!(bold.compare_to(&larger), RenderComparison::Layout);
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

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("text_style requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod comparison;
mod font;
mod paragraph;
mod style;

pub use peniko::Color;

pub use comparison::RenderComparison;
pub use font::{FontFeature, FontStyle, FontWeight};
pub use paragraph::{ParagraphStyle, TextAlign, TextDirection};
pub use style::{DecorationStyle, ResolvedStyle, TextBaseline, TextDecoration, TextStyle};
