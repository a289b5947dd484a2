// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening of span trees into paragraphs.

mod runs;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use text_style::{ParagraphStyle, ResolvedStyle, TextBaseline, TextStyle};

use self::runs::StyledRuns;
use crate::{Error, PLACEHOLDER_CHAR, Paragraph, PlaceholderAlignment, PlaceholderRun};

/// Receives styles, text and placeholders from [`InlineSpan::build`](crate::InlineSpan::build)
/// and produces a [`Paragraph`].
///
/// Styles form a stack: [`push_style`](Self::push_style) resolves a style against the one on
/// top and [`pop`](Self::pop) restores the previous one. Each push and pop starts a new style
/// run at the current end of the text.
#[derive(Clone, Debug)]
pub struct ParagraphBuilder {
    text: String,
    paragraph_style: ParagraphStyle,
    paragraph_style_index: usize,
    runs: StyledRuns,
    style_stack: SmallVec<[usize; 8]>,
    placeholders: Vec<PlaceholderRun>,
    placeholder_scales: Vec<f32>,
}

impl ParagraphBuilder {
    /// Creates a builder whose base style is the default text style of `paragraph_style`.
    pub fn new(paragraph_style: ParagraphStyle) -> Self {
        Self::with_text_scale_factor(paragraph_style, 1.0)
    }

    /// Creates a builder whose base style is the default text style of `paragraph_style`, with
    /// its font size multiplied by `text_scale_factor`.
    pub fn with_text_scale_factor(paragraph_style: ParagraphStyle, text_scale_factor: f32) -> Self {
        let mut runs = StyledRuns::default();
        let base_style = paragraph_style.resolved_text_style(text_scale_factor);
        let paragraph_style_index = runs.add_style(base_style);
        runs.start_run(paragraph_style_index, 0);
        Self {
            text: String::new(),
            paragraph_style,
            paragraph_style_index,
            runs,
            style_stack: SmallVec::new(),
            placeholders: Vec::new(),
            placeholder_scales: Vec::new(),
        }
    }

    /// Resolves `style` against the current style and makes it current.
    ///
    /// A font size set on `style` is multiplied by `text_scale_factor`.
    pub fn push_style(&mut self, style: &TextStyle, text_scale_factor: f32) {
        let resolved = ResolvedStyle::apply_style(self.peek_style(), style, text_scale_factor);
        let index = self.runs.add_style(resolved);
        log::trace!("push style {index} at {}", self.text.len());
        self.style_stack.push(index);
        self.runs.start_run(index, self.text.len());
    }

    /// Restores the style that was current before the last [`push_style`](Self::push_style).
    ///
    /// Popping with nothing pushed does nothing.
    pub fn pop(&mut self) {
        if self.style_stack.pop().is_none() {
            log::debug!("pop without a matching push_style at {}", self.text.len());
            return;
        }
        let index = self.peek_style_index();
        self.runs.start_run(index, self.text.len());
    }

    /// Appends `text` under the current style.
    pub fn add_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends a placeholder slot.
    ///
    /// `baseline_offset` defaults to `height`. The width, height and baseline offset are
    /// multiplied by `scale`, and `scale` is recorded in
    /// [`placeholder_scales`](Self::placeholder_scales). Fails with
    /// [`ErrorKind::MissingBaseline`](crate::ErrorKind::MissingBaseline) when `alignment` is
    /// baseline relative and `baseline` is `None`; nothing is appended in that case.
    pub fn add_placeholder(
        &mut self,
        width: f32,
        height: f32,
        alignment: PlaceholderAlignment,
        baseline_offset: Option<f32>,
        baseline: Option<TextBaseline>,
        scale: f32,
    ) -> Result<(), Error> {
        alignment.check_baseline(baseline)?;
        let baseline_offset = baseline_offset.unwrap_or(height);

        let index = self.text.len();
        self.text.push(PLACEHOLDER_CHAR);
        self.placeholders.push(PlaceholderRun {
            index,
            width: width * scale,
            height: height * scale,
            alignment,
            baseline_offset: baseline_offset * scale,
            baseline,
        });
        self.placeholder_scales.push(scale);
        Ok(())
    }

    /// The number of placeholders added so far.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// The scale of each placeholder added so far.
    pub fn placeholder_scales(&self) -> &[f32] {
        &self.placeholder_scales
    }

    /// The index in the style table of the current style.
    pub fn peek_style_index(&self) -> usize {
        self.style_stack
            .last()
            .copied()
            .unwrap_or(self.paragraph_style_index)
    }

    /// The current style.
    pub fn peek_style(&self) -> &ResolvedStyle {
        self.runs.style(self.peek_style_index())
    }

    /// The length in bytes of the text appended so far.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Closes the last run and returns the paragraph.
    pub fn build(mut self) -> Paragraph {
        self.runs.end_run_if_needed(self.text.len());
        if !self.style_stack.is_empty() {
            log::debug!("{} styles still pushed at build", self.style_stack.len());
        }
        let (styles, runs) = self.runs.into_parts();
        log::trace!(
            "built paragraph: {} bytes, {} runs, {} placeholders",
            self.text.len(),
            runs.len(),
            self.placeholders.len()
        );
        Paragraph {
            text: self.text,
            styles,
            runs,
            placeholders: self.placeholders,
            placeholder_scales: self.placeholder_scales,
            paragraph_style: self.paragraph_style,
        }
    }
}
