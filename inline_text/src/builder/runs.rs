// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style table and run bookkeeping.

use alloc::vec::Vec;

use text_style::ResolvedStyle;

use crate::StyleRun;

/// An append-only style table with the runs that index into it.
///
/// At most one run is open at a time. Runs are closed when the next one starts, and closing a
/// run that covers no text discards it.
#[derive(Clone, Debug, Default)]
pub(crate) struct StyledRuns {
    styles: Vec<ResolvedStyle>,
    runs: Vec<StyleRun>,
    /// Start and style index of the open run.
    current: Option<(usize, usize)>,
}

impl StyledRuns {
    /// Appends `style` to the table and returns its index.
    pub(crate) fn add_style(&mut self, style: ResolvedStyle) -> usize {
        let index = self.styles.len();
        self.styles.push(style);
        index
    }

    pub(crate) fn style(&self, index: usize) -> &ResolvedStyle {
        &self.styles[index]
    }

    /// Closes the open run at `offset` and opens a new one there with `style_index`.
    pub(crate) fn start_run(&mut self, style_index: usize, offset: usize) {
        self.end_run_if_needed(offset);
        self.current = Some((offset, style_index));
    }

    /// Closes the open run at `offset`, if there is one.
    pub(crate) fn end_run_if_needed(&mut self, offset: usize) {
        let Some((start, style_index)) = self.current.take() else {
            return;
        };
        if start < offset {
            self.runs.push(StyleRun {
                style_index,
                range: start..offset,
            });
        }
    }

    #[cfg(test)]
    pub(crate) fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    pub(crate) fn into_parts(self) -> (Vec<ResolvedStyle>, Vec<StyleRun>) {
        (self.styles, self.runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_runs_are_dropped() {
        let mut runs = StyledRuns::default();
        let base = runs.add_style(ResolvedStyle::default());
        let other = runs.add_style(ResolvedStyle::default());
        runs.start_run(base, 0);
        runs.start_run(other, 0);
        runs.start_run(base, 4);
        runs.end_run_if_needed(4);

        let expected = StyleRun {
            style_index: other,
            range: 0..4,
        };
        assert_eq!(
            runs.runs(),
            &[expected],
            "only the run covering text survives"
        );
    }

    #[test]
    fn style_table_is_append_only() {
        let mut runs = StyledRuns::default();
        assert_eq!(runs.add_style(ResolvedStyle::default()), 0);
        assert_eq!(runs.add_style(ResolvedStyle::default()), 1);
        assert_eq!(runs.style(1), &ResolvedStyle::default());
        assert_eq!(runs.into_parts().0.len(), 2);
    }
}
