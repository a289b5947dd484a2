// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A running text offset threaded through a single tree traversal.
///
/// The value only ever grows. Each traversal creates its own accumulator, which keeps
/// concurrent read-only traversals of the same tree independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    value: usize,
}

impl Accumulator {
    /// Creates an accumulator starting at `value`.
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    /// The current offset.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Advances the offset by `addend`.
    pub fn increment(&mut self, addend: usize) {
        self.value += addend;
    }
}
