// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A shared handle to a gesture or hover recognizer owned by the interaction layer.
///
/// Spans only store and compare recognizers; they never invoke them. Equality is identity:
/// two handles are equal when they point at the same allocation, regardless of its contents.
#[derive(Clone)]
pub struct Recognizer {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Recognizer {
    /// Wraps `recognizer` in a new shared handle.
    pub fn new<T: Any + Send + Sync>(recognizer: T) -> Self {
        Self {
            inner: Arc::new(recognizer),
        }
    }

    /// Creates a handle sharing an existing allocation.
    pub fn from_arc(recognizer: Arc<dyn Any + Send + Sync>) -> Self {
        Self { inner: recognizer }
    }

    /// Returns the recognizer if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Whether both handles refer to the same recognizer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner).cast::<()>()
    }
}

impl PartialEq for Recognizer {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Recognizer {}

impl Hash for Recognizer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.addr(), state);
    }
}

impl fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Recognizer").field(&self.addr()).finish()
    }
}
