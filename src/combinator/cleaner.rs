//! Cleanup wrapper

use std::fmt;

use crate::Enumerator;

/// Pass-through enumerator that runs a callback at release
///
/// The callback runs exactly once, before the wrapped enumerator is
/// released. A panicking callback is not caught.
pub struct Cleaner<E, F: FnOnce()> {
    cleanup: Option<F>,
    wrapped: E,
}

/// Wrap `wrapped` so that `cleanup` runs when it is released
///
/// Any data the callback needs is captured by the closure.
pub fn cleaner<E, F>(wrapped: E, cleanup: F) -> Cleaner<E, F>
where
    E: Enumerator,
    F: FnOnce(),
{
    Cleaner {
        cleanup: Some(cleanup),
        wrapped,
    }
}

impl<E: Enumerator, F: FnOnce()> Enumerator for Cleaner<E, F> {
    type Item = E::Item;

    fn enumerate(&mut self) -> Option<Self::Item> {
        self.wrapped.enumerate()
    }
}

impl<E, F: FnOnce()> Drop for Cleaner<E, F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            tracing::trace!("running enumerator cleanup");
            cleanup();
        }
        // `wrapped` is dropped after this body returns.
    }
}

impl<E: fmt::Debug, F: FnOnce()> fmt::Debug for Cleaner<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleaner")
            .field("wrapped", &self.wrapped)
            .field("pending", &self.cleanup.is_some())
            .finish()
    }
}
