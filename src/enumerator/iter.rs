//! Iterator bridge

use std::iter::FusedIterator;

use super::Enumerator;

/// Fused `Iterator` over an owned enumerator
///
/// Created by [`Enumerator::into_iter`].
#[derive(Debug)]
pub struct Iter<E> {
    inner: E,
    finished: bool,
}

impl<E: Enumerator> Iter<E> {
    pub(super) fn new(inner: E) -> Self {
        Self {
            inner,
            finished: false,
        }
    }

    /// Recover the enumerator, e.g. to release it explicitly
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Enumerator> Iterator for Iter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.inner.enumerate();
        self.finished = item.is_none();
        item
    }
}

impl<E: Enumerator> FusedIterator for Iter<E> {}
