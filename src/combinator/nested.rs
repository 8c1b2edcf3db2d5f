//! Nested enumerator: flatten outer items into inner sequences
//!
//! Inner enumerators are built lazily, one per outer item, and released as
//! soon as they are exhausted. Empty inner sequences are stepped over
//! inside a single `enumerate` call, so the caller only sees `None` once
//! the outer enumerator itself is exhausted.

use std::fmt;

use crate::{Enumerator, UserData};

/// Flattening combinator over an outer enumerator and an inner factory
///
/// The factory returns `None` when it cannot build an inner sequence for an
/// outer item; that item then contributes nothing.
pub struct Nested<O, D, F, I> {
    // Field order is release order: active inner, outer, then data.
    inner: Option<I>,
    outer: O,
    data: UserData<D>,
    factory: F,
}

/// Flatten `outer` by building one inner enumerator per outer item
pub fn nested<O, D, F, I>(outer: O, data: D, factory: F) -> Nested<O, D, F, I>
where
    O: Enumerator,
    I: Enumerator,
    F: FnMut(&mut D, O::Item) -> Option<I>,
{
    Nested {
        inner: None,
        outer,
        data: UserData::new(data),
        factory,
    }
}

/// Like [`nested`], with `destructor` run on `data` at release
pub fn nested_with_destructor<O, D, F, I>(
    outer: O,
    data: D,
    destructor: impl FnOnce(D) + 'static,
    factory: F,
) -> Nested<O, D, F, I>
where
    O: Enumerator,
    I: Enumerator,
    F: FnMut(&mut D, O::Item) -> Option<I>,
{
    Nested {
        inner: None,
        outer,
        data: UserData::with_destructor(data, destructor),
        factory,
    }
}

impl<O, D, F, I> Nested<O, D, F, I> {
    /// Whether an inner enumerator is currently alive
    pub fn has_active_inner(&self) -> bool {
        self.inner.is_some()
    }
}

impl<O, D, F, I> Enumerator for Nested<O, D, F, I>
where
    O: Enumerator,
    I: Enumerator,
    F: FnMut(&mut D, O::Item) -> Option<I>,
{
    type Item = I::Item;

    fn enumerate(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(item) = inner.enumerate() {
                    return Some(item);
                }
                tracing::trace!("inner enumerator exhausted");
                self.inner = None;
            }

            let outer_item = self.outer.enumerate()?;
            self.inner = (self.factory)(self.data.get_mut(), outer_item);
        }
    }
}

impl<O: fmt::Debug, D: fmt::Debug, F, I: fmt::Debug> fmt::Debug for Nested<O, D, F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nested")
            .field("inner", &self.inner)
            .field("outer", &self.outer)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
