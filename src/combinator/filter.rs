//! Value-rewriting filter
//!
//! Each item pulled from the wrapped enumerator is staged and handed to
//! the transform together with the user data. `Some(out)` delivers `out`;
//! `None` discards the item and pulls the next one before returning. A
//! single `enumerate` call may therefore consume any number of upstream
//! items.
//!
//! The output type is chosen by the transform, so this is also the
//! adapter between different item-tuple shapes.

use std::fmt;

use crate::{Enumerator, UserData};

/// Transform-or-skip combinator
pub struct Filter<E, D, F> {
    // Field order is release order: data, then the wrapped enumerator.
    data: UserData<D>,
    unfiltered: E,
    transform: F,
}

/// Filter `unfiltered` through `transform`, sharing `data` across calls
pub fn filter<E, D, F, O>(unfiltered: E, data: D, transform: F) -> Filter<E, D, F>
where
    E: Enumerator,
    F: FnMut(&mut D, E::Item) -> Option<O>,
{
    Filter {
        data: UserData::new(data),
        unfiltered,
        transform,
    }
}

/// Like [`filter`], with `destructor` run on `data` at release
pub fn filter_with_destructor<E, D, F, O>(
    unfiltered: E,
    data: D,
    destructor: impl FnOnce(D) + 'static,
    transform: F,
) -> Filter<E, D, F>
where
    E: Enumerator,
    F: FnMut(&mut D, E::Item) -> Option<O>,
{
    Filter {
        data: UserData::with_destructor(data, destructor),
        unfiltered,
        transform,
    }
}

impl<E, D, F, O> Enumerator for Filter<E, D, F>
where
    E: Enumerator,
    F: FnMut(&mut D, E::Item) -> Option<O>,
{
    type Item = O;

    fn enumerate(&mut self) -> Option<O> {
        while let Some(staged) = self.unfiltered.enumerate() {
            if let Some(out) = (self.transform)(self.data.get_mut(), staged) {
                return Some(out);
            }
        }
        None
    }
}

impl<E: fmt::Debug, D: fmt::Debug, F> fmt::Debug for Filter<E, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("data", &self.data)
            .field("unfiltered", &self.unfiltered)
            .finish_non_exhaustive()
    }
}
