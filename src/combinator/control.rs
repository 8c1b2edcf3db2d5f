//! Control-form filter
//!
//! No staging: the control function gets the wrapped enumerator itself and
//! decides how many items to pull and what to deliver. Returning `None`
//! ends the whole sequence, which is how a filter terminates early on an
//! item's value instead of merely skipping it.

use std::fmt;

use crate::{Enumerator, UserData};

/// Filter that drives the wrapped enumerator itself
pub struct FilterControl<E, D, F> {
    // Field order is release order: data, then the wrapped enumerator.
    data: UserData<D>,
    unfiltered: E,
    control: F,
    finished: bool,
}

/// Hand `unfiltered` to `control` on every advance
pub fn filter_control<E, D, F, O>(unfiltered: E, data: D, control: F) -> FilterControl<E, D, F>
where
    E: Enumerator,
    F: FnMut(&mut D, &mut E) -> Option<O>,
{
    FilterControl {
        data: UserData::new(data),
        unfiltered,
        control,
        finished: false,
    }
}

/// Like [`filter_control`], with `destructor` run on `data` at release
pub fn filter_control_with_destructor<E, D, F, O>(
    unfiltered: E,
    data: D,
    destructor: impl FnOnce(D) + 'static,
    control: F,
) -> FilterControl<E, D, F>
where
    E: Enumerator,
    F: FnMut(&mut D, &mut E) -> Option<O>,
{
    FilterControl {
        data: UserData::with_destructor(data, destructor),
        unfiltered,
        control,
        finished: false,
    }
}

impl<E, D, F, O> Enumerator for FilterControl<E, D, F>
where
    E: Enumerator,
    F: FnMut(&mut D, &mut E) -> Option<O>,
{
    type Item = O;

    fn enumerate(&mut self) -> Option<O> {
        if self.finished {
            return None;
        }
        let delivered = (self.control)(self.data.get_mut(), &mut self.unfiltered);
        if delivered.is_none() {
            tracing::trace!("control filter finished");
            self.finished = true;
        }
        delivered
    }
}

impl<E: fmt::Debug, D: fmt::Debug, F> fmt::Debug for FilterControl<E, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterControl")
            .field("data", &self.data)
            .field("unfiltered", &self.unfiltered)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
