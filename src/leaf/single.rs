//! Single-item enumerator
//!
//! The item stays owned by the enumerator until release, so a cleanup
//! bound to it runs whether or not the item was ever enumerated. Callers
//! receive a clone; use a cheap handle (`Rc`, `Arc`, `&T`) for heavy items.

use crate::{Enumerator, UserData};

/// Enumerator over exactly one item
#[derive(Debug)]
pub struct Single<T> {
    item: UserData<T>,
    yielded: bool,
}

/// Enumerate `item` once
pub fn single<T: Clone>(item: T) -> Single<T> {
    Single {
        item: UserData::new(item),
        yielded: false,
    }
}

/// Enumerate `item` once; `cleanup` receives it at release
pub fn single_with_cleanup<T: Clone>(item: T, cleanup: impl FnOnce(T) + 'static) -> Single<T> {
    Single {
        item: UserData::with_destructor(item, cleanup),
        yielded: false,
    }
}

impl<T: Clone> Enumerator for Single<T> {
    type Item = T;

    fn enumerate(&mut self) -> Option<T> {
        if self.yielded {
            return None;
        }
        self.yielded = true;
        Some(self.item.get_mut().clone())
    }
}
