//! Enumerator contract
//!
//! An enumerator is a single-pass cursor over item-tuples.
//! The tuple shape is the associated `Item` type: fixed per producer,
//! known to the caller at compile time, never discovered at runtime.
//!
//! Release is tied to ownership: `release(self)` consumes the cursor,
//! and dropping it performs the same release. A second release cannot
//! be written.

mod iter;
mod user_data;

pub use iter::Iter;
pub use user_data::UserData;

/// Forward-only cursor over a sequence of item-tuples
///
/// Implementors must keep returning `None` once exhausted.
pub trait Enumerator {
    /// Item-tuple produced per successful advance
    type Item;

    /// Advance and fetch the next item-tuple
    ///
    /// Returns `None` when the sequence is exhausted or the producer failed
    /// to produce an item; the two are not distinguished.
    fn enumerate(&mut self) -> Option<Self::Item>;

    /// Release this enumerator and everything it owns
    ///
    /// Equivalent to dropping it; spelled out for call sites that want the
    /// end of a cursor's lifetime to be visible.
    fn release(self)
    where
        Self: Sized,
    {
        drop(self);
    }

    /// Bridge into a fused `Iterator`
    ///
    /// Dropping the iterator releases the enumerator.
    fn into_iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Erase the concrete type, keeping only the item-tuple shape
    fn boxed<'a>(self) -> Box<dyn Enumerator<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<E: Enumerator + ?Sized> Enumerator for Box<E> {
    type Item = E::Item;

    fn enumerate(&mut self) -> Option<Self::Item> {
        (**self).enumerate()
    }
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    fn enumerate(&mut self) -> Option<Self::Item> {
        (**self).enumerate()
    }
}
