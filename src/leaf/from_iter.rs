use std::iter::Fuse;

use crate::Enumerator;

/// Enumerator over any Rust iterator
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: Fuse<I>,
}

/// Enumerate the items of `iterable`
///
/// The iterator is fused, so exhaustion is idempotent even for iterators
/// that resume after returning `None`.
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I: Iterator> Enumerator for FromIter<I> {
    type Item = I::Item;

    fn enumerate(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flicker(u8);

    impl Iterator for Flicker {
        type Item = u8;

        fn next(&mut self) -> Option<u8> {
            self.0 += 1;
            (self.0 % 2 == 1).then_some(self.0)
        }
    }

    #[test]
    fn test_resuming_iterator_is_fused() {
        let mut e = from_iter(Flicker(0));
        assert_eq!(e.enumerate(), Some(1));
        assert_eq!(e.enumerate(), None);
        assert_eq!(e.enumerate(), None);
    }
}
