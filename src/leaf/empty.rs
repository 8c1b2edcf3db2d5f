use std::fmt;
use std::marker::PhantomData;

use crate::Enumerator;

/// Enumerator over nothing
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

/// Create an enumerator that never yields
pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Enumerator for Empty<T> {
    type Item = T;

    fn enumerate(&mut self) -> Option<T> {
        None
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_yields() {
        let mut e = empty::<String>();
        for _ in 0..3 {
            assert_eq!(e.enumerate(), None);
        }
    }
}
