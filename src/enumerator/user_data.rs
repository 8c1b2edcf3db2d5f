//! User data carried by combinators
//!
//! Filters and the nested combinator own a piece of caller data and an
//! optional destructor for it. The destructor runs once, when the data is
//! dropped; without one the data's own `Drop` is the destructor.

use std::fmt;

/// Caller data plus optional destructor
pub struct UserData<D> {
    // Only `None` inside `drop`.
    data: Option<D>,
    destructor: Option<Box<dyn FnOnce(D)>>,
}

impl<D> UserData<D> {
    /// Wrap data released by its own `Drop`
    pub fn new(data: D) -> Self {
        Self {
            data: Some(data),
            destructor: None,
        }
    }

    /// Wrap data released by an explicit destructor
    pub fn with_destructor(data: D, destructor: impl FnOnce(D) + 'static) -> Self {
        Self {
            data: Some(data),
            destructor: Some(Box::new(destructor)),
        }
    }

    /// Mutable access to the data
    pub fn get_mut(&mut self) -> &mut D {
        match self.data.as_mut() {
            Some(data) => data,
            None => unreachable!("user data accessed during release"),
        }
    }
}

impl<D> Drop for UserData<D> {
    fn drop(&mut self) {
        if let (Some(data), Some(destructor)) = (self.data.take(), self.destructor.take()) {
            destructor(data);
        }
    }
}

impl<D: fmt::Debug> fmt::Debug for UserData<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("data", &self.data)
            .field("destructor", &self.destructor.is_some())
            .finish()
    }
}
