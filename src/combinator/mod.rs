//! Composition combinators
//!
//! Every combinator takes ownership of the enumerator(s) it wraps and
//! releases them when it is released itself. Release order is encoded in
//! struct field order: Rust drops fields top to bottom.
//!
//! - [`Cleaner`]: pass-through plus a callback run before the wrapped release
//! - [`Filter`]: transform-or-skip over a staged item-tuple
//! - [`FilterControl`]: the filter drives the wrapped enumerator itself and
//!   may end the sequence early
//! - [`Nested`]: flatten outer items into lazily built inner sequences

mod cleaner;
mod control;
mod filter;
mod nested;

pub use cleaner::{cleaner, Cleaner};
pub use control::{filter_control, filter_control_with_destructor, FilterControl};
pub use filter::{filter, filter_with_destructor, Filter};
pub use nested::{nested, nested_with_destructor, Nested};
