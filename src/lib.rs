//! # Strand: single-pass enumerators and their combinators
//!
//! Traverse directories, glob matches, string tokens and programmatically
//! composed sequences through one uniform cursor interface.
//!
//! ## Core Contract
//!
//! 1. **Advance**: [`Enumerator::enumerate`] yields the next item-tuple or `None`
//! 2. **Release**: [`Enumerator::release`] consumes the enumerator exactly once
//! 3. **Ownership**: wrapping an enumerator moves it into the combinator
//!
//! Every producer fixes its own `Item` type (a directory yields
//! `(name, path, metadata)`, a tokenizer yields `String`) and every combinator
//! passes that shape through or rewrites it explicitly.
//!
//! ## Usage Example
//!
//! ```
//! use strand::{filter, from_iter, nested, Enumerator};
//!
//! let evens = filter(from_iter(1..=4), (), |_, n: i32| (n % 2 == 0).then_some(n * 2));
//! assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![4, 8]);
//!
//! let pairs = nested(from_iter(["a", "b"]), (), |_, s: &str| {
//!     Some(from_iter([format!("{s}1"), format!("{s}2")]))
//! });
//! assert_eq!(pairs.into_iter().collect::<Vec<_>>(), vec!["a1", "a2", "b1", "b2"]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod enumerator; // Contract, user data ownership, iterator bridge
pub mod combinator; // Cleaner, filters, nested flattening
pub mod leaf; // Terminal producers
pub mod config; // Builder-style configuration
pub mod walk; // Recursive directory walk composed from combinators

// Re-exports for convenience
pub use enumerator::{Enumerator, Iter, UserData};
pub use combinator::{
    cleaner, filter, filter_control, filter_control_with_destructor, filter_with_destructor,
    nested, nested_with_destructor, Cleaner, Filter, FilterControl, Nested,
};
pub use config::{TokenConfig, WalkConfig};
pub use leaf::{
    directory, empty, from_iter, glob, single, single_with_cleanup, tokens, DirEntryItem,
    Directory, Empty, FromIter, Glob, GlobItem, Single, Tokens,
};
pub use walk::{walk, WalkItem};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing a leaf producer
///
/// Enumeration itself has no error channel: a constructed enumerator reports
/// failures to produce an item the same way it reports exhaustion.
#[derive(Error, Debug)]
pub enum EnumeratorError {
    /// Backing resource could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern did not parse
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        /// Pattern as supplied by the caller
        pattern: String,
        /// Parser error
        #[source]
        source: ::glob::PatternError,
    },

    /// Configuration rejected before construction
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
