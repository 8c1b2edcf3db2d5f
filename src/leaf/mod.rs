//! Leaf producers
//!
//! Terminal enumerators with no wrapped child. Each documents its
//! item-tuple shape; constructors that touch the outside world return
//! `Result` and never yield a half-built cursor.

mod directory;
mod empty;
mod from_iter;
mod pattern;
mod single;
mod token;

pub use directory::{directory, DirEntryItem, Directory};
pub use empty::{empty, Empty};
pub use from_iter::{from_iter, FromIter};
pub use pattern::{glob, Glob, GlobItem};
pub use single::{single, single_with_cleanup, Single};
pub use token::{tokens, Tokens};
