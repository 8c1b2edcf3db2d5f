//! Recursive directory walk
//!
//! Built only from the leaf producers and combinators: every directory
//! is a [`directory`] enumerator, hidden entries are removed by a
//! [`filter`], and each entry expands through [`nested`] into itself
//! followed by the walk of its children. Subdirectories are opened lazily,
//! when the walk reaches them, and closed as soon as they are exhausted.
//! Symbolic links are yielded but never descended into.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    directory, filter, from_iter, nested, single, DirEntryItem, Directory, Enumerator,
    EnumeratorError, WalkConfig,
};

/// Item-tuple yielded by [`walk`]: `(path, depth)`, depth 1 for root entries
pub type WalkItem = (PathBuf, usize);

type BoxedWalk = Box<dyn Enumerator<Item = WalkItem>>;

/// Walk everything below `root`, depth-first
///
/// Fails only if `root` itself cannot be opened; unreadable subdirectories
/// contribute no entries.
pub fn walk(root: impl AsRef<Path>, config: &WalkConfig) -> Result<BoxedWalk, EnumeratorError> {
    let entries = directory(root)?;
    Ok(walk_entries(entries, 1, config.clone()))
}

fn walk_entries(entries: Directory, depth: usize, config: WalkConfig) -> BoxedWalk {
    let visible = filter(
        entries,
        config.include_hidden,
        |include_hidden, (name, path, _): DirEntryItem| {
            (*include_hidden || !name.starts_with('.')).then_some(path)
        },
    );

    nested(visible, config, move |config, path: PathBuf| {
        // `symlink_metadata` so a link back to an ancestor cannot loop.
        let is_dir = fs::symlink_metadata(&path).is_ok_and(|m| m.is_dir());

        let mut parts: Vec<BoxedWalk> = Vec::with_capacity(2);
        if !(config.files_only && is_dir) {
            parts.push(single((path.clone(), depth)).boxed());
        }
        if is_dir && depth < config.max_depth {
            match directory(&path) {
                Ok(children) => parts.push(walk_entries(children, depth + 1, config.clone())),
                Err(err) => tracing::debug!(%err, "not descending"),
            }
        }
        Some(concat(parts))
    })
    .boxed()
}

/// Sequence the given enumerators one after another
fn concat(parts: Vec<BoxedWalk>) -> BoxedWalk {
    nested(from_iter(parts), (), |_, part: BoxedWalk| Some(part)).boxed()
}
