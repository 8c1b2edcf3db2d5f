//! Directory entries
//!
//! Item-tuple: `(name, path, metadata)`
//! - `name`: entry name relative to the directory (lossy UTF-8)
//! - `path`: directory path joined with the name
//! - `metadata`: status following symlinks, `None` if it cannot be read
//!
//! `.` and `..` are never yielded. Order is whatever the OS returns.

use std::fs::{self, Metadata, ReadDir};
use std::path::{Path, PathBuf};

use crate::{Enumerator, EnumeratorError};

/// Item-tuple yielded by [`Directory`]
pub type DirEntryItem = (String, PathBuf, Option<Metadata>);

/// Enumerator over the entries of one directory
#[derive(Debug)]
pub struct Directory {
    path: PathBuf,
    // `None` once exhausted or after a read error.
    entries: Option<ReadDir>,
}

/// Open `path` for enumeration
pub fn directory(path: impl AsRef<Path>) -> Result<Directory, EnumeratorError> {
    let path = path.as_ref();
    let entries = fs::read_dir(path).map_err(|source| {
        tracing::debug!(path = %path.display(), %source, "cannot open directory");
        EnumeratorError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(Directory {
        path: path.to_path_buf(),
        entries: Some(entries),
    })
}

impl Enumerator for Directory {
    type Item = DirEntryItem;

    fn enumerate(&mut self) -> Option<DirEntryItem> {
        let entry = match self.entries.as_mut()?.next() {
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                tracing::debug!(path = %self.path.display(), %err, "directory read failed");
                self.entries = None;
                return None;
            }
            None => {
                self.entries = None;
                return None;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        let metadata = fs::metadata(&path).ok();
        Some((name, path, metadata))
    }
}
