//! Glob matches
//!
//! Item-tuple: `(path, metadata)`, metadata following symlinks or `None`.
//! Matches that cannot be read while globbing are skipped. A pattern that
//! matches nothing is an empty sequence, not an error.

use std::fs::{self, Metadata};
use std::path::PathBuf;

use ::glob::Paths;

use crate::{Enumerator, EnumeratorError};

/// Item-tuple yielded by [`Glob`]
pub type GlobItem = (PathBuf, Option<Metadata>);

/// Enumerator over filesystem paths matching a pattern
#[derive(Debug)]
pub struct Glob {
    pattern: String,
    paths: Paths,
}

/// Expand `pattern` lazily
pub fn glob(pattern: &str) -> Result<Glob, EnumeratorError> {
    let paths = ::glob::glob(pattern).map_err(|source| {
        tracing::debug!(pattern, %source, "invalid glob pattern");
        EnumeratorError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    Ok(Glob {
        pattern: pattern.to_string(),
        paths,
    })
}

impl Enumerator for Glob {
    type Item = GlobItem;

    fn enumerate(&mut self) -> Option<GlobItem> {
        for matched in self.paths.by_ref() {
            match matched {
                Ok(path) => {
                    let metadata = fs::metadata(&path).ok();
                    return Some((path, metadata));
                }
                Err(err) => {
                    tracing::debug!(pattern = %self.pattern, %err, "skipping unreadable match");
                }
            }
        }
        None
    }
}
