//! Configuration for leaf producers and walks
//!
//! Builder-style: start from `new`/`default`, adjust with `with_*`.

use crate::EnumeratorError;

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    /// Any of these characters ends a token
    pub separators: Vec<char>,

    /// Characters stripped from both ends of every token
    pub trim: Vec<char>,
}

impl TokenConfig {
    /// Split on any character of `separators`, no trimming
    pub fn new(separators: &str) -> Self {
        Self {
            separators: separators.chars().collect(),
            trim: Vec::new(),
        }
    }

    /// Set characters trimmed from each token
    pub fn with_trim(mut self, trim: &str) -> Self {
        self.trim = trim.chars().collect();
        self
    }

    /// Reject configurations that cannot tokenize
    pub fn validate(&self) -> Result<(), EnumeratorError> {
        if self.separators.is_empty() {
            return Err(EnumeratorError::InvalidConfiguration(
                "token separators must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    pub(crate) fn is_trim(&self, c: char) -> bool {
        self.trim.contains(&c)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new(",").with_trim(" ")
    }
}

/// Recursive walk settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Deepest level yielded; entries of the root are level 1
    pub max_depth: usize,

    /// Yield and descend into entries whose name starts with `.`
    pub include_hidden: bool,

    /// Yield only non-directories (directories are still descended)
    pub files_only: bool,
}

impl WalkConfig {
    /// Limit depth (0 is treated as 1)
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Include hidden entries
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Skip directories in the output
    pub fn with_files_only(mut self, files_only: bool) -> Self {
        self.files_only = files_only;
        self
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            include_hidden: false,
            files_only: false,
        }
    }
}
