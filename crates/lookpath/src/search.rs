//! The directory search list.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable holding the search list.
pub const PATH_VAR: &str = "PATH";

const CURRENT_DIR: &str = ".";

/// Ordered directories to probe. Empty segments are stored as `.`;
/// duplicates and order are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchList {
    dirs: Vec<PathBuf>,
}

impl SearchList {
    /// Reads `PATH` now. Unset and empty both give an empty list.
    pub fn from_env() -> Self {
        env::var_os(PATH_VAR)
            .map(Self::parse)
            .unwrap_or_default()
    }

    pub fn parse(value: impl AsRef<OsStr>) -> Self {
        let value = value.as_ref();
        if value.is_empty() {
            return Self::default();
        }

        let dirs = env::split_paths(value)
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    PathBuf::from(CURRENT_DIR)
                } else {
                    dir
                }
            })
            .collect();
        Self { dirs }
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a SearchList {
    type Item = &'a Path;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, PathBuf>, fn(&PathBuf) -> &Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter().map(PathBuf::as_path as fn(&PathBuf) -> &Path)
    }
}
