//! Name resolution over the search list.

use crate::error::{Cause, Error, Result};
use crate::exec::{Metadata, Probe};
use crate::search::SearchList;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const SEPARATOR: u8 = b'/';

/// How much of the search list to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Stop at the first executable candidate.
    FirstMatch,
    /// Walk every directory and keep every executable candidate.
    AllMatches,
}

#[derive(Debug, Clone)]
enum SearchPath {
    Env,
    Fixed(OsString),
}

impl SearchPath {
    fn load(&self) -> SearchList {
        match self {
            Self::Env => SearchList::from_env(),
            Self::Fixed(value) => SearchList::parse(value),
        }
    }
}

/// Resolves program names to executable paths.
///
/// A default `Finder` reads `PATH` on every call and checks candidates with
/// `stat(2)`.
#[derive(Debug, Clone)]
pub struct Finder<P = Metadata> {
    search_path: SearchPath,
    probe: P,
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

impl Finder {
    pub fn new() -> Self {
        Self {
            search_path: SearchPath::Env,
            probe: Metadata,
        }
    }
}

impl<P: Probe> Finder<P> {
    /// Search `value` (a `:`-separated list) instead of `PATH`.
    pub fn with_search_path(mut self, value: impl Into<OsString>) -> Self {
        self.search_path = SearchPath::Fixed(value.into());
        self
    }

    pub fn with_probe<Q: Probe>(self, probe: Q) -> Finder<Q> {
        Finder {
            search_path: self.search_path,
            probe,
        }
    }

    /// First executable named `name`.
    pub fn find(&self, name: impl AsRef<OsStr>) -> Result<PathBuf> {
        let name = name.as_ref();
        self.search(name, Mode::FirstMatch)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(name))
    }

    /// Every executable named `name`, in search-list order.
    pub fn find_all(&self, name: impl AsRef<OsStr>) -> Result<Vec<PathBuf>> {
        self.search(name, Mode::AllMatches)
    }

    /// Resolves `name` and returns the matches; never an empty `Ok`.
    ///
    /// A name containing `/` is checked in place and returned unchanged; the
    /// search list is not read. Otherwise each directory is probed in order
    /// and candidates that fail the check are skipped.
    pub fn search(&self, name: impl AsRef<OsStr>, mode: Mode) -> Result<Vec<PathBuf>> {
        let name = name.as_ref();

        if has_separator(name) {
            let path = Path::new(name);
            return match self.probe.probe(path) {
                Ok(()) => Ok(vec![path.to_path_buf()]),
                Err(cause) => {
                    debug!(name = %path.display(), %cause, "direct path rejected");
                    Err(Error::new(name, cause))
                }
            };
        }

        let dirs = self.search_path.load();
        if dirs.is_empty() {
            debug!(name = %Path::new(name).display(), "empty search list");
            return Err(Error::new(name, Cause::NotFound));
        }

        let mut found = Vec::with_capacity(match mode {
            Mode::FirstMatch => 1,
            Mode::AllMatches => dirs.len(),
        });

        for dir in &dirs {
            let candidate = dir.join(name);
            match self.probe.probe(&candidate) {
                Ok(()) => {
                    trace!(candidate = %candidate.display(), "match");
                    found.push(candidate);
                    if mode == Mode::FirstMatch {
                        break;
                    }
                }
                Err(cause) => trace!(candidate = %candidate.display(), %cause, "skip"),
            }
        }

        if found.is_empty() {
            debug!(name = %Path::new(name).display(), dirs = dirs.len(), "not found");
            return Err(Error::not_found(name));
        }
        debug!(name = %Path::new(name).display(), matches = found.len(), "resolved");
        Ok(found)
    }
}

fn has_separator(name: &OsStr) -> bool {
    name.as_encoded_bytes().contains(&SEPARATOR)
}

/// Finds the executable a shell would run for `name`, searching `PATH`.
///
/// The result may be absolute or relative to the current directory,
/// depending on the `PATH` entry that matched.
pub fn lookup(name: impl AsRef<OsStr>) -> Result<PathBuf> {
    Finder::new().find(name)
}

/// Finds every executable named `name` along `PATH`, in order.
pub fn lookup_all(name: impl AsRef<OsStr>) -> Result<Vec<PathBuf>> {
    Finder::new().find_all(name)
}
