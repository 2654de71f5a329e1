//! Error types for executable lookup.

use std::ffi::{OsStr, OsString};
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A failed lookup: the name that was requested and why it did not resolve.
#[derive(Debug, Error)]
#[error("exec: {name:?}: {cause}")]
pub struct Error {
    name: OsString,
    #[source]
    cause: Cause,
}

impl Error {
    pub(crate) fn new(name: impl Into<OsString>, cause: Cause) -> Self {
        Self {
            name: name.into(),
            cause,
        }
    }

    pub(crate) fn not_found(name: &OsStr) -> Self {
        Self::new(name, Cause::NotFound)
    }

    /// The name as passed by the caller.
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    pub fn into_cause(self) -> Cause {
        self.cause
    }

    /// True when nothing exists under the requested name: either the search
    /// list was exhausted, or a direct path failed `stat` with `ENOENT`.
    pub fn is_not_found(&self) -> bool {
        match &self.cause {
            Cause::NotFound => true,
            Cause::Io(err) => err.kind() == io::ErrorKind::NotFound,
            Cause::PermissionDenied(_) => false,
        }
    }

    /// True when the path exists but cannot be executed.
    pub fn is_permission_denied(&self) -> bool {
        match &self.cause {
            Cause::PermissionDenied(_) => true,
            Cause::Io(err) => err.kind() == io::ErrorKind::PermissionDenied,
            Cause::NotFound => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum Cause {
    #[error("executable file not found in $PATH")]
    NotFound,

    /// The path exists but is a directory or carries no execute bit.
    #[error("permission denied")]
    PermissionDenied(Denial),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why an existing path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Directory,
    NotExecutable,
}
