//! The executability check.

use crate::error::{Cause, Denial};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

const EXEC_BITS: u32 = 0o111;

/// Decides whether a candidate path may be run.
///
/// [`Metadata`] asks the filesystem. Other implementations exist for tests
/// and for callers that want to observe which candidates get probed.
pub trait Probe {
    fn probe(&self, path: &Path) -> Result<(), Cause>;
}

impl<F> Probe for F
where
    F: Fn(&Path) -> Result<(), Cause>,
{
    fn probe(&self, path: &Path) -> Result<(), Cause> {
        self(path)
    }
}

/// Probe backed by `stat(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Metadata;

impl Probe for Metadata {
    fn probe(&self, path: &Path) -> Result<(), Cause> {
        check_executable(path)
    }
}

/// Succeeds for a non-directory with any of the owner, group or other
/// execute bits set. Symlinks are followed.
pub fn check_executable(path: impl AsRef<Path>) -> Result<(), Cause> {
    let meta = fs::metadata(path.as_ref())?;
    if meta.is_dir() {
        return Err(Cause::PermissionDenied(Denial::Directory));
    }
    if meta.permissions().mode() & EXEC_BITS == 0 {
        return Err(Cause::PermissionDenied(Denial::NotExecutable));
    }
    Ok(())
}
