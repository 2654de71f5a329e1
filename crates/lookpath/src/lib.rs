//! Executable lookup along `PATH`.
//!
//! Resolves a program name the way a Unix shell does: a name containing `/`
//! is checked in place, anything else is tried in each `PATH` directory in
//! order. A candidate qualifies when it is not a directory and has at least
//! one execute bit set.
//!
//! Nothing is cached. Every call reads `PATH` and stats candidates afresh.
//!
//! # Example
//!
//! ```
//! use lookpath::{Finder, lookup};
//!
//! match lookup("sh") {
//!     Ok(path) => println!("sh is {}", path.display()),
//!     Err(err) if err.is_not_found() => println!("no sh on PATH"),
//!     Err(err) => println!("{err}"),
//! }
//!
//! let err = Finder::new()
//!     .with_search_path("")
//!     .find("sh")
//!     .unwrap_err();
//! assert!(err.is_not_found());
//! ```

#[cfg(not(unix))]
compile_error!("lookpath relies on Unix permission bits");

pub use error::{Cause, Denial, Error, Result};
pub use exec::{Metadata, Probe, check_executable};
pub use resolve::{Finder, Mode, lookup, lookup_all};
pub use search::{PATH_VAR, SearchList};

mod error;
mod exec;
mod resolve;
mod search;
