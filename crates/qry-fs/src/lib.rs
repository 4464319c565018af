//! Filesystem abstraction used by the resource consolidation pipeline.
//!
//! Every entry point of the pipeline takes a [`FileSystem`] handle instead of
//! touching the OS directly, so the same code runs against the real disk
//! ([`NativeFileSystem`]) or against a fully deterministic in-memory tree
//! ([`MemoryFileSystem`]) in tests.
//!
//! Paths are plain strings, not [`std::path::Path`]: the pipeline must treat
//! `C:\a\b.png` and `C:/a/b.png` as the same key on every host, and `Path`
//! semantics are host-dependent. [`normalize_separator`] is applied to every
//! path before it is compared or stored.

use thiserror::Error;

mod memory;
mod native;
mod path;

pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use path::{
    dir_name_from, file_name_from, is_absolute, lexically_clean, make_absolute, make_relative,
    normalize_separator,
};

/// Error returned by filesystem operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO failure on a given path.
    #[error("IO on '{0}' failed with {1}")]
    Io(String, #[source] std::io::Error),
    /// The file does not exist.
    #[error("file '{0}' not found")]
    NotFound(String),
    /// The path does not denote a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(String),
}

/// Contract over OS file operations.
///
/// Effectful operations return `Result` and never panic; pure path
/// decomposition is shared by all implementations as provided methods so the
/// native and mock filesystems cannot disagree on path algebra.
pub trait FileSystem {
    /// Returns true if a file exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Returns true if a directory exists at `path`.
    fn dir_exists(&self, path: &str) -> bool;

    /// Recursively creates every missing segment of `path`. Succeeds if the
    /// directory already exists.
    fn mk_dir(&self, path: &str) -> Result<(), Error>;

    /// Deletes the direct file entries of `path`, leaving subdirectories and
    /// their content untouched.
    fn clear_dir(&self, path: &str) -> Result<(), Error>;

    /// Copies `src` to `dst`, overwriting `dst` if present. Copying a file
    /// onto itself is a successful no-op.
    fn copy_file(&self, src: &str, dst: &str) -> Result<(), Error>;

    /// Recursively copies the tree under `src` into `dst`, skipping files
    /// already present at destination.
    fn copy_dir(&self, src: &str, dst: &str) -> Result<(), Error>;

    /// Reads the whole file as a string.
    fn read_file(&self, path: &str) -> Result<String, Error>;

    /// Writes `content` as the whole file, creating it if needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), Error>;

    /// Lists the direct file entries of `path`. When `extension` is non-empty
    /// only files whose name ends with it (case-insensitive) are returned.
    fn read_dir(&self, path: &str, extension: &str) -> Result<Vec<String>, Error>;

    /// Basename of `path`, extension included.
    fn file_name_from(&self, path: &str) -> String {
        path::file_name_from(path)
    }

    /// Containing directory of `path`.
    fn dir_name_from(&self, path: &str) -> String {
        path::dir_name_from(path)
    }

    /// Returns true for rooted paths (`/...`, `C:/...`, `\\server\...`).
    fn is_absolute(&self, path: &str) -> bool {
        path::is_absolute(path)
    }

    /// Resolves `path` against `base_dir`. `None` when it cannot be made
    /// absolute (relative base).
    fn make_absolute(&self, path: &str, base_dir: &str) -> Option<String> {
        path::make_absolute(path, base_dir)
    }

    /// Expresses `path` relative to `base_dir`. `None` when the path does not
    /// live under the base directory (different root, sibling tree).
    fn make_relative(&self, path: &str, base_dir: &str) -> Option<String> {
        path::make_relative(path, base_dir)
    }
}
