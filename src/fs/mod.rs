//! File-system provider.
//!
//! The engine never touches `std::fs` directly; it goes through the
//! [`FileSystem`] trait so a test or an embedding shell can substitute its
//! own storage. [`OsFileSystem`] is the real-disk implementation used by
//! [`Splitter::split`].
//!
//! [`Splitter::split`]: crate::Splitter::split

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// The file-system operations the split engine consumes.
pub trait FileSystem {
    /// Returns true if `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing parents as directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Opens `path` for reading.
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    /// Creates `path` for writing, truncating any existing file.
    fn create_write(&self, path: &Path) -> io::Result<Box<dyn Write>>;
}

/// [`FileSystem`] backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(path)?))
    }

    fn create_write(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(File::create(path)?))
    }
}
