// unyaffs_core/src/sink.rs
use std::io::{self, Write};
use std::path::Path;

/// Filesystem primitives the reconstructor drives. Paths are object-table
/// paths (`./dir/name`); implementations decide where they land.
pub trait EntrySink {
    type File: Write;

    fn create_file(&mut self, path: &Path, mode: u32) -> io::Result<Self::File>;

    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// `target` is stored verbatim in the link.
    fn symlink(&mut self, target: &Path, link: &Path) -> io::Result<()>;

    /// Both paths are object-table paths.
    fn hard_link(&mut self, original: &Path, link: &Path) -> io::Result<()>;
}
