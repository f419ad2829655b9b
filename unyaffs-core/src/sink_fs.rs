use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::sink::EntrySink;

/// Writes entries below `root` on the host filesystem. Object names are not
/// sanitized, so a `..` name in the image lands outside `root`.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl EntrySink for FsSink {
    type File = File;

    fn create_file(&mut self, path: &Path, mode: u32) -> io::Result<File> {
        let mut oo = OpenOptions::new();
        oo.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            oo.mode(mode & 0o7777);
        }
        #[cfg(not(unix))]
        let _ = mode;
        oo.open(self.resolve(path))
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        let full = self.resolve(path);
        let mut b = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            b.mode(0o777);
        }
        match b.create(&full) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && full.is_dir() => {
                tracing::debug!("directory {} already exists", full.display());
                Ok(())
            }
            r => r,
        }
    }

    fn symlink(&mut self, target: &Path, link: &Path) -> io::Result<()> {
        let link = self.resolve(link);
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(target, link)
        }
        #[cfg(not(unix))]
        {
            let _ = (target, link);
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "symlinks are not supported on this platform",
            ))
        }
    }

    fn hard_link(&mut self, original: &Path, link: &Path) -> io::Result<()> {
        fs::hard_link(self.resolve(original), self.resolve(link))
    }
}
