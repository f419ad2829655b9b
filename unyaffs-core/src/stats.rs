#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub chunks: u64,
    pub files: u64,
    pub dirs: u64,
    pub symlinks: u64,
    pub hardlinks: u64,
    /// Special and unknown objects: registered, nothing created
    pub specials: u64,
    pub file_bytes: u64,
    pub warnings: u32,
}

impl ExtractStats {
    /// Entries created on disk.
    pub fn entries(&self) -> u64 {
        self.files + self.dirs + self.symlinks + self.hardlinks
    }
}
