use clap::Parser;
use std::path::PathBuf;
use unyaffs_core::read::extract::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_OBJECTS, DEFAULT_MAX_WARNINGS, DEFAULT_SPARE_SIZE,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Extract files from a yaffs2 image into the current directory",
    long_about = None
)]
pub struct Cli {
    /// yaffs2 image file
    pub image: PathBuf,

    /// Data bytes per chunk (NAND page size)
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Spare (OOB) bytes per chunk
    #[arg(long, default_value_t = DEFAULT_SPARE_SIZE)]
    pub spare_size: usize,

    /// Object ids must be below this bound
    #[arg(long, default_value_t = DEFAULT_MAX_OBJECTS)]
    pub max_objects: u32,

    /// Invalid header chunks tolerated before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_WARNINGS)]
    pub max_warnings: u32,
}
