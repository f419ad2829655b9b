use crate::container::header::{HEADER_LEN, ObjectHeader};
use crate::container::tags::TAGS_LEN;
use crate::error::{Result, YaffsError};
use crate::read::chunk::ChunkReader;
use crate::read::reconstruct::ObjectReconstructor;
use crate::sink::EntrySink;
use crate::sink_fs::FsSink;
use crate::stats::ExtractStats;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 2048;
pub const DEFAULT_SPARE_SIZE: usize = 64;
pub const DEFAULT_MAX_OBJECTS: u32 = 10000;
pub const DEFAULT_MAX_WARNINGS: u32 = 20;

pub const MAX_CHUNK_SIZE: usize = 64 * 1024;
pub const MAX_SPARE_SIZE: usize = 4096;
/// yaffs2 packs object ids into 18 bits
pub const MAX_OBJECTS_LIMIT: u32 = 1 << 18;

#[derive(Clone, Debug)]
pub struct ExtractOptions {
    /// Data bytes per chunk (NAND page size)
    pub chunk_size: usize,
    /// Spare (OOB) bytes per chunk
    pub spare_size: usize,
    /// Object ids must be below this bound
    pub max_objects: u32,
    /// Invalid header chunks tolerated before giving up
    pub max_warnings: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            spare_size: DEFAULT_SPARE_SIZE,
            max_objects: DEFAULT_MAX_OBJECTS,
            max_warnings: DEFAULT_MAX_WARNINGS,
        }
    }
}

impl ExtractOptions {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size < HEADER_LEN {
            return Err(YaffsError::InvalidOptions(format!(
                "chunk size {} is smaller than an object header ({HEADER_LEN} bytes)",
                self.chunk_size
            )));
        }
        if self.spare_size < TAGS_LEN {
            return Err(YaffsError::InvalidOptions(format!(
                "spare size {} cannot hold packed tags ({TAGS_LEN} bytes)",
                self.spare_size
            )));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(YaffsError::InvalidOptions(format!(
                "chunk size {} exceeds {MAX_CHUNK_SIZE} bytes",
                self.chunk_size
            )));
        }
        if self.spare_size > MAX_SPARE_SIZE {
            return Err(YaffsError::InvalidOptions(format!(
                "spare size {} exceeds {MAX_SPARE_SIZE} bytes",
                self.spare_size
            )));
        }
        if self.chunk_size.checked_add(self.spare_size).is_none() {
            return Err(YaffsError::InvalidOptions("record length overflows".into()));
        }
        if self.max_objects == 0 {
            return Err(YaffsError::InvalidOptions("max objects must be > 0".into()));
        }
        if self.max_objects > MAX_OBJECTS_LIMIT {
            return Err(YaffsError::InvalidOptions(format!(
                "max objects {} exceeds {MAX_OBJECTS_LIMIT}",
                self.max_objects
            )));
        }
        if self.max_warnings == 0 {
            return Err(YaffsError::InvalidOptions("max warnings must be > 0".into()));
        }
        Ok(())
    }
}

/// Extract the image at `image` into `dest`.
pub fn extract(image: &Path, dest: &Path, opts: Option<&ExtractOptions>) -> Result<ExtractStats> {
    let f = File::open(image)?;
    extract_from(BufReader::new(f), FsSink::new(dest), opts)
}

/// Run the chunk loop over any image stream and entry sink.
///
/// Stops cleanly at the end of the image. Entries created before a fatal error
/// are left in place.
pub fn extract_from<R: Read, S: EntrySink>(
    image: R,
    sink: S,
    opts: Option<&ExtractOptions>,
) -> Result<ExtractStats> {
    let defaults = ExtractOptions::default();
    let opts = opts.unwrap_or(&defaults);
    opts.validate()?;

    let mut reader = ChunkReader::new(image, opts.chunk_size, opts.spare_size);
    let mut objects = ObjectReconstructor::new(sink, opts.max_objects);
    let mut warnings = 0u32;

    loop {
        let Some(chunk) = reader.next_chunk()? else {
            break;
        };
        let tags = chunk.tags();
        if !tags.is_header() {
            tracing::warn!("invalid header at chunk #{}, skipping", chunk.index);
            warnings += 1;
            if warnings >= opts.max_warnings {
                return Err(YaffsError::TooManyWarnings { warnings });
            }
            continue;
        }
        let header = ObjectHeader::decode(chunk.data);
        objects.apply(&tags, &header, &mut reader)?;
    }

    let (_, mut stats) = objects.into_parts();
    stats.chunks = reader.chunks_read();
    stats.warnings = warnings;
    tracing::info!(
        "extracted {} entries ({} files, {} dirs, {} symlinks, {} hardlinks), {} bytes, {} warnings",
        stats.entries(),
        stats.files,
        stats.dirs,
        stats.symlinks,
        stats.hardlinks,
        stats.file_bytes,
        stats.warnings
    );
    Ok(stats)
}
