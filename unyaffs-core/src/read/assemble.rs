use std::io::{Read, Write};
use std::path::Path;

use super::chunk::{Chunk, ChunkReader};
use crate::error::{Result, YaffsError};

/// Rebuilds one file from the continuation chunks that follow its header.
pub struct FileAssembler<W: Write> {
    out: W,
    remaining: u64,
    written: u64,
}

impl<W: Write> FileAssembler<W> {
    pub fn new(out: W, file_size: u64) -> Self {
        Self {
            out,
            remaining: file_size,
            written: 0,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Writes the valid payload of one chunk. The tag's byte count decides how
    /// much of the data region is payload, capped by what is still owed and by
    /// the region itself.
    pub fn feed(&mut self, chunk: &Chunk<'_>) -> Result<usize> {
        let declared = chunk.tags().byte_count as u64;
        let n = self
            .remaining
            .min(declared)
            .min(chunk.data.len() as u64) as usize;
        self.out.write_all(&chunk.data[..n])?;
        self.remaining -= n as u64;
        self.written += n as u64;
        Ok(n)
    }

    /// Pulls chunks until the declared size is written, then flushes.
    /// Running out of image first fails the whole extraction.
    pub fn run<R: Read>(mut self, reader: &mut ChunkReader<R>, owner: u32, path: &Path) -> Result<u64> {
        while self.remaining > 0 {
            let Some(chunk) = reader.next_chunk()? else {
                return Err(YaffsError::UnexpectedEnd {
                    path: path.to_path_buf(),
                    remaining: self.remaining,
                });
            };
            let tags = chunk.tags();
            if tags.is_header() {
                return Err(YaffsError::UnexpectedHeader {
                    chunk: chunk.index,
                    path: path.to_path_buf(),
                });
            }
            if tags.object_id != owner {
                tracing::warn!(
                    "chunk #{} belongs to object {}, expected {} ({})",
                    chunk.index,
                    tags.object_id,
                    owner,
                    path.display()
                );
            }
            self.feed(&chunk)?;
        }
        self.out.flush()?;
        Ok(self.written)
    }
}
