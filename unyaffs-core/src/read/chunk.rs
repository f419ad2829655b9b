use crate::container::tags::PackedTags;
use crate::error::{Result, YaffsError};
use std::io::{ErrorKind, Read};

/// Value of erased NAND; the buffer is reset to it before every read.
pub const ERASED: u8 = 0xff;

/// One data region plus its spare region, borrowed from the reader's buffer.
pub struct Chunk<'a> {
    /// 1-based position of the chunk in the image
    pub index: u64,
    pub data: &'a [u8],
    pub spare: &'a [u8],
}

impl Chunk<'_> {
    pub fn tags(&self) -> PackedTags {
        PackedTags::decode(self.spare)
    }
}

pub struct ChunkReader<R> {
    inner: R,
    buf: Vec<u8>,
    chunk_size: usize,
    chunks: u64,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R, chunk_size: usize, spare_size: usize) -> Self {
        Self {
            inner,
            buf: vec![ERASED; chunk_size + spare_size],
            chunk_size,
            chunks: 0,
        }
    }

    /// Chunks read so far, including a final short or empty read.
    pub fn chunks_read(&self) -> u64 {
        self.chunks
    }

    /// Next full record, or `None` on a clean end of image.
    /// A record cut short by the end of the image is `BrokenImage`.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk<'_>>> {
        self.chunks += 1;
        self.buf.fill(ERASED);

        let want = self.buf.len();
        let mut got = 0usize;
        while got < want {
            match self.inner.read(&mut self.buf[got..]) {
                Ok(0) => break,
                Ok(n) => got += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if got == 0 {
            return Ok(None);
        }
        if got < want {
            return Err(YaffsError::BrokenImage {
                chunk: self.chunks,
                got,
                expected: want,
            });
        }

        let (data, spare) = self.buf.split_at(self.chunk_size);
        Ok(Some(Chunk {
            index: self.chunks,
            data,
            spare,
        }))
    }
}
