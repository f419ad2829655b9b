//! Synthetic yaffs2 image builder for integration tests.
#![allow(dead_code)]

pub const CHUNK: usize = 2048;
pub const SPARE: usize = 64;

pub const T_UNKNOWN: u32 = 0;
pub const T_FILE: u32 = 1;
pub const T_SYMLINK: u32 = 2;
pub const T_DIR: u32 = 3;
pub const T_HARDLINK: u32 = 4;
pub const T_SPECIAL: u32 = 5;

pub struct ImageBuilder {
    chunk: usize,
    spare: usize,
    buf: Vec<u8>,
    seq: u32,
}

#[derive(Default, Clone)]
pub struct Fields<'a> {
    pub mode: u32,
    pub file_size: i32,
    pub equivalent: u32,
    pub alias: &'a [u8],
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self::with_geometry(CHUNK, SPARE)
    }

    pub fn with_geometry(chunk: usize, spare: usize) -> Self {
        Self {
            chunk,
            spare,
            buf: Vec::new(),
            seq: 0x1000,
        }
    }

    pub fn raw_chunk(&mut self, data: &[u8], object_id: u32, chunk_id: u32, byte_count: u32) -> &mut Self {
        let mut d = vec![0xffu8; self.chunk];
        d[..data.len()].copy_from_slice(data);
        let mut s = vec![0xffu8; self.spare];
        s[0..4].copy_from_slice(&self.seq.to_le_bytes());
        s[4..8].copy_from_slice(&object_id.to_le_bytes());
        s[8..12].copy_from_slice(&chunk_id.to_le_bytes());
        s[12..16].copy_from_slice(&byte_count.to_le_bytes());
        self.buf.extend(d);
        self.buf.extend(s);
        self
    }

    pub fn header(&mut self, id: u32, parent: u32, name: &str, kind: u32, f: Fields<'_>) -> &mut Self {
        let mut h = vec![0u8; 512];
        h[0..4].copy_from_slice(&kind.to_le_bytes());
        h[4..8].copy_from_slice(&parent.to_le_bytes());
        h[10..10 + name.len()].copy_from_slice(name.as_bytes());
        h[268..272].copy_from_slice(&f.mode.to_le_bytes());
        h[292..296].copy_from_slice(&f.file_size.to_le_bytes());
        h[296..300].copy_from_slice(&f.equivalent.to_le_bytes());
        h[300..300 + f.alias.len()].copy_from_slice(f.alias);
        self.raw_chunk(&h, id, 0, 0xffff)
    }

    pub fn dir(&mut self, id: u32, parent: u32, name: &str) -> &mut Self {
        self.header(id, parent, name, T_DIR, Fields { mode: 0o40755, ..Default::default() })
    }

    /// Header plus ceil(len / chunk) data chunks; the last one declares only
    /// its valid bytes.
    pub fn file(&mut self, id: u32, parent: u32, name: &str, content: &[u8]) -> &mut Self {
        self.header(
            id,
            parent,
            name,
            T_FILE,
            Fields {
                mode: 0o100644,
                file_size: content.len() as i32,
                ..Default::default()
            },
        );
        for (i, part) in content.chunks(self.chunk).enumerate() {
            self.raw_chunk(part, id, i as u32 + 1, part.len() as u32);
        }
        self
    }

    pub fn symlink(&mut self, id: u32, parent: u32, name: &str, alias: &str) -> &mut Self {
        self.header(
            id,
            parent,
            name,
            T_SYMLINK,
            Fields {
                mode: 0o120777,
                alias: alias.as_bytes(),
                ..Default::default()
            },
        )
    }

    pub fn hardlink(&mut self, id: u32, parent: u32, name: &str, equivalent: u32) -> &mut Self {
        self.header(
            id,
            parent,
            name,
            T_HARDLINK,
            Fields {
                equivalent,
                ..Default::default()
            },
        )
    }

    /// A chunk whose tags do not carry the header sentinel.
    pub fn junk(&mut self) -> &mut Self {
        let data = vec![0x5au8; self.chunk];
        self.raw_chunk(&data, 0, 0, self.chunk as u32)
    }

    pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(b);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.buf.clone()
    }
}

/// Deterministic filler so content mismatches show up at any offset.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u32).wrapping_mul(31).wrapping_add(seed as u32) as u8)
        .collect()
}
