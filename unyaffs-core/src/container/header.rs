use std::borrow::Cow;

use crate::util::cstr::until_nul;

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_ALIAS_LEN: usize = 159;

/// Bytes of the object header record that carry fields we decode.
pub const HEADER_LEN: usize = 464;

const NAME_OFF: usize = 10;
const MODE_OFF: usize = 268;
const ALIAS_OFF: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Unknown,
    File,
    Symlink,
    Directory,
    Hardlink,
    Special,
}

impl ObjectType {
    pub fn from_raw(v: u32) -> Self {
        match v {
            1 => ObjectType::File,
            2 => ObjectType::Symlink,
            3 => ObjectType::Directory,
            4 => ObjectType::Hardlink,
            5 => ObjectType::Special,
            _ => ObjectType::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    pub raw_type: u32,
    pub parent_object_id: u32,
    pub name: Vec<u8>,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub mtime: u32,
    pub file_size: u64,
    pub equivalent_object_id: u32,
    pub alias: Vec<u8>,
}

#[inline]
fn le32(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

impl ObjectHeader {
    /// Decode the header record from a chunk's data region.
    /// `data` must hold at least [`HEADER_LEN`] bytes.
    pub fn decode(data: &[u8]) -> Self {
        let raw_type = le32(data, 0);
        let name = until_nul(&data[NAME_OFF..NAME_OFF + MAX_NAME_LEN + 1]).to_vec();
        let alias = until_nul(&data[ALIAS_OFF..ALIAS_OFF + MAX_ALIAS_LEN + 1]).to_vec();
        // file_size is a signed field; a negative size means nothing to read
        let file_size = (le32(data, 292) as i32).max(0) as u64;
        Self {
            object_type: ObjectType::from_raw(raw_type),
            raw_type,
            parent_object_id: le32(data, 4),
            name,
            mode: le32(data, MODE_OFF),
            uid: le32(data, MODE_OFF + 4),
            gid: le32(data, MODE_OFF + 8),
            mtime: le32(data, MODE_OFF + 16),
            file_size,
            equivalent_object_id: le32(data, 296),
            alias,
        }
    }

    /// Name for diagnostics.
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}
