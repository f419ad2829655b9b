/// Packed tags sit at the start of the spare area.
pub const TAGS_LEN: usize = 16;

/// `byte_count` value written for object header chunks.
pub const HEADER_BYTE_COUNT: u32 = 0xffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedTags {
    pub sequence_number: u32,
    pub object_id: u32,
    pub chunk_id: u32,
    pub byte_count: u32,
}

#[inline]
fn le32(x: &[u8]) -> u32 {
    u32::from_le_bytes([x[0], x[1], x[2], x[3]])
}

impl PackedTags {
    /// Decode the tag block. `spare` must hold at least [`TAGS_LEN`] bytes.
    pub fn decode(spare: &[u8]) -> Self {
        // Layout: [0..4]=seq, [4..8]=obj_id, [8..12]=chunk_id, [12..16]=byte_count
        Self {
            sequence_number: le32(&spare[0..4]),
            object_id: le32(&spare[4..8]),
            chunk_id: le32(&spare[8..12]),
            byte_count: le32(&spare[12..16]),
        }
    }

    pub fn is_header(&self) -> bool {
        self.byte_count == HEADER_BYTE_COUNT
    }
}
