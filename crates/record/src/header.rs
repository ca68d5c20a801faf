use crate::format::{
    COUNT_OFFSET, FILESIZE_OFFSET, FORMAT_VERSION, HEADER_MAGIC, HEADER_SIZE, MAGIC_OFFSET,
    RECORD_SIZE, VERSION_OFFSET,
};

/// The fixed-size metadata block at offset 0 of every EmpDB file.
///
/// Fields are held in host order. [`encode`](Header::encode) and
/// [`decode`](Header::decode) convert to and from wire order; neither
/// performs any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Format identifier, [`HEADER_MAGIC`] for well-formed files.
    pub magic: u32,
    /// Format version, [`FORMAT_VERSION`] for well-formed files.
    pub version: u16,
    /// Number of employee records following the header.
    pub count: u16,
    /// Total file length in bytes (header + records).
    pub filesize: u32,
}

impl Header {
    /// Header of an empty, freshly created file.
    pub fn new() -> Self {
        Self {
            magic: HEADER_MAGIC,
            version: FORMAT_VERSION,
            count: 0,
            filesize: Self::expected_filesize(0),
        }
    }

    /// File length implied by `count` records: `HEADER_SIZE + count * RECORD_SIZE`.
    pub fn expected_filesize(count: u16) -> u32 {
        // Cannot overflow, see the static assertion in `format`.
        HEADER_SIZE as u32 + u32::from(count) * RECORD_SIZE as u32
    }

    /// Number of record bytes `count` declares.
    pub fn payload_len(&self) -> u64 {
        u64::from(self.count) * RECORD_SIZE as u64
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        codec::put_u32(&mut buf, MAGIC_OFFSET, self.magic);
        codec::put_u16(&mut buf, VERSION_OFFSET, self.version);
        codec::put_u16(&mut buf, COUNT_OFFSET, self.count);
        codec::put_u32(&mut buf, FILESIZE_OFFSET, self.filesize);
        buf
    }

    pub fn decode(buf: &[u8; HEADER_SIZE]) -> Self {
        Self {
            magic: codec::get_u32(buf, MAGIC_OFFSET),
            version: codec::get_u16(buf, VERSION_OFFSET),
            count: codec::get_u16(buf, COUNT_OFFSET),
            filesize: codec::get_u32(buf, FILESIZE_OFFSET),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
