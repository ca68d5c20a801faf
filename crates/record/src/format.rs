//! EmpDB binary format constants.
//!
//! ```text
//! header:  magic(u32) | version(u16) | count(u16) | filesize(u32)
//! record:  name([u8; 256]) | address([u8; 256]) | hours(u32)
//! ```
//!
//! All integers are big-endian. The size constants are the only values used
//! to size buffers and file regions anywhere in the workspace.

/// Magic number identifying EmpDB files (ASCII "LLAD").
pub const HEADER_MAGIC: u32 = 0x4c4c_4144;

/// The only supported format version.
pub const FORMAT_VERSION: u16 = 1;

pub const MAGIC_OFFSET: usize = 0;
pub const VERSION_OFFSET: usize = MAGIC_OFFSET + 4;
pub const COUNT_OFFSET: usize = VERSION_OFFSET + 2;
pub const FILESIZE_OFFSET: usize = COUNT_OFFSET + 2;

/// Size of the header in bytes: 4 (`magic`) + 2 (`version`) + 2 (`count`) + 4 (`filesize`).
pub const HEADER_SIZE: usize = FILESIZE_OFFSET + 4;

/// Width of the NUL-padded `name` field.
pub const NAME_LEN: usize = 256;

/// Width of the NUL-padded `address` field.
pub const ADDRESS_LEN: usize = 256;

pub const NAME_OFFSET: usize = 0;
pub const ADDRESS_OFFSET: usize = NAME_OFFSET + NAME_LEN;
pub const HOURS_OFFSET: usize = ADDRESS_OFFSET + ADDRESS_LEN;

/// Size of one employee record in bytes.
pub const RECORD_SIZE: usize = HOURS_OFFSET + 4;

/// Largest record count the 2-byte `count` field can hold.
pub const MAX_RECORDS: u16 = u16::MAX;

const _: () = assert!(HEADER_SIZE == 12);
const _: () = assert!(RECORD_SIZE == NAME_LEN + ADDRESS_LEN + 4);
// A full file must still be describable by the 4-byte `filesize` field.
const _: () =
    assert!(HEADER_SIZE as u64 + MAX_RECORDS as u64 * RECORD_SIZE as u64 <= u32::MAX as u64);
