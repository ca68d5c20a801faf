//! # Record
//!
//! On-disk layout of an EmpDB file: a fixed 12-byte [`Header`] followed by
//! `count` fixed 516-byte [`Employee`] records.
//!
//! ## File layout (v1)
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ HEADER (12 bytes)                                │
//! │                                                  │
//! │ magic (u32) "LLAD" | version (u16) = 1           │
//! │ count (u16)        | filesize (u32)              │
//! ├──────────────────────────────────────────────────┤
//! │ RECORDS (count × 516 bytes)                      │
//! │                                                  │
//! │ name ([u8; 256]) | address ([u8; 256])           │
//! │ hours (u32)                                      │
//! │                                                  │
//! │ ... repeated `count` times ...                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! All integers are big-endian and converted through the [`codec`] crate.
//! Text fields are NUL-padded and truncated to width, see [`FixedStr`].
//!
//! This crate only encodes and decodes. Validating a header against the
//! file it came from is the store's job.

mod employee;
mod format;
mod header;
mod text;

pub use employee::{Employee, ParseError};
pub use format::{
    ADDRESS_LEN, FORMAT_VERSION, HEADER_MAGIC, HEADER_SIZE, MAX_RECORDS, NAME_LEN, RECORD_SIZE,
};
pub use header::Header;
pub use text::FixedStr;
