use std::io;
use std::path::{Path, PathBuf};

use record::{ParseError, MAX_RECORDS};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error("truncated file: expected {expected} bytes, found {actual}")]
    TruncatedFile { expected: u64, actual: u64 },
    #[error("bad magic: {0:#010x}")]
    BadMagic(u32),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u16),
    #[error("corrupt header: {0}")]
    CorruptHeader(&'static str),
    #[error("malformed input")]
    MalformedInput(#[from] ParseError),
    #[error("capacity exceeded: a store holds at most {} records", MAX_RECORDS)]
    CapacityExceeded,
}

impl StoreError {
    /// Maps path-level failures from opening `path` to their own variants.
    pub(crate) fn from_open(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(path.to_path_buf()),
            _ => StoreError::Io(err),
        }
    }
}
