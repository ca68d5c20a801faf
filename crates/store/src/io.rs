//! File I/O helpers: header validation, bulk record loading and writing the
//! whole file image.
//!
//! Everything is generic over `Read`/`Write` (plus `Seek` where needed) so it
//! works on the store's `File` as well as on in-memory cursors.

use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};

use record::{Employee, Header, FORMAT_VERSION, HEADER_MAGIC, HEADER_SIZE, RECORD_SIZE};
use tracing::debug;

use crate::StoreError;

/// Reads until `buf` is full or EOF, retrying only on `Interrupted`.
///
/// Returns the number of bytes read; fewer than `buf.len()` means EOF.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;

    while total < buf.len() {
        match r.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(total)
}

/// Writes all of `buf`, retrying only on `Interrupted`.
///
/// A writer that accepts zero bytes fails with `WriteZero`.
pub(crate) fn write_full<W: Write>(w: &mut W, buf: &[u8]) -> io::Result<()> {
    let mut total = 0;

    while total < buf.len() {
        match w.write(&buf[total..]) {
            Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Writes the encoded header followed by every record, then flushes `w`.
///
/// The caller positions `w` at offset 0. With `count == 0` only the header is
/// written. Bytes already written before a failure stay written.
pub(crate) fn write_image<W: Write>(
    w: &mut W,
    header: &Header,
    records: &[Employee],
) -> Result<(), StoreError> {
    write_full(w, &header.encode())?;

    if header.count > 0 {
        for employee in records {
            write_full(w, &employee.encode())?;
        }
    }

    w.flush()?;
    Ok(())
}

/// Reads and checks the header at offset 0.
///
/// # Validation
///
/// Checks run in this order and the first failure is returned:
///
/// - Exactly [`HEADER_SIZE`] bytes must be readable, else
///   [`TruncatedFile`](StoreError::TruncatedFile).
/// - `magic` must equal [`HEADER_MAGIC`], else [`BadMagic`](StoreError::BadMagic).
/// - `version` must equal [`FORMAT_VERSION`], else
///   [`UnsupportedVersion`](StoreError::UnsupportedVersion).
/// - `filesize` must be at least `HEADER_SIZE`, must not exceed the real
///   length of the file, and must leave room for `count` records. An empty
///   store must declare exactly `HEADER_SIZE`. Any violation is
///   [`CorruptHeader`](StoreError::CorruptHeader).
pub fn validate<R: Read + Seek>(r: &mut R) -> Result<Header, StoreError> {
    let actual_len = r.seek(SeekFrom::End(0))?;
    r.seek(SeekFrom::Start(0))?;

    let mut buf = [0u8; HEADER_SIZE];
    let n = read_full(r, &mut buf)?;

    if n != HEADER_SIZE {
        return Err(StoreError::TruncatedFile {
            expected: HEADER_SIZE as u64,
            actual: n as u64,
        });
    }

    let header = Header::decode(&buf);

    if header.magic != HEADER_MAGIC {
        return Err(StoreError::BadMagic(header.magic));
    }

    if header.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(header.version));
    }

    let filesize = u64::from(header.filesize);

    if filesize < HEADER_SIZE as u64 {
        return Err(StoreError::CorruptHeader("filesize smaller than header"));
    }

    if filesize > actual_len {
        return Err(StoreError::CorruptHeader("filesize larger than actual file"));
    }

    if filesize - (HEADER_SIZE as u64) < header.payload_len() {
        return Err(StoreError::CorruptHeader("count larger than payload"));
    }

    if header.count == 0 && filesize != HEADER_SIZE as u64 {
        return Err(StoreError::CorruptHeader("empty store with trailing payload"));
    }

    debug!(
        count = header.count,
        filesize = header.filesize,
        actual_len,
        "validated header"
    );

    Ok(header)
}

/// Reads the `header.count` records that follow the header.
///
/// Always seeks to [`HEADER_SIZE`] first, so calling it again yields the same
/// records unless the file changed in between. Fewer bytes than the count
/// requires is [`TruncatedFile`](StoreError::TruncatedFile), never a partial
/// result.
pub fn read_all<R: Read + Seek>(r: &mut R, header: &Header) -> Result<Vec<Employee>, StoreError> {
    r.seek(SeekFrom::Start(HEADER_SIZE as u64))?;

    let mut rdr = BufReader::new(r);
    let mut records = Vec::with_capacity(usize::from(header.count));
    let mut buf = [0u8; RECORD_SIZE];

    for i in 0..usize::from(header.count) {
        let n = read_full(&mut rdr, &mut buf)?;

        if n != RECORD_SIZE {
            return Err(StoreError::TruncatedFile {
                expected: header.payload_len(),
                actual: (i * RECORD_SIZE + n) as u64,
            });
        }

        records.push(Employee::decode(&buf));
    }

    Ok(records)
}
