use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use record::{Employee, Header, MAX_RECORDS};
use tracing::debug;

use crate::io::{read_all, validate, write_image};
use crate::StoreError;

/// A single EmpDB file, held open for the lifetime of the value.
///
/// # Write Path
///
/// 1. [`append`](Store::append) pushes a record into memory and bumps
///    `count` / `filesize`. Nothing touches the disk.
/// 2. [`flush`](Store::flush) rewrites the header and every record from
///    offset 0, then trims the file to the new `filesize`.
///
/// Flushing is **not** atomic: if it fails part-way the file may hold a
/// header that disagrees with the records behind it. There is no temp file
/// or journal, and nothing is rolled back.
///
/// # Read Path
///
/// [`open`](Store::open) validates the header and loads all `count` records,
/// so the in-memory sequence always has exactly `header().count` entries.
pub struct Store {
    file: File,
    path: PathBuf,
    header: Header,
    records: Vec<Employee>,

    /// If `true`, every flush is followed by `fsync`.
    pub sync: bool,
}

impl Store {
    /// Creates a new, empty store file at `path`.
    ///
    /// The file is created empty; the header is first written by
    /// [`flush`](Store::flush).
    ///
    /// # Errors
    ///
    /// [`AlreadyExists`](StoreError::AlreadyExists) if `path` exists, or
    /// [`Io`](StoreError::Io) for any other creation failure.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StoreError::from_open(e, &path))?;

        debug!(path = %path.display(), "created store");

        Ok(Self {
            file,
            path,
            header: Header::new(),
            records: Vec::new(),
            sync: false,
        })
    }

    /// Opens an existing store file, validating its header and loading every
    /// record.
    ///
    /// # Errors
    ///
    /// [`NotFound`](StoreError::NotFound) if `path` does not exist, any
    /// validation error from [`validate`], or
    /// [`TruncatedFile`](StoreError::TruncatedFile) if the records cannot be
    /// read in full.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| StoreError::from_open(e, &path))?;

        let header = validate(&mut file)?;
        let records = read_all(&mut file, &header)?;

        debug!(
            path = %path.display(),
            count = header.count,
            filesize = header.filesize,
            "opened store"
        );

        Ok(Self {
            file,
            path,
            header,
            records,
            sync: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory header. `filesize` reflects the last append or flush.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Re-reads the records from disk using the in-memory header.
    ///
    /// Records appended since the last flush are not on disk yet, so this
    /// fails with [`TruncatedFile`](StoreError::TruncatedFile) until the
    /// store is flushed.
    pub fn read_all(&mut self) -> Result<Vec<Employee>, StoreError> {
        read_all(&mut self.file, &self.header)
    }

    /// Appends a record in memory.
    ///
    /// # Errors
    ///
    /// [`CapacityExceeded`](StoreError::CapacityExceeded) if the store already
    /// holds [`MAX_RECORDS`] records. The store is left unchanged.
    pub fn append(&mut self, employee: Employee) -> Result<(), StoreError> {
        if self.header.count == MAX_RECORDS {
            return Err(StoreError::CapacityExceeded);
        }

        self.records.push(employee);
        self.header.count += 1;
        self.header.filesize = Header::expected_filesize(self.header.count);
        Ok(())
    }

    /// Parses a `name,address,hours` string and appends the result.
    ///
    /// # Errors
    ///
    /// [`MalformedInput`](StoreError::MalformedInput) if the string does not
    /// parse, plus everything [`append`](Store::append) returns. The store is
    /// left unchanged on error.
    pub fn append_str(&mut self, input: &str) -> Result<(), StoreError> {
        let employee = input.parse::<Employee>()?;
        self.append(employee)
    }

    /// Writes the header and all records back to the file.
    ///
    /// # Steps
    ///
    /// 1. Recompute `filesize` from `count`.
    /// 2. Seek to 0 and write the encoded header.
    /// 3. Write every record in order (none if the store is empty).
    /// 4. Truncate the file to `filesize`.
    /// 5. `fsync` if [`sync`](Store::sync) is set.
    ///
    /// Writes retry on `Interrupted`; any other failure or short write is
    /// returned as [`Io`](StoreError::Io) and leaves the file partially
    /// written.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.header.filesize = Header::expected_filesize(self.header.count);

        self.file.seek(SeekFrom::Start(0))?;
        write_image(&mut BufWriter::new(&mut self.file), &self.header, &self.records)?;

        self.file.set_len(u64::from(self.header.filesize))?;

        if self.sync {
            self.file.sync_all()?;
        }

        debug!(
            path = %self.path.display(),
            count = self.header.count,
            filesize = self.header.filesize,
            "flushed store"
        );

        Ok(())
    }

    /// Enumerates `(index, name, address)` for display.
    pub fn list(&self) -> impl Iterator<Item = (usize, Cow<'_, str>, Cow<'_, str>)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, e)| (i, e.name.to_str_lossy(), e.address.to_str_lossy()))
    }
}
