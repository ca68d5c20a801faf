//! # Store
//!
//! File-backed engine for EmpDB files.
//!
//! A [`Store`] exclusively owns one open file plus its in-memory header and
//! record sequence. The file is read once on [`Store::open`] (after
//! [`validate`] has checked every header invariant), mutated only in memory
//! by [`Store::append`], and rewritten in full by [`Store::flush`].
//!
//! ## Example
//! ```rust,no_run
//! use store::Store;
//!
//! # fn main() -> Result<(), store::StoreError> {
//! let mut db = Store::create("employees.db")?;
//! db.append_str("Alice,123 Main St,40")?;
//! db.flush()?;
//!
//! let db = Store::open("employees.db")?;
//! for (i, name, address) in db.list() {
//!     println!("{i}: {name} ({address})");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! All I/O is blocking and single-threaded. There is no file locking; two
//! processes writing the same file is unsupported.

mod error;
mod io;
mod store;

pub use error::StoreError;
pub use io::{read_all, validate};
pub use store::Store;
