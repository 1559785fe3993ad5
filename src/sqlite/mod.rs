//! Minimal read-only SQLite 3 file-format reader.
//!
//! This module implements just enough of the SQLite file format to find a
//! table by name and walk its rows, working from a fully-buffered copy of
//! the database file. Nothing links against SQLite itself.
//!
//! # SQLite File Structure
//!
//! A database file is an array of fixed-size pages. Page 1 starts with the
//! 100-byte database header (magic string, page size, encoding, ...) and
//! then carries the first page of the `sqlite_master` schema table. Every
//! table is stored as a b-tree of pages:
//!
//! - Table leaf pages (type `0x0d`) hold cells of `(payload size varint,
//!   rowid varint, record payload)`.
//! - Table interior pages (type `0x05`) hold cells of `(child page u32,
//!   key varint)` plus a right-most child pointer in the page header.
//!
//! Record payloads are decoded via a serial-type header; see [`record`].
//!
//! Index b-trees, WAL/journal files, and overflow-page chains are not
//! handled: unknown page types yield no rows and over-long values come back
//! truncated at the inline payload limit.

pub mod btree;
pub mod db;
pub mod header;
pub mod record;
pub mod schema;
pub mod varint;

pub use db::Database;

use thiserror::Error;

/// Errors surfaced to callers of the reader.
///
/// Locally-recoverable damage (bad varints, truncated cells, out-of-range
/// pointers) never shows up here; those cells or rows are skipped and the
/// walk continues.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer does not begin with a SQLite 3 database header.
    #[error("not a valid SQLite 3 database")]
    NotSqlite,

    /// The master schema has no entry for the requested table.
    #[error("table '{name}' not found in schema")]
    TableNotFound { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
