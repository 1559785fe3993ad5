//! SQLite database header parsing (the first 100 bytes of the file).
//!
//! Only the fields this reader consumes are retained:
//!
//! - Bytes 0-15: Header string "SQLite format 3\0"
//! - Bytes 16-17: Page size in bytes (big-endian; the value 1 means 65536)
//! - Bytes 24-27: File change counter
//! - Bytes 28-31: Size of database file in pages
//! - Bytes 56-59: Database text encoding (1:UTF-8, 2:UTF-16le, 3:UTF-16be)

use tracing::debug;

use super::{Error, Result};

/// Parsed database header fields.
#[derive(Debug, Clone)]
pub struct DatabaseHeader {
    /// Page size in bytes, with the 65536 sentinel already applied.
    pub page_size: u32,
    /// File change counter (bytes 24-27).
    pub file_change_counter: u32,
    /// Size of the database file in pages (bytes 28-31).
    pub page_count: u32,
    /// Database text encoding (bytes 56-59).
    pub text_encoding: u32,
}

impl DatabaseHeader {
    /// Size of the database header in bytes.
    pub const SIZE: usize = 100;

    /// Magic string at the start of every SQLite 3 file.
    const MAGIC: &'static [u8] = b"SQLite format 3\0";

    /// Parses the header from the start of a file image.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE || &bytes[0..16] != Self::MAGIC {
            return Err(Error::NotSqlite);
        }

        let raw_page_size = u16::from_be_bytes([bytes[16], bytes[17]]);
        // A stored page size of 1 means 65536, which does not fit in 16 bits.
        let page_size = if raw_page_size == 1 {
            65_536
        } else {
            u32::from(raw_page_size)
        };

        let header = DatabaseHeader {
            page_size,
            file_change_counter: u32::from_be_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            page_count: u32::from_be_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]),
            text_encoding: u32::from_be_bytes([bytes[56], bytes[57], bytes[58], bytes[59]]),
        };
        debug!("parsed database header: {:?}", header);
        Ok(header)
    }

    /// Human-readable name of the text encoding.
    pub fn encoding_name(&self) -> &'static str {
        match self.text_encoding {
            1 => "utf-8",
            2 => "utf-16le",
            3 => "utf-16be",
            _ => "unknown",
        }
    }
}
