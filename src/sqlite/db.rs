//! In-memory database image and page addressing.

use std::path::Path;

use tracing::info;

use super::header::DatabaseHeader;
use super::Result;

/// A fully-buffered SQLite database file.
///
/// The image owns every byte of the file; pages and records are borrowed
/// slices into it, addressed by 1-based page number, and never outlive a
/// single decode call. There is no page cache and no I/O after
/// construction.
pub struct Database {
    data: Vec<u8>,
    header: DatabaseHeader,
}

impl Database {
    /// Reads and parses a database file.
    ///
    /// The file is read in full. If the owning browser still holds the live
    /// database locked, the caller copies it aside first and passes the
    /// copy's path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Parses a database from raw file bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let header = DatabaseHeader::parse(&data)?;
        info!(
            "opened database: page size {}, {} pages",
            header.page_size, header.page_count
        );
        Ok(Self { data, header })
    }

    /// The parsed file header.
    pub fn header(&self) -> &DatabaseHeader {
        &self.header
    }

    /// Page size in bytes.
    pub fn page_size(&self) -> usize {
        self.header.page_size as usize
    }

    /// Borrows page `n` (1-based).
    ///
    /// `None` when the page would start or end beyond the file buffer, so a
    /// corrupt page number can never fault.
    pub fn page(&self, n: u32) -> Option<&[u8]> {
        let size = self.page_size();
        let offset = (n as usize).checked_sub(1)?.checked_mul(size)?;
        self.data.get(offset..offset.checked_add(size)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(pages: u32, page_size: u16) -> Vec<u8> {
        let mut data = vec![0u8; pages as usize * page_size as usize];
        data[0..16].copy_from_slice(b"SQLite format 3\0");
        data[16..18].copy_from_slice(&page_size.to_be_bytes());
        data
    }

    #[test]
    fn addresses_pages_by_number() {
        let db = Database::from_bytes(image(3, 512)).unwrap();
        assert_eq!(db.page_size(), 512);
        assert_eq!(db.page(1).unwrap().len(), 512);
        assert_eq!(db.page(3).unwrap().len(), 512);
        assert!(db.page(0).is_none());
        assert!(db.page(4).is_none());
    }

    #[test]
    fn partial_trailing_page_is_out_of_range() {
        let mut data = image(2, 512);
        data.truncate(700);
        let db = Database::from_bytes(data).unwrap();
        assert!(db.page(1).is_some());
        assert!(db.page(2).is_none());
    }

    #[test]
    fn rejects_non_sqlite_bytes() {
        assert!(Database::from_bytes(b"PK\x03\x04 not a database".to_vec()).is_err());
    }
}
