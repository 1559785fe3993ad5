//! Master schema table lookups.
//!
//! `sqlite_master` always roots at page 1 and has five columns:
//! type(0), name(1), tbl_name(2), rootpage(3), sql(4).

use tracing::info;

use super::btree::walk_table;
use super::db::Database;
use super::record::Value;

/// The master schema table's fixed root page.
const SCHEMA_ROOT: u32 = 1;

/// Finds the root page of table `name` by scanning the master schema.
///
/// `None` when the schema has no such table; the last matching row wins if
/// the schema somehow lists the name twice.
pub fn find_table_root(db: &Database, name: &str) -> Option<u32> {
    let mut root = None;
    walk_table(db, SCHEMA_ROOT, &mut |row: &[Value]| {
        if row.len() >= 4
            && row[0].as_text() == Some("table")
            && row[1].as_text() == Some(name)
        {
            match row[3].as_integer() {
                Some(page) if page > 0 => root = u32::try_from(page).ok(),
                _ => {}
            }
        }
    });
    match root {
        Some(page) => info!("table '{}' rooted at page {}", name, page),
        None => info!("table '{}' not present in schema", name),
    }
    root
}

/// Lists user tables recorded in the master schema, in visit order,
/// skipping SQLite's internal `sqlite_*` entries.
pub fn user_tables(db: &Database) -> Vec<String> {
    let mut tables = Vec::new();
    walk_table(db, SCHEMA_ROOT, &mut |row: &[Value]| {
        if row.len() >= 2 && row[0].as_text() == Some("table") {
            if let Some(name) = row[1].as_text() {
                if !name.starts_with("sqlite_") {
                    tables.push(name.to_string());
                }
            }
        }
    });
    tables
}
