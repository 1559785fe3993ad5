//! Cookie extraction from a Firefox `cookies.sqlite` image.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::sqlite::record::Value;
use crate::sqlite::{btree, schema, Database, Error, Result};

/// The table Firefox stores cookies in.
pub const COOKIE_TABLE: &str = "moz_cookies";

// moz_cookies column order: id(0), baseDomain(1), originAttributes(2),
// name(3), value(4), host(5), ...
const COL_NAME: usize = 3;
const COL_VALUE: usize = 4;
const COL_HOST: usize = 5;

/// Extracts cookies whose host column contains `domain` from a parsed
/// database.
///
/// Duplicate cookie names keep the last row visited. An empty map means the
/// cookie table was present but no row matched the domain; a database
/// without the table at all (not a Firefox cookie store) is an error.
pub fn cookies_for_domain(db: &Database, domain: &str) -> Result<HashMap<String, String>> {
    let root = schema::find_table_root(db, COOKIE_TABLE).ok_or_else(|| Error::TableNotFound {
        name: COOKIE_TABLE.to_string(),
    })?;

    let mut cookies = HashMap::new();
    btree::walk_table(db, root, &mut |row: &[Value]| {
        if row.len() <= COL_HOST {
            return;
        }
        let Some(host) = row[COL_HOST].as_text() else {
            return;
        };
        if !host.contains(domain) {
            return;
        }
        match (row[COL_NAME].as_text(), row[COL_VALUE].as_text()) {
            (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
                debug!("cookie '{}' for host {}", name, host);
                cookies.insert(name.to_string(), value.to_string());
            }
            _ => {}
        }
    });

    info!("found {} cookies matching '{}'", cookies.len(), domain);
    Ok(cookies)
}

/// One-shot convenience: read a database file and extract cookies for
/// `domain`.
///
/// The file is buffered in full before any decoding. Copying a live,
/// browser-locked database aside is the caller's job; pass the copy's path.
pub fn read_cookies(path: impl AsRef<Path>, domain: &str) -> Result<HashMap<String, String>> {
    let db = Database::open(path)?;
    cookies_for_domain(&db, domain)
}
