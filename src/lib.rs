pub mod cookies;
pub mod sqlite;

pub use cookies::{cookies_for_domain, read_cookies};
pub use sqlite::{Database, Error, Result};
