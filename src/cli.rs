use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read-only SQLite reader for Firefox cookie stores.
#[derive(Debug, Parser)]
#[command(name = "mozcookie", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print basic information from the database header.
    Info {
        /// Path to the SQLite database file.
        file: PathBuf,
    },
    /// List the user tables recorded in the schema.
    Tables {
        /// Path to the SQLite database file.
        file: PathBuf,
    },
    /// Print cookies whose host matches a domain, one name/value pair per line.
    Cookies {
        /// Path to the cookies.sqlite file (copy it aside first if the
        /// browser is running).
        file: PathBuf,
        /// Substring to match against the cookie host column.
        #[arg(long, default_value = "claude.ai")]
        domain: String,
    },
}
