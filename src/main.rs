use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt;

use mozcookie::sqlite::schema;
use mozcookie::{cookies, Database};

mod cli;

fn main() -> Result<()> {
    fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run(cli::Args::parse())
}

fn run(args: cli::Args) -> Result<()> {
    match args.command {
        cli::Command::Info { file } => {
            let db = Database::open(&file)?;
            let header = db.header();
            println!("database page size: {}", header.page_size);
            println!("database page count: {}", header.page_count);
            println!("file change counter: {}", header.file_change_counter);
            println!("text encoding: {}", header.encoding_name());
        }
        cli::Command::Tables { file } => {
            let db = Database::open(&file)?;
            println!("{}", schema::user_tables(&db).join(" "));
        }
        cli::Command::Cookies { file, domain } => {
            let cookies = cookies::read_cookies(&file, &domain)?;
            for (name, value) in &cookies {
                println!("{}\t{}", name, value);
            }
        }
    }
    Ok(())
}
