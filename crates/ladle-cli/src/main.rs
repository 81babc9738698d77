//! Ladle CLI application
//!
//! Interactive, menu-driven recipe manager. Running the binary opens the
//! main menu; all navigation happens through numbered selections and `q`.

mod actions;
mod args;
mod console;
mod menu;
mod modify;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use console::Session;
use ladle_core::Database;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file } = Args::parse();

    let db = match database_file {
        Some(path) => Database::new(&path),
        None => Database::open_default(),
    }
    .context("Failed to open recipe database")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let mut session = Session::new(db, &mut input, &mut output);

    info!("ladle started");

    actions::main_menu().run(&mut session, ())?;

    Ok(())
}
