use std::io;

use clap::Parser;
use profile_storage::FileStorage;

mod cli;
mod commands;
mod error;
mod models;
mod session;

use crate::cli::Cli;
use crate::error::AppError;
use crate::session::Session;

fn main() {
    env_logger::init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), AppError> {
    let storage = FileStorage::new("users".to_owned(), &args.storage);
    let mut session = Session::new(storage);

    match session.load() {
        Ok(count) => log::info!(
            "loaded {} users from {}",
            count,
            args.storage.display()
        ),
        Err(err) => {
            eprintln!("Error: Unable to open file for loading: {}", err)
        }
    }

    args.command.run(&mut session, &mut io::stdout().lock())
}
