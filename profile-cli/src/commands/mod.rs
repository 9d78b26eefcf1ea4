use std::io::{self, Write};

use clap::Subcommand;
use profile_storage::BaseStorage;

use crate::error::AppError;
use crate::session::{describe_failure, Command, Session};

mod add;
mod follow;
mod list;
mod post;
mod remove;
mod search;
mod shell;

/// Available commands, both on the command line and in the shell
#[derive(Debug, Subcommand)]
pub enum Commands {
    Add(add::Add),
    Remove(remove::Remove),
    Search(search::Search),
    List(list::List),
    Follow(follow::Follow),
    Unfollow(follow::Unfollow),
    Post(post::Post),
    Shell(shell::Shell),
}

impl Commands {
    pub fn run<S, W>(
        &self,
        session: &mut Session<S>,
        out: &mut W,
    ) -> Result<(), AppError>
    where
        S: BaseStorage,
        W: Write,
    {
        match self {
            Commands::Add(add) => execute(session, add.command(), out),
            Commands::Remove(remove) => execute(session, remove.command(), out),
            Commands::Search(search) => execute(session, search.command(), out),
            Commands::List(list) => list.run(session, out),
            Commands::Follow(follow) => execute(session, follow.command(), out),
            Commands::Unfollow(unfollow) => {
                execute(session, unfollow.command(), out)
            }
            Commands::Post(post) => execute(session, post.command(), out),
            Commands::Shell(shell) => {
                shell.run(session, io::stdin().lock(), out)
            }
        }
    }
}

/// Dispatch a command and print what happened.
///
/// Failed commands and failed saves are reported, not returned: the
/// session keeps going either way.
fn execute<S, W>(
    session: &mut Session<S>,
    command: Command,
    out: &mut W,
) -> Result<(), AppError>
where
    S: BaseStorage,
    W: Write,
{
    match session.dispatch(command) {
        Ok(report) => {
            writeln!(out, "{}", report.outcome)?;
            if let Some(Err(err)) = report.saved {
                writeln!(
                    out,
                    "Error: Unable to open file for saving: {}",
                    err
                )?;
            }
        }
        Err(err) => writeln!(out, "{}", describe_failure(&err))?,
    }
    Ok(())
}
