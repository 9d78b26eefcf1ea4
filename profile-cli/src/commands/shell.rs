use std::io::{BufRead, Write};

use clap::Parser;
use profile_storage::BaseStorage;

use crate::cli::ShellLine;
use crate::commands::Commands;
use crate::error::AppError;
use crate::session::Session;

const PROMPT: &str = "> ";

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "shell", about = "Run commands interactively, one per line")]
pub struct Shell {}

impl Shell {
    /// Read commands from `input` until it ends or `exit` is entered.
    ///
    /// Lines that fail to parse are reported and skipped.
    pub fn run<S, R, W>(
        &self,
        session: &mut Session<S>,
        mut input: R,
        out: &mut W,
    ) -> Result<(), AppError>
    where
        S: BaseStorage,
        R: BufRead,
        W: Write,
    {
        writeln!(out, "Type `help` for the list of commands, `exit` to quit.")?;

        let mut line = String::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.first() {
                None => continue,
                Some(&"exit") | Some(&"quit") => break,
                Some(_) => {}
            }

            match ShellLine::try_parse_from(tokens) {
                Ok(ShellLine {
                    command: Commands::Shell(_),
                }) => writeln!(out, "Already in the shell.")?,
                Ok(parsed) => parsed.command.run(session, out)?,
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
        Ok(())
    }
}
