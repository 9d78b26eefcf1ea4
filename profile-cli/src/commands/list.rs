use std::io::Write;

use data_error::DirectoryError;
use profile_index::UserProfile;
use profile_storage::BaseStorage;

use crate::error::AppError;
use crate::models::format::Format;
use crate::session::{Command, Outcome, Session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List all users in identifier order")]
pub struct List {
    #[clap(
        short,
        long,
        value_enum,
        default_value = "raw",
        help = "Output format of the listing"
    )]
    format: Format,
}

impl List {
    pub fn run<S, W>(
        &self,
        session: &mut Session<S>,
        out: &mut W,
    ) -> Result<(), AppError>
    where
        S: BaseStorage,
        W: Write,
    {
        let report = session.dispatch(Command::ListUsers)?;

        match (&report.outcome, self.format) {
            (Outcome::Listing(entries), Format::Json) => {
                let profiles: Vec<&UserProfile> =
                    entries.iter().map(|entry| entry.profile()).collect();
                let json = serde_json::to_string_pretty(&profiles)
                    .map_err(DirectoryError::from)?;
                writeln!(out, "{}", json)?;
            }
            (Outcome::Listing(entries), Format::Raw) => {
                for entry in entries {
                    writeln!(out, "{}", entry)?;
                }
            }
            (outcome, _) => writeln!(out, "{}", outcome)?,
        }
        Ok(())
    }
}
