use profile_index::UserId;

use crate::session::Command;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "search", about = "Look up a user profile")]
pub struct Search {
    #[clap(
        allow_negative_numbers = true,
        help = "Identifier of the user to look up"
    )]
    id: UserId,
}

impl Search {
    pub fn command(&self) -> Command {
        Command::SearchUser(self.id)
    }
}
