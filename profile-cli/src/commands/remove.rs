use profile_index::UserId;

use crate::session::Command;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Remove a user profile")]
pub struct Remove {
    #[clap(
        allow_negative_numbers = true,
        help = "Identifier of the user to remove"
    )]
    id: UserId,
}

impl Remove {
    pub fn command(&self) -> Command {
        Command::RemoveUser(self.id)
    }
}
