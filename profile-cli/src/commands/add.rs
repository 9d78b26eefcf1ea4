use profile_index::{UserId, UserProfile};

use crate::session::Command;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a user profile")]
pub struct Add {
    #[clap(allow_negative_numbers = true, help = "Identifier of the new user")]
    id: UserId,
    #[clap(help = "Display name, a single word")]
    name: String,
    #[clap(help = "Email address")]
    email: String,
    #[clap(help = "Profile picture reference")]
    picture: String,
}

impl Add {
    pub fn command(&self) -> Command {
        Command::AddUser(UserProfile::new(
            self.id,
            self.name.as_str(),
            self.email.as_str(),
            self.picture.as_str(),
        ))
    }
}
