use profile_index::UserId;

use crate::session::Command;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "post", about = "Post a status update (not stored)")]
pub struct Post {
    #[clap(allow_negative_numbers = true, help = "Your user identifier")]
    author: UserId,
    #[clap(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Text of the update"
    )]
    update: Vec<String>,
}

impl Post {
    pub fn command(&self) -> Command {
        Command::PostUpdate {
            author: self.author,
            update: self.update.join(" "),
        }
    }
}
