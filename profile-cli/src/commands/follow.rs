use profile_index::UserId;

use crate::session::Command;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "follow", about = "Start following a user")]
pub struct Follow {
    #[clap(allow_negative_numbers = true, help = "Your user identifier")]
    follower: UserId,
    #[clap(
        allow_negative_numbers = true,
        help = "Identifier of the user to follow"
    )]
    target: UserId,
}

impl Follow {
    pub fn command(&self) -> Command {
        Command::Follow {
            follower: self.follower,
            target: self.target,
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "unfollow", about = "Stop following a user")]
pub struct Unfollow {
    #[clap(allow_negative_numbers = true, help = "Your user identifier")]
    follower: UserId,
    #[clap(
        allow_negative_numbers = true,
        help = "Identifier of the user to unfollow"
    )]
    target: UserId,
}

impl Unfollow {
    pub fn command(&self) -> Command {
        Command::Unfollow {
            follower: self.follower,
            target: self.target,
        }
    }
}
