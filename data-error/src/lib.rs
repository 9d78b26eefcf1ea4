use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error")]
    Parse,
    #[error("User {0} not found")]
    NotFound(i64),
    #[error("User {follower} is not following user {target}")]
    NotFollowing { follower: i64, target: i64 },
    #[error("User {0} cannot follow any more users")]
    FollowLimit(i64),
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
}

impl DirectoryError {
    /// Whether the error refers to an absent user identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<ParseIntError> for DirectoryError {
    fn from(_: ParseIntError) -> Self {
        Self::Parse
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}
