use std::fmt;

use data_error::{DirectoryError, Result};
use profile_index::{ProfileEntry, ProfileIndex, UserId, UserProfile};
use profile_storage::BaseStorage;

/// A request issued against the directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddUser(UserProfile),
    RemoveUser(UserId),
    SearchUser(UserId),
    ListUsers,
    Follow { follower: UserId, target: UserId },
    Unfollow { follower: UserId, target: UserId },
    /// Echoed back only, nothing is stored
    PostUpdate { author: UserId, update: String },
}

impl Command {
    /// Whether a successful run of the command changes the directory
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::AddUser(_)
                | Command::RemoveUser(_)
                | Command::Follow { .. }
                | Command::Unfollow { .. }
        )
    }
}

/// What a successfully applied command produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added(UserId),
    Removed(ProfileEntry),
    Found(UserProfile),
    Listing(Vec<ProfileEntry>),
    Followed(UserId),
    Unfollowed(UserId),
    Posted(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(id) => write!(f, "Added UserID: {}", id),
            Outcome::Removed(entry) => {
                write!(f, "Removed UserID: {}", entry.id())
            }
            Outcome::Found(profile) => write!(
                f,
                "User found: {} ({})",
                profile.name(),
                profile.email()
            ),
            Outcome::Listing(entries) => {
                let lines: Vec<String> =
                    entries.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Outcome::Followed(target) => {
                write!(f, "Following UserID: {}", target)
            }
            Outcome::Unfollowed(target) => {
                write!(f, "Unfollowed UserID: {}", target)
            }
            Outcome::Posted(update) => write!(f, "Update posted: {}", update),
        }
    }
}

/// Result of dispatching a command.
///
/// `saved` is `None` for commands that do not change the directory. A failed
/// save leaves the in-memory change in place.
#[derive(Debug)]
pub struct Report {
    pub outcome: Outcome,
    pub saved: Option<Result<()>>,
}

/// Owns the index for the lifetime of the process and persists it after
/// every mutating command.
pub struct Session<S> {
    index: ProfileIndex,
    storage: S,
}

impl<S: BaseStorage> Session<S> {
    /// Start with an empty directory backed by `storage`
    pub fn new(storage: S) -> Self {
        Self {
            index: ProfileIndex::new(),
            storage,
        }
    }

    /// Replace the directory with the persisted one.
    ///
    /// On failure the current directory is kept.
    pub fn load(&mut self) -> Result<usize> {
        self.index = self.storage.read_fs()?;
        Ok(self.index.len())
    }

    pub fn index(&self) -> &ProfileIndex {
        &self.index
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Report> {
        let mutating = command.is_mutating();
        let outcome = self.apply(command)?;

        let saved = mutating.then(|| {
            let result = self.storage.write_fs(&self.index);
            if let Err(err) = &result {
                log::warn!("session: changes kept in memory only: {}", err);
            }
            result
        });

        Ok(Report { outcome, saved })
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::AddUser(profile) => {
                let id = profile.id();
                self.index.insert(profile);
                Outcome::Added(id)
            }
            Command::RemoveUser(id) => Outcome::Removed(self.index.delete(id)?),
            Command::SearchUser(id) => {
                Outcome::Found(self.index.search(id)?.profile().clone())
            }
            Command::ListUsers => {
                let entries = self.index.traverse_in_order().cloned().collect();
                Outcome::Listing(entries)
            }
            Command::Follow { follower, target } => {
                self.index.follow(follower, target)?;
                Outcome::Followed(target)
            }
            Command::Unfollow { follower, target } => {
                self.index.unfollow(follower, target)?;
                Outcome::Unfollowed(target)
            }
            Command::PostUpdate { author, update } => {
                log::debug!("session: user {} posted an update", author);
                Outcome::Posted(update)
            }
        };
        Ok(outcome)
    }
}

/// Text shown to the user for a failed command
pub fn describe_failure(err: &DirectoryError) -> String {
    match err {
        DirectoryError::NotFound(_) => "User not found.".to_owned(),
        DirectoryError::NotFollowing { target, .. } => {
            format!("Not following UserID: {}", target)
        }
        other => format!("Error: {}", other),
    }
}
