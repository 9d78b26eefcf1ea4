use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyList;

/// Integer key used to order and look up profiles
pub type UserId = i64;

/// Profile data of a single user.
///
/// The identifier is fixed at construction. `follow_count` is maintained by
/// [`crate::ProfileIndex`] and mirrors the length of the owning entry's
/// [`AdjacencyList`], except for profiles restored from storage, which keep
/// the persisted count while their list starts empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    name: String,
    email: String,
    picture: String,
    follow_count: u32,
}

impl UserProfile {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        picture: impl Into<String>,
    ) -> Self {
        Self::restore(id, name, email, picture, 0)
    }

    /// Rebuild a profile from persisted fields, including its follow count
    pub fn restore(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        picture: impl Into<String>,
        follow_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            picture: picture.into(),
            follow_count,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn follow_count(&self) -> u32 {
        self.follow_count
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_picture(&mut self, picture: impl Into<String>) {
        self.picture = picture.into();
    }

    /// Returns `false`, leaving the count as is, once it is saturated
    pub(crate) fn increment_follows(&mut self) -> bool {
        match self.follow_count.checked_add(1) {
            Some(count) => {
                self.follow_count = count;
                true
            }
            None => false,
        }
    }

    pub(crate) fn decrement_follows(&mut self) {
        self.follow_count -= 1;
    }
}

/// A profile together with the list of users it follows.
///
/// The two always travel together: when the index relocates a profile,
/// its list moves with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileEntry {
    pub(crate) profile: UserProfile,
    pub(crate) follows: AdjacencyList,
}

impl ProfileEntry {
    pub(crate) fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            follows: AdjacencyList::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.profile.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn follows(&self) -> &AdjacencyList {
        &self.follows
    }
}

impl fmt::Display for ProfileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.profile;
        writeln!(
            f,
            "UserID: {}, Name: {}, Email: {}, Profile Picture: {}, Connections: {}",
            profile.id,
            profile.name,
            profile.email,
            profile.picture,
            profile.follow_count
        )?;
        write!(f, "Follows:")?;
        for target in self.follows.to_ordered_sequence() {
            write!(f, " {}", target)?;
        }
        Ok(())
    }
}
