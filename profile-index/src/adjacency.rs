use crate::profile::UserId;

/// Ordered collection of the identifiers a single user follows.
///
/// Targets are kept in insertion order. The list does not reject
/// duplicates, so following the same user twice stores two entries
/// and `remove` only drops the first of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    targets: Vec<UserId>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target as the new last element
    pub fn append(&mut self, target: UserId) {
        self.targets.push(target);
    }

    /// Remove the first occurrence of a target.
    ///
    /// Returns `false` if the target is not in the list.
    pub fn remove(&mut self, target: UserId) -> bool {
        match self.targets.iter().position(|t| *t == target) {
            Some(position) => {
                self.targets.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, target: UserId) -> bool {
        self.targets.contains(&target)
    }

    /// Iterate over the targets in the order they were followed
    pub fn to_ordered_sequence(&self) -> impl Iterator<Item = UserId> + '_ {
        self.targets.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
