use std::cmp::Ordering;

use data_error::{DirectoryError, Result};

use crate::iter::InOrder;
use crate::profile::{ProfileEntry, UserId, UserProfile};

/// Stable handle of a node inside the arena
pub(crate) type NodeId = usize;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) entry: ProfileEntry,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

/// Position a node hangs from: the root slot or one side of its parent
#[derive(Clone, Copy, Debug)]
enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// Ordered directory of user profiles.
///
/// [`ProfileIndex`] is an unbalanced binary search tree keyed by
/// [`UserId`]. Nodes live in an arena and reference their children by
/// handle; released slots are recycled by later inserts.
///
/// Routing is the same for every operation: go left when the key is
/// strictly less than the node's identifier, right otherwise. Inserting an
/// identifier that is already present therefore adds a second entry in the
/// right subtree instead of replacing the first one, and lookups only ever
/// reach the shallower of the two.
///
/// The tree is never rebalanced, so its depth depends entirely on the
/// insertion order.
///
/// ## Examples
/// ```
/// use profile_index::{ProfileIndex, UserProfile};
///
/// let mut index = ProfileIndex::new();
/// index.insert(UserProfile::new(5, "Bea", "bea@x", "bea.png"));
/// index.insert(UserProfile::new(1, "Al", "al@x", "al.png"));
///
/// index.follow(1, 5).expect("user 1 exists");
/// assert_eq!(index.search(1).unwrap().profile().follow_count(), 1);
///
/// let ids: Vec<_> = index.traverse_in_order().map(|e| e.id()).collect();
/// assert_eq!(ids, vec![1, 5]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProfileIndex {
    nodes: Vec<Option<Node>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl ProfileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of entries in the index
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the index is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every entry and release the arena
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Place a profile as a new leaf with an empty follow list.
    ///
    /// Duplicate identifiers are not rejected.
    pub fn insert(&mut self, profile: UserProfile) {
        let id = profile.id();
        let mut link = Link::Root;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.node(handle);
            if id < node.entry.id() {
                link = Link::Left(handle);
                cursor = node.left;
            } else {
                link = Link::Right(handle);
                cursor = node.right;
            }
        }

        let handle = self.allocate(Node {
            entry: ProfileEntry::new(profile),
            left: None,
            right: None,
        });
        self.relink(link, Some(handle));
        self.len += 1;
        log::debug!("index: inserted user {} at node {}", id, handle);
    }

    /// Remove the entry with the given identifier and return it.
    ///
    /// A node with two children is not unlinked itself: the profile and
    /// follow list of its in-order successor are moved into it, and the
    /// successor's original node, which has no left child, is spliced out.
    pub fn delete(&mut self, id: UserId) -> Result<ProfileEntry> {
        let (handle, link) =
            self.locate(id).ok_or(DirectoryError::NotFound(id))?;

        let node = self.node(handle);
        let removed = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let mut successor_link = Link::Right(handle);
                let mut successor = right;
                while let Some(left) = self.node(successor).left {
                    successor_link = Link::Left(successor);
                    successor = left;
                }

                let successor_right = self.node(successor).right;
                self.relink(successor_link, successor_right);
                let promoted = self.release(successor).entry;
                log::debug!(
                    "index: promoting user {} into node {}",
                    promoted.id(),
                    handle
                );
                std::mem::replace(&mut self.node_mut(handle).entry, promoted)
            }
            (child, None) | (None, child) => {
                self.relink(link, child);
                self.release(handle).entry
            }
        };

        self.len -= 1;
        log::debug!("index: deleted user {}", id);
        Ok(removed)
    }

    /// Find the entry with the given identifier
    pub fn search(&self, id: UserId) -> Result<&ProfileEntry> {
        self.locate(id)
            .map(|(handle, _)| &self.node(handle).entry)
            .ok_or(DirectoryError::NotFound(id))
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.locate(id).is_some()
    }

    /// Iterate over the entries in ascending identifier order
    pub fn traverse_in_order(&self) -> InOrder<'_> {
        InOrder::new(self, self.root)
    }

    /// Record that `follower` follows `target`.
    ///
    /// The target is not required to exist in the index. Fails with
    /// `FollowLimit` when the follow count cannot grow any further, which
    /// can only happen for a count restored from storage.
    pub fn follow(&mut self, follower: UserId, target: UserId) -> Result<()> {
        let entry = self.entry_mut(follower)?;
        if !entry.profile.increment_follows() {
            return Err(DirectoryError::FollowLimit(follower));
        }
        entry.follows.append(target);
        log::debug!("index: user {} follows user {}", follower, target);
        Ok(())
    }

    /// Drop `target` from the follow list of `follower`
    pub fn unfollow(&mut self, follower: UserId, target: UserId) -> Result<()> {
        let entry = self.entry_mut(follower)?;
        if !entry.follows.remove(target) {
            return Err(DirectoryError::NotFollowing { follower, target });
        }
        entry.profile.decrement_follows();
        log::debug!("index: user {} unfollowed user {}", follower, target);
        Ok(())
    }

    /// Apply an in-place edit to a profile.
    ///
    /// The identifier and follow count cannot be changed through
    /// [`UserProfile`]'s public setters, so the entry keeps its position.
    pub fn edit<F>(&mut self, id: UserId, edit: F) -> Result<()>
    where
        F: FnOnce(&mut UserProfile),
    {
        let entry = self.entry_mut(id)?;
        edit(&mut entry.profile);
        Ok(())
    }

    /// Return the number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((handle, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = self.node(handle);
            for child in [node.left, node.right].into_iter().flatten() {
                pending.push((child, level + 1));
            }
        }
        deepest
    }

    pub(crate) fn node(&self, handle: NodeId) -> &Node {
        match &self.nodes[handle] {
            Some(node) => node,
            None => unreachable!("node {} is linked but released", handle),
        }
    }

    fn node_mut(&mut self, handle: NodeId) -> &mut Node {
        match &mut self.nodes[handle] {
            Some(node) => node,
            None => unreachable!("node {} is linked but released", handle),
        }
    }

    fn entry_mut(&mut self, id: UserId) -> Result<&mut ProfileEntry> {
        let (handle, _) =
            self.locate(id).ok_or(DirectoryError::NotFound(id))?;
        Ok(&mut self.node_mut(handle).entry)
    }

    /// Find the first node holding `id` and the link it hangs from
    fn locate(&self, id: UserId) -> Option<(NodeId, Link)> {
        let mut link = Link::Root;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.node(handle);
            match id.cmp(&node.entry.id()) {
                Ordering::Equal => return Some((handle, link)),
                Ordering::Less => {
                    link = Link::Left(handle);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(handle);
                    cursor = node.right;
                }
            }
        }
        None
    }

    fn relink(&mut self, link: Link, child: Option<NodeId>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.node_mut(parent).left = child,
            Link::Right(parent) => self.node_mut(parent).right = child,
        }
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(handle) => {
                self.nodes[handle] = Some(node);
                handle
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, handle: NodeId) -> Node {
        match self.nodes[handle].take() {
            Some(node) => {
                self.free.push(handle);
                node
            }
            None => unreachable!("node {} released twice", handle),
        }
    }
}

impl FromIterator<UserProfile> for ProfileIndex {
    fn from_iter<I: IntoIterator<Item = UserProfile>>(profiles: I) -> Self {
        let mut index = ProfileIndex::new();
        index.extend(profiles);
        index
    }
}

impl Extend<UserProfile> for ProfileIndex {
    fn extend<I: IntoIterator<Item = UserProfile>>(&mut self, profiles: I) {
        for profile in profiles {
            self.insert(profile);
        }
    }
}

impl<'a> IntoIterator for &'a ProfileIndex {
    type Item = &'a ProfileEntry;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse_in_order()
    }
}
