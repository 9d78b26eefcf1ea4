use std::iter::FusedIterator;

use crate::index::{NodeId, ProfileIndex};
use crate::profile::ProfileEntry;

/// In-order walk over a [`ProfileIndex`], yielding ascending identifiers.
///
/// Uses an explicit stack instead of recursion, so degenerate trees built
/// from sorted input do not grow the call stack.
pub struct InOrder<'a> {
    index: &'a ProfileIndex,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(index: &'a ProfileIndex, root: Option<NodeId>) -> Self {
        Self {
            index,
            stack: Vec::new(),
            cursor: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a ProfileEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.cursor {
            self.stack.push(handle);
            self.cursor = self.index.node(handle).left;
        }

        let handle = self.stack.pop()?;
        let node = self.index.node(handle);
        self.cursor = node.right;
        Some(&node.entry)
    }
}

impl FusedIterator for InOrder<'_> {}
