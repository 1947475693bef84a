use std::fmt;

use generational_arena::Handle;

use crate::Tree;

/// What an outgoing left/right link of a node points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A subtree hangs off this side.
    Child,
    /// No subtree; the link points at the in-order neighbour instead.
    Thread,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Child(Handle),
    /// In-order predecessor (left) or successor (right), if any.
    Thread(Option<Handle>),
}

impl Link {
    pub(crate) fn kind(self) -> LinkKind {
        match self {
            Link::Child(_) => LinkKind::Child,
            Link::Thread(_) => LinkKind::Thread,
        }
    }

    /// Where the link points, child or thread.
    pub(crate) fn target(self) -> Option<Handle> {
        match self {
            Link::Child(handle) => Some(handle),
            Link::Thread(thread) => thread,
        }
    }

    pub(crate) fn child(self) -> Option<Handle> {
        match self {
            Link::Child(handle) => Some(handle),
            Link::Thread(_) => None,
        }
    }
}

/// A node of a threaded binary search tree.
///
/// Two nodes are equal when their id, depth, key and frequency match; links
/// are not compared.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) id: usize,
    pub(crate) depth: usize,
    pub(crate) key: K,
    pub(crate) frequency: usize,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K> Node<K> {
    /// Insertion order of the node within its tree, starting at 0.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Distance from the root; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// How many times the key was inserted.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn left_kind(&self) -> LinkKind {
        self.left.kind()
    }

    pub fn right_kind(&self) -> LinkKind {
        self.right.kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.child().is_none() && self.right.child().is_none()
    }

    /// Extended view listing the keys of the parent and of whatever the left
    /// and right links point at, children and threads alike.
    pub fn details<'a>(&'a self, tree: &'a Tree<K>) -> NodeDetails<'a, K> {
        NodeDetails { node: self, tree }
    }
}

impl<K: PartialEq> PartialEq for Node<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.depth == other.depth
            && self.key == other.key
            && self.frequency == other.frequency
    }
}

impl<K: Eq> Eq for Node<K> {}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.frequency)
    }
}

/// See [`Node::details`].
pub struct NodeDetails<'a, K> {
    node: &'a Node<K>,
    tree: &'a Tree<K>,
}

impl<K: fmt::Display> fmt::Display for NodeDetails<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;
        write!(f, "Id: {}, {}, Depth: {}", node.id, node, node.depth)?;

        let neighbours = [
            ("Parent", node.parent),
            ("Left", node.left.target()),
            ("Right", node.right.target()),
        ];
        for (label, handle) in neighbours {
            if let Some(other) = handle.and_then(|h| self.tree.node(h)) {
                write!(f, ", {}: {}", label, other.key)?;
            }
        }
        Ok(())
    }
}
