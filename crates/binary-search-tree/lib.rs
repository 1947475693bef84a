//! A threaded binary search tree that counts repeated keys.
//!
//! Each key is stored once; inserting it again bumps its frequency. Empty
//! child slots are not wasted: a missing left child links to the in-order
//! predecessor and a missing right child to the in-order successor, which
//! lets iteration walk the tree in order without a stack.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FusedIterator;

use generational_arena::{Arena, Handle};
use log::trace;

mod node;

pub use node::{LinkKind, Node, NodeDetails};

use node::Link;

#[derive(Clone, Debug)]
pub struct Tree<K> {
    nodes: Arena<Node<K>>,
    root: Option<Handle>,
    height: usize,
}

impl<K: Ord> Tree<K> {
    pub fn new() -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
            height: 0,
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Inserts `key`, or counts one more occurrence of it.
    ///
    /// Returns the node holding the key.
    pub fn insert(&mut self, key: K) -> &Node<K> {
        let handle = self.insert_handle(key);
        // The handle was produced by the insertion above.
        &self.nodes[handle]
    }

    fn insert_handle(&mut self, key: K) -> Handle {
        let Some(mut current) = self.root else {
            let handle = self.attach(key, None, 0, Link::Thread(None), Link::Thread(None));
            self.root = Some(handle);
            return handle;
        };

        loop {
            let node = &mut self.nodes[current];
            let (link, side) = match key.cmp(&node.key) {
                Ordering::Equal => {
                    node.frequency += 1;
                    return current;
                }
                Ordering::Less => (node.left, Side::Left),
                Ordering::Greater => (node.right, Side::Right),
            };

            let thread = match link {
                Link::Child(child) => {
                    current = child;
                    continue;
                }
                Link::Thread(thread) => thread,
            };

            let depth = node.depth + 1;
            // The new leaf inherits the parent's thread on its outer side and
            // threads back to the parent on its inner side.
            let (left, right) = match side {
                Side::Left => (Link::Thread(thread), Link::Thread(Some(current))),
                Side::Right => (Link::Thread(Some(current)), Link::Thread(thread)),
            };
            let handle = self.attach(key, Some(current), depth, left, right);

            let parent = &mut self.nodes[current];
            match side {
                Side::Left => parent.left = Link::Child(handle),
                Side::Right => parent.right = Link::Child(handle),
            }
            return handle;
        }
    }

    fn attach(
        &mut self,
        key: K,
        parent: Option<Handle>,
        depth: usize,
        left: Link,
        right: Link,
    ) -> Handle {
        let id = self.nodes.len();
        self.height = self.height.max(depth + 1);
        trace!("bst: node {} at depth {}", id, depth);
        self.nodes.insert(Node {
            id,
            depth,
            key,
            frequency: 1,
            parent,
            left,
            right,
        })
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Node<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root?;
        loop {
            let node = self.node(current)?;
            let link = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            current = link.child()?;
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Occurrences of `key`; 0 when absent.
    pub fn frequency<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).map_or(0, Node::frequency)
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.node(self.root?)
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&Node<K>> {
        self.node(self.first_handle()?)
    }

    /// The largest key.
    pub fn last(&self) -> Option<&Node<K>> {
        self.node(self.last_handle()?)
    }

    pub fn parent(&self, node: &Node<K>) -> Option<&Node<K>> {
        self.node(node.parent?)
    }

    pub fn left_child(&self, node: &Node<K>) -> Option<&Node<K>> {
        self.node(node.left.child()?)
    }

    pub fn right_child(&self, node: &Node<K>) -> Option<&Node<K>> {
        self.node(node.right.child()?)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.height = 0;
    }

    /// Nodes in ascending key order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            front: self.first_handle(),
            back: self.last_handle(),
            remaining: self.len(),
        }
    }

    fn first_handle(&self) -> Option<Handle> {
        self.descend(self.root?, Side::Left)
    }

    fn last_handle(&self) -> Option<Handle> {
        self.descend(self.root?, Side::Right)
    }

    /// Follows child links on one side as far as they go.
    fn descend(&self, mut handle: Handle, side: Side) -> Option<Handle> {
        loop {
            let node = self.node(handle)?;
            let link = match side {
                Side::Left => node.left,
                Side::Right => node.right,
            };
            match link {
                Link::Child(child) => handle = child,
                Link::Thread(_) => return Some(handle),
            }
        }
    }

    /// In-order successor (`Side::Right`) or predecessor (`Side::Left`).
    fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        let node = self.node(handle)?;
        let link = match side {
            Side::Left => node.left,
            Side::Right => node.right,
        };
        match link {
            Link::Thread(thread) => thread,
            Link::Child(child) => self.descend(child, side.opposite()),
        }
    }
}

impl<K> Tree<K> {
    pub(crate) fn node(&self, handle: Handle) -> Option<&Node<K>> {
        self.nodes.get(handle)
    }
}

impl<K: Ord> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_handle(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: Ord> IntoIterator for &'a Tree<K> {
    type Item = &'a Node<K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// In-order iterator following thread links.
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, K: Ord> Iterator for Iter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<&'a Node<K>> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.step(handle, Side::Right);
        self.tree.node(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Ord> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a Node<K>> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.step(handle, Side::Left);
        self.tree.node(handle)
    }
}

impl<K: Ord> ExactSizeIterator for Iter<'_, K> {}

impl<K: Ord> FusedIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_thread_to_their_in_order_neighbours() {
        let tree: Tree<i32> = [50, 30, 70, 40].into_iter().collect();
        let root = tree.root.unwrap();
        let thirty = tree.nodes[root].left.child().unwrap();
        let forty = tree.nodes[thirty].right.child().unwrap();

        // 30 has no left child and is the smallest key.
        assert_eq!(tree.nodes[thirty].left, Link::Thread(None));
        // 40 sits between 30 and 50.
        assert_eq!(tree.nodes[forty].left, Link::Thread(Some(thirty)));
        assert_eq!(tree.nodes[forty].right, Link::Thread(Some(root)));

        let seventy = tree.nodes[root].right.child().unwrap();
        assert_eq!(tree.nodes[seventy].right, Link::Thread(None));
        assert_eq!(tree.nodes[seventy].left, Link::Thread(Some(root)));
    }

    #[test]
    fn step_walks_both_directions() {
        let tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let mut handle = tree.first_handle();
        let mut forward = Vec::new();
        while let Some(h) = handle {
            forward.push(tree.nodes[h].key);
            handle = tree.step(h, Side::Right);
        }
        assert_eq!(forward, vec![1, 2, 3, 4, 5, 6, 7]);

        let mut handle = tree.last_handle();
        let mut backward = Vec::new();
        while let Some(h) = handle {
            backward.push(tree.nodes[h].key);
            handle = tree.step(h, Side::Left);
        }
        assert_eq!(backward, vec![7, 6, 5, 4, 3, 2, 1]);
    }
}
