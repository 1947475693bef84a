//! A doubly-linked list combining stack (LIFO) and queue (FIFO) operations.
//!
//! Nodes live in a generational arena and refer to their neighbours by
//! handle, so every node has exactly one owner (the arena) and the links in
//! both directions are plain values. Insertion and removal at either end are
//! O(1).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};

use generational_arena::{Arena, Handle};
use log::trace;

mod cursor;
mod iter;

pub use cursor::{Cursor, CursorMut, Direction};
pub use iter::{IntoIter, Iter, IterMut};

/// Builds a [`DoublyLinkedList`] the way `vec!` builds a `Vec`.
///
/// ```
/// # use doubly_linked_list::list;
/// let list = list![1, 2, 3];
/// assert_eq!(list.peek_back(), Some(&3));
///
/// let zeros = list![0; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::DoublyLinkedList::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut list = $crate::DoublyLinkedList::new();
        list.extend(::std::iter::repeat($elem).take($n));
        list
    }};
    ($($x:expr),+ $(,)?) => {
        $crate::DoublyLinkedList::from([$($x),+])
    };
}

/// Which neighbour of a node to follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Next,
    Prev,
}

impl Link {
    pub(crate) fn opposite(self) -> Link {
        match self {
            Link::Next => Link::Prev,
            Link::Prev => Link::Next,
        }
    }
}

/// A doubly-linked list node.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<Handle>,
    pub(crate) next: Option<Handle>,
}

impl<T> Node<T> {
    fn link(&self, link: Link) -> Option<Handle> {
        match link {
            Link::Next => self.next,
            Link::Prev => self.prev,
        }
    }

    fn link_mut(&mut self, link: Link) -> &mut Option<Handle> {
        match link {
            Link::Next => &mut self.next,
            Link::Prev => &mut self.prev,
        }
    }
}

/// A doubly-linked list.
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        DoublyLinkedList {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the length of the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes a value to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.push_end(Link::Prev, value);
    }

    /// Pushes a value to the back of the list.
    pub fn push_back(&mut self, value: T) {
        self.push_end(Link::Next, value);
    }

    /// Pops a value from the front of the list.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Pops a value from the back of the list.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Pops the front value, or returns `T::default()` when the list is empty.
    ///
    /// An empty list and a list whose front equals the default value are
    /// indistinguishable through this call; prefer [`pop_front`](Self::pop_front)
    /// when that matters.
    pub fn pop_front_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop_front().unwrap_or_default()
    }

    /// Pops the back value, or returns `T::default()` when the list is empty.
    pub fn pop_back_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop_back().unwrap_or_default()
    }

    /// Returns a reference to the front value.
    pub fn peek_front(&self) -> Option<&T> {
        self.value(self.head?)
    }

    /// Returns a reference to the back value.
    pub fn peek_back(&self) -> Option<&T> {
        self.value(self.tail?)
    }

    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        self.value_mut(head)
    }

    pub fn peek_back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        self.value_mut(tail)
    }

    /// Returns a copy of the front value, or `T::default()` when empty.
    pub fn peek_front_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.peek_front().cloned().unwrap_or_default()
    }

    /// Returns a copy of the back value, or `T::default()` when empty.
    pub fn peek_back_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.peek_back().cloned().unwrap_or_default()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            trace!("list: clearing {} nodes", self.len());
        }
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Moves the contents out, leaving this list empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Moves every element of `other` to the back of this list, leaving
    /// `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }

        trace!("list: appending {} nodes onto {}", other.len(), self.len());
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// A forward cursor on the first element (past-the-end if empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head, Direction::Forward)
    }

    /// A forward cursor on the last element (past-the-end if empty).
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, Direction::Forward)
    }

    /// A forward cursor past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, Direction::Forward)
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head, Direction::Forward)
    }

    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail;
        CursorMut::new(self, tail, Direction::Forward)
    }

    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None, Direction::Forward)
    }

    pub(crate) fn value(&self, handle: Handle) -> Option<&T> {
        self.nodes.get(handle).map(|node| &node.value)
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.nodes.get_mut(handle).map(|node| &mut node.value)
    }

    /// The node reached from `handle` by following `link`.
    pub(crate) fn neighbour(&self, handle: Handle, link: Link) -> Option<Handle> {
        self.nodes.get(handle).and_then(|node| node.link(link))
    }

    /// The node reached by following `link` from the past-the-end position.
    pub(crate) fn entry(&self, link: Link) -> Option<Handle> {
        match link {
            Link::Next => self.head,
            Link::Prev => self.tail,
        }
    }

    fn entry_mut(&mut self, link: Link) -> &mut Option<Handle> {
        match link {
            Link::Next => &mut self.head,
            Link::Prev => &mut self.tail,
        }
    }

    /// Pushes `value` so that it becomes the last node in the `towards`
    /// direction: `Link::Next` appends, `Link::Prev` prepends.
    pub(crate) fn push_end(&mut self, towards: Link, value: T) -> Handle {
        let end = match towards {
            Link::Next => self.tail,
            Link::Prev => self.head,
        };
        match end {
            Some(end) => self.insert_beside(end, towards, value),
            None => {
                let handle = self.nodes.insert(Node {
                    value,
                    prev: None,
                    next: None,
                });
                self.head = Some(handle);
                self.tail = Some(handle);
                handle
            }
        }
    }

    /// Inserts `value` adjacent to `at`, on its `side`.
    pub(crate) fn insert_beside(&mut self, at: Handle, side: Link, value: T) -> Handle {
        let beyond = self.neighbour(at, side);
        let mut node = Node {
            value,
            prev: None,
            next: None,
        };
        *node.link_mut(side) = beyond;
        *node.link_mut(side.opposite()) = Some(at);
        let handle = self.nodes.insert(node);

        if let Some(at_node) = self.nodes.get_mut(at) {
            *at_node.link_mut(side) = Some(handle);
        }
        match beyond {
            Some(beyond) => {
                if let Some(beyond_node) = self.nodes.get_mut(beyond) {
                    *beyond_node.link_mut(side.opposite()) = Some(handle);
                }
            }
            // `at` was the end of the chain on this side.
            None => *self.entry_mut(side.opposite()) = Some(handle),
        }
        handle
    }

    /// Detaches the node at `handle`, joining its neighbours.
    pub(crate) fn unlink(&mut self, handle: Handle) -> Option<T> {
        let node = self.nodes.remove(handle)?;

        for link in [Link::Next, Link::Prev] {
            let replacement = node.link(link.opposite());
            match node.link(link) {
                Some(neighbour) => {
                    if let Some(neighbour) = self.nodes.get_mut(neighbour) {
                        *neighbour.link_mut(link.opposite()) = replacement;
                    }
                }
                None => *self.entry_mut(link.opposite()) = replacement,
            }
        }
        Some(node.value)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// Deep copy into fresh, compact node storage.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for DoublyLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<T: Clone> AddAssign<&DoublyLinkedList<T>> for DoublyLinkedList<T> {
    fn add_assign(&mut self, rhs: &DoublyLinkedList<T>) {
        self.extend(rhs.iter().cloned());
    }
}

impl<T> AddAssign<DoublyLinkedList<T>> for DoublyLinkedList<T> {
    fn add_assign(&mut self, mut rhs: DoublyLinkedList<T>) {
        self.append(&mut rhs);
    }
}

impl<T: Clone> Add<&DoublyLinkedList<T>> for &DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn add(self, rhs: &DoublyLinkedList<T>) -> DoublyLinkedList<T> {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl<T: Clone> Add<&DoublyLinkedList<T>> for DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn add(mut self, rhs: &DoublyLinkedList<T>) -> DoublyLinkedList<T> {
        self += rhs;
        self
    }
}

impl<T> Add for DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn add(mut self, rhs: DoublyLinkedList<T>) -> DoublyLinkedList<T> {
        self += rhs;
        self
    }
}
