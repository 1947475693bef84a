//! Bidirectional cursors.
//!
//! A cursor sits on a node or on the "ghost" position, which stands for both
//! past-the-end and before-the-beginning. Stepping off either end of the
//! list lands on the ghost; stepping from the ghost wraps to the other end.
//!
//! [`Cursor`] and [`CursorMut`] share the same traversal core and differ only
//! in how they borrow the list. A reversed cursor swaps the roles of the
//! forward and backward links, so `move_next` walks toward the head.
//!
//! Cursors compare equal when they sit on the same node of the same list,
//! never by the values they point at.

use std::fmt;
use std::ptr;

use generational_arena::Handle;

use crate::{DoublyLinkedList, Link};

/// Traversal order of a cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `move_next` follows head-to-tail links.
    Forward,
    /// `move_next` follows tail-to-head links.
    Reverse,
}

impl Direction {
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// The link `move_next` follows.
    fn ahead(self) -> Link {
        match self {
            Direction::Forward => Link::Next,
            Direction::Reverse => Link::Prev,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Position {
    current: Option<Handle>,
    direction: Direction,
}

impl Position {
    fn step<T>(&mut self, list: &DoublyLinkedList<T>, link: Link) {
        self.current = self.peek(list, link);
    }

    fn peek<T>(&self, list: &DoublyLinkedList<T>, link: Link) -> Option<Handle> {
        match self.current {
            Some(handle) => list.neighbour(handle, link),
            None => list.entry(link),
        }
    }

    fn move_next<T>(&mut self, list: &DoublyLinkedList<T>) {
        self.step(list, self.direction.ahead());
    }

    fn move_prev<T>(&mut self, list: &DoublyLinkedList<T>) {
        self.step(list, self.direction.ahead().opposite());
    }
}

/// A read-only cursor.
pub struct Cursor<'a, T> {
    list: &'a DoublyLinkedList<T>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a DoublyLinkedList<T>,
        current: Option<Handle>,
        direction: Direction,
    ) -> Self {
        Cursor {
            list,
            position: Position { current, direction },
        }
    }

    pub fn direction(&self) -> Direction {
        self.position.direction
    }

    /// Same position, opposite traversal order.
    pub fn reversed(mut self) -> Self {
        self.position.direction = self.position.direction.reversed();
        self
    }

    /// True when the cursor is on the ghost position.
    pub fn is_end(&self) -> bool {
        self.position.current.is_none()
    }

    pub fn current(&self) -> Option<&'a T> {
        self.list.value(self.position.current?)
    }

    pub fn move_next(&mut self) {
        self.position.move_next(self.list);
    }

    pub fn move_prev(&mut self) {
        self.position.move_prev(self.list);
    }

    /// Returns the current value, then steps forward.
    ///
    /// On the ghost position this returns `None` and stays put.
    pub fn next_value(&mut self) -> Option<&'a T> {
        let value = self.current()?;
        self.move_next();
        Some(value)
    }

    /// Returns the current value, then steps backward.
    pub fn prev_value(&mut self) -> Option<&'a T> {
        let value = self.current()?;
        self.move_prev();
        Some(value)
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        let handle = self.position.peek(self.list, self.position.direction.ahead())?;
        self.list.value(handle)
    }

    pub fn peek_prev(&self) -> Option<&'a T> {
        let behind = self.position.direction.ahead().opposite();
        let handle = self.position.peek(self.list, behind)?;
        self.list.value(handle)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.position.current == other.position.current
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current())
            .field("direction", &self.position.direction)
            .finish()
    }
}

/// A cursor that can edit the list it walks.
pub struct CursorMut<'a, T> {
    list: &'a mut DoublyLinkedList<T>,
    position: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut DoublyLinkedList<T>,
        current: Option<Handle>,
        direction: Direction,
    ) -> Self {
        CursorMut {
            list,
            position: Position { current, direction },
        }
    }

    pub fn direction(&self) -> Direction {
        self.position.direction
    }

    pub fn reversed(mut self) -> Self {
        self.position.direction = self.position.direction.reversed();
        self
    }

    pub fn is_end(&self) -> bool {
        self.position.current.is_none()
    }

    /// A read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: &*self.list,
            position: self.position,
        }
    }

    pub fn current(&mut self) -> Option<&mut T> {
        let handle = self.position.current?;
        self.list.value_mut(handle)
    }

    pub fn move_next(&mut self) {
        self.position.move_next(&*self.list);
    }

    pub fn move_prev(&mut self) {
        self.position.move_prev(&*self.list);
    }

    /// Returns the current value, then steps forward.
    ///
    /// On the ghost position this returns `None` and stays put.
    pub fn next_value(&mut self) -> Option<&mut T> {
        let handle = self.position.current?;
        self.move_next();
        self.list.value_mut(handle)
    }

    /// Returns the current value, then steps backward.
    pub fn prev_value(&mut self) -> Option<&mut T> {
        let handle = self.position.current?;
        self.move_prev();
        self.list.value_mut(handle)
    }

    pub fn peek_next(&self) -> Option<&T> {
        let handle = self.position.peek(&*self.list, self.position.direction.ahead())?;
        self.list.value(handle)
    }

    pub fn peek_prev(&self) -> Option<&T> {
        let behind = self.position.direction.ahead().opposite();
        let handle = self.position.peek(&*self.list, behind)?;
        self.list.value(handle)
    }

    /// Inserts `value` where `move_next` would go next.
    ///
    /// On the ghost position the value becomes the first element in the
    /// cursor's traversal order.
    pub fn insert_after(&mut self, value: T) {
        self.insert(self.position.direction.ahead(), value);
    }

    /// Inserts `value` where `move_prev` would go next.
    ///
    /// On the ghost position the value becomes the last element in the
    /// cursor's traversal order.
    pub fn insert_before(&mut self, value: T) {
        self.insert(self.position.direction.ahead().opposite(), value);
    }

    fn insert(&mut self, side: Link, value: T) {
        match self.position.current {
            Some(handle) => {
                self.list.insert_beside(handle, side, value);
            }
            // From the ghost, `side` leads to the end reached by `entry(side)`.
            None => {
                self.list.push_end(side.opposite(), value);
            }
        }
    }

    /// Removes the current element and moves onto the one after it.
    ///
    /// Returns `None` and does nothing on the ghost position.
    pub fn remove_current(&mut self) -> Option<T> {
        let handle = self.position.current?;
        let next = self.list.neighbour(handle, self.position.direction.ahead());
        let value = self.list.unlink(handle)?;
        self.position.current = next;
        Some(value)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            list: cursor.list,
            position: cursor.position,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_cursor().fmt(f)
    }
}
