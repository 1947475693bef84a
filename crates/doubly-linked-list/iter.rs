use std::iter::FusedIterator;

use generational_arena::Handle;

use crate::{DoublyLinkedList, Link, Node};

/// Borrowing iterator, front to back (`.rev()` for back to front).
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Iter {
            list,
            front: list.head,
            back: list.tail,
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.front?)?;
        self.remaining -= 1;
        self.front = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.back?)?;
        self.remaining -= 1;
        self.back = node.prev;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator, front to back.
///
/// The arena hands out one mutable borrow per slot, in slot order. The link
/// order is recorded first and the borrows are placed by it, so allocation
/// is proportional to the list's length.
pub struct IterMut<'a, T> {
    values: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>) -> Self {
        // (slot index, position in the list) for every node.
        let mut positions = Vec::with_capacity(list.len());
        let mut current = list.head;
        while let Some(handle) = current {
            positions.push((handle.index(), positions.len()));
            current = list.neighbour(handle, Link::Next);
        }
        positions.sort_unstable();

        // Every live slot belongs to the list, so both sides are in slot order.
        let mut ordered: Vec<Option<&'a mut T>> = Vec::new();
        ordered.resize_with(positions.len(), || None);
        let slots = list.nodes.iter_mut();
        for ((_, position), (_, Node { value, .. })) in positions.into_iter().zip(slots) {
            ordered[position] = Some(value);
        }

        let values: Vec<&'a mut T> = ordered.into_iter().flatten().collect();
        IterMut {
            values: values.into_iter(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.values.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; pops from whichever end is asked for.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
