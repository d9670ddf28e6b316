use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator};

use super::{error::InsertError, traits::List};

enum Slot<T> {
    Vacant { next_free: Option<usize> },
    Occupied { value: T, next: Option<usize> },
}

/// A singly linked list whose nodes live in a slot arena.
///
/// Nodes are addressed by their slot index instead of a pointer. Released
/// slots are threaded onto a free list and reused before the arena grows, so
/// a list that keeps a steady size stops allocating.
pub struct ArenaList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> ArenaList<T> {
    /// Creates a new, empty list without allocating.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// Number of nodes the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(self.value_mut(head))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        Some(self.value_mut(slot))
    }

    /// Get a mutable iterator over the values, head first
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(index) = current {
            current = self.next_of(index);
            order.push(index);
        }
        let mut by_slot: Vec<Option<&mut T>> = self
            .slots
            .iter_mut()
            .map(|slot| match slot {
                Slot::Occupied { value, .. } => Some(value),
                Slot::Vacant { .. } => None,
            })
            .collect();
        let values = order
            .into_iter()
            .filter_map(|index| by_slot[index].take())
            .collect::<Vec<_>>();
        IterMut {
            values: values.into_iter(),
        }
    }

    fn node(&self, index: usize) -> (&T, Option<usize>) {
        match &self.slots[index] {
            Slot::Occupied { value, next } => (value, *next),
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        }
    }

    fn next_of(&self, index: usize) -> Option<usize> {
        self.node(index).1
    }

    fn set_next(&mut self, index: usize, link: Option<usize>) {
        match &mut self.slots[index] {
            Slot::Occupied { next, .. } => *next = link,
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        }
    }

    fn value_mut(&mut self, index: usize) -> &mut T {
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        }
    }

    /// Slot index of the node at `position`.
    fn slot_at(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..position {
            current = self.next_of(current)?;
        }
        Some(current)
    }

    fn tail(&self) -> Option<usize> {
        self.len.checked_sub(1).and_then(|last| self.slot_at(last))
    }

    /// Store a node, reusing a released slot when there is one.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let occupied = Slot::Occupied { value, next };
        match self.free {
            Some(index) => {
                let released = core::mem::replace(&mut self.slots[index], occupied);
                match released {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied { .. } => unreachable!("slot {index} is free but occupied"),
                }
                index
            }
            None => {
                self.slots.push(occupied);
                self.slots.len() - 1
            }
        }
    }

    /// Take the node out of its slot and put the slot on the free list.
    fn release(&mut self, index: usize) -> (T, Option<usize>) {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match core::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { value, next } => {
                self.free = Some(index);
                (value, next)
            }
            Slot::Vacant { .. } => unreachable!("slot {index} released twice"),
        }
    }

    /// Link `value` after the node in slot `prev`, or as the head.
    fn link_after(&mut self, prev: Option<usize>, value: T) {
        let next = match prev {
            Some(prev) => self.next_of(prev),
            None => self.head,
        };
        let index = self.alloc(value, next);
        match prev {
            Some(prev) => self.set_next(prev, Some(index)),
            None => self.head = Some(index),
        }
        self.len += 1;
    }

    /// Unlink the node following slot `prev`, or the head.
    fn unlink_after(&mut self, prev: Option<usize>) -> Option<T> {
        let target = match prev {
            Some(prev) => self.next_of(prev)?,
            None => self.head?,
        };
        let (value, next) = self.release(target);
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        self.len -= 1;
        Some(value)
    }
}

impl<T> List<T> for ArenaList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn push_front(&mut self, value: T) {
        self.link_after(None, value);
    }

    fn push_back(&mut self, value: T) {
        let tail = self.tail();
        self.link_after(tail, value);
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        if index > self.len {
            return Err(InsertError::new(index, self.len, value));
        }
        let prev = match index.checked_sub(1) {
            Some(before) => self.slot_at(before),
            None => None,
        };
        self.link_after(prev, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(None)
    }

    fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove(last)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        match index.checked_sub(1) {
            Some(before) => {
                let prev = self.slot_at(before)?;
                self.unlink_after(Some(prev))
            }
            None => self.unlink_after(None),
        }
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.slots.clear();
        self.free = None;
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index).map(|slot| self.node(slot).0)
    }
}

impl<T> Drop for ArenaList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for ArenaList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ArenaList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArenaList<T> {}

impl<T> Extend<T> for ArenaList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for value in iter {
            self.link_after(tail, value);
            tail = match tail {
                Some(prev) => self.next_of(prev),
                None => self.head,
            };
        }
    }
}

impl<T> FromIterator<T> for ArenaList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArenaList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the values of an [`ArenaList`], head first.
pub struct Iter<'a, T> {
    list: &'a ArenaList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.list;
        let (value, next) = list.node(self.current?);
        self.current = next;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the values of an [`ArenaList`], head first.
pub struct IterMut<'a, T> {
    values: alloc::vec::IntoIter<&'a mut T>,
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

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut ArenaList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for ArenaList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

/// An owning iterator that takes the values out of an [`ArenaList`], head first.
pub struct IntoIter<T> {
    list: ArenaList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
