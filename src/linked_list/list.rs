use core::fmt;

use super::{
    error::InsertError,
    iter::{IntoIter, Iter, IterMut},
    node::{Link, Node},
    traits::List,
};

/// A singly linked list owning its nodes through a chain of boxes.
///
/// The list owns the head, and every node owns its successor. Dropping the
/// list releases the nodes one by one from the head, so long lists do not
/// recurse.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Get a mutable iterator over the values, head first
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut())
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// The link that holds position `index`, if the chain reaches it.
    ///
    /// For `index == len` this is the empty link after the tail.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn take_head(&mut self) -> Link<T> {
        self.len = 0;
        self.head.take()
    }
}

impl<T> List<T> for LinkedList<T> {
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
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    fn push_back(&mut self, value: T) {
        *self.tail_link() = Some(Node::boxed(value, None));
        self.len += 1;
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        let len = self.len;
        if index > len {
            return Err(InsertError::new(index, len, value));
        }
        match self.link_mut(index) {
            Some(link) => {
                let next = link.take();
                *link = Some(Node::boxed(value, next));
                self.len += 1;
                Ok(())
            }
            None => Err(InsertError::new(index, len, value)),
        }
    }

    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let (value, next) = node.into_parts();
            self.head = next;
            self.len -= 1;
            value
        })
    }

    fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove(last)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let link = self.link_mut(index)?;
        let (value, next) = link.take()?.into_parts();
        *link = next;
        self.len -= 1;
        Some(value)
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    fn clear(&mut self) {
        let mut link = self.take_head();
        while let Some(node) = link {
            link = node.into_parts().1;
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.tail_link();
        let mut added = 0;
        for value in iter {
            let node = link.insert(Node::boxed(value, None));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
