use super::error::InsertError;

/// A singly linked sequence of values.
///
/// Positions count from the head, starting at zero. Head operations are
/// O(1); anything that has to reach a position or the tail walks the chain.
pub trait List<T> {
    /// Borrowing head-to-tail iterator.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Get the number of values in the list
    fn len(&self) -> usize;

    /// Check if the list has no head
    fn is_empty(&self) -> bool;

    /// Link a new head
    fn push_front(&mut self, value: T);

    /// Link a new node after the current tail
    fn push_back(&mut self, value: T);

    /// Insert `value` so that it ends up at `index`.
    ///
    /// Every `index` in `0..=len` is accepted, including `0` on an empty list.
    /// Anything larger is rejected and the value is handed back in the error.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>>;

    /// Detach the head and return its value
    fn pop_front(&mut self) -> Option<T>;

    /// Detach the tail and return its value
    fn pop_back(&mut self) -> Option<T>;

    /// Detach the node at `index` and return its value
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Get an iterator over the values, head first
    fn iter(&self) -> Self::Iter<'_>;

    /// Release every node, head first
    fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Find the lowest position holding a value equal to `key`
    fn position(&self, key: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == key)
    }
}
