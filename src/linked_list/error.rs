/// Returned by [`List::try_insert`](super::traits::List::try_insert) when the
/// position lies past the end of the list.
///
/// The rejected value travels back to the caller inside the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("insertion index (is {index}) should be <= len (is {len})")]
pub struct InsertError<T> {
    index: usize,
    len: usize,
    value: T,
}

impl<T> InsertError<T> {
    pub(crate) fn new(index: usize, len: usize, value: T) -> Self {
        Self { index, len, value }
    }

    /// The position that was asked for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the list at the time of the call.
    pub fn list_len(&self) -> usize {
        self.len
    }

    /// Recover the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}
