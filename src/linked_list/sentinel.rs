//! The sentinel surface: positional operations that never fail.
//!
//! Every operation here absorbs invalid input. Writes outside the list are
//! dropped, removals outside the list do nothing, and reads outside the list
//! return `T::default()`. A caller therefore cannot tell an empty list from
//! one that stores the default value; [`List`] offers the same operations
//! with `Option` and `Result` when that matters.

use core::fmt;

use log::trace;

use super::{print::Summary, traits::List};

/// Signed, sentinel-returning operations over any [`List`].
///
/// Positions are `isize` so negative input is representable and rejected
/// like any other out-of-range position.
pub trait SentinelList<T>: List<T> {
    /// The number of values in the list
    fn size(&self) -> usize {
        self.len()
    }

    /// Whether the list has no head
    fn empty(&self) -> bool {
        self.is_empty()
    }

    fn insert_start(&mut self, value: T) {
        self.push_front(value);
    }

    fn insert_end(&mut self, value: T) {
        self.push_back(value);
    }

    /// Insert `value` at position `j`.
    ///
    /// Nothing happens, and `value` is dropped, when the list is empty or `j`
    /// lies outside `0..=size`. The empty check comes first, so even `j == 0`
    /// is refused on an empty list.
    fn insert_at(&mut self, value: T, j: isize) {
        let size = self.len();
        let index = match usize::try_from(j) {
            Ok(index) if !self.is_empty() && index <= size => index,
            _ => {
                trace!("insert_at: position {j} rejected for list of size {size}, value dropped");
                return;
            }
        };
        if let Err(err) = self.try_insert(index, value) {
            trace!("insert_at: {err}, value dropped");
        }
    }

    fn remove_start(&mut self) {
        if self.pop_front().is_none() {
            trace!("remove_start: list is empty");
        }
    }

    fn remove_end(&mut self) {
        if self.pop_back().is_none() {
            trace!("remove_end: list is empty");
        }
    }

    /// Remove the value at position `j`; nothing happens outside `0..size`.
    fn remove_at(&mut self, j: isize) {
        let removed = usize::try_from(j).ok().and_then(|index| self.remove(index));
        if removed.is_none() {
            trace!("remove_at: position {j} rejected for list of size {}", self.len());
        }
    }

    /// The head value, or `T::default()` on an empty list.
    fn get_first(&self) -> T
    where
        T: Clone + Default,
    {
        self.first().cloned().unwrap_or_default()
    }

    /// The tail value, or `T::default()` on an empty list.
    fn get_last(&self) -> T
    where
        T: Clone + Default,
    {
        self.last().cloned().unwrap_or_default()
    }

    /// The value at position `j`, or `T::default()` outside `0..size`.
    fn get_at(&self, j: isize) -> T
    where
        T: Clone + Default,
    {
        usize::try_from(j)
            .ok()
            .and_then(|index| self.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// The lowest position holding `key`, or -1.
    fn find(&self, key: &T) -> isize
    where
        T: PartialEq,
    {
        self.position(key)
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// A displayable `"<name>: size = <n>, values = <v0> <v1> ... "` line.
    fn summary<'a>(&'a self, name: &'a str) -> Summary<'a, Self, T>
    where
        Self: Sized,
        T: fmt::Display,
    {
        Summary::new(name, self)
    }

    /// Write the summary line, followed by a line break, to `out`.
    fn write_summary<W: fmt::Write>(&self, name: &str, out: &mut W) -> fmt::Result
    where
        Self: Sized,
        T: fmt::Display,
    {
        writeln!(out, "{}", self.summary(name))
    }

    /// Print the summary line to stdout.
    #[cfg(feature = "std")]
    fn print(&self, name: &str)
    where
        Self: Sized,
        T: fmt::Display,
    {
        std::println!("{}", self.summary(name));
    }
}

impl<T, L> SentinelList<T> for L where L: List<T> + ?Sized {}
