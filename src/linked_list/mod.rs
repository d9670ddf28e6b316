//! Singly linked lists.
//!
//! A list is a chain of nodes. The list owns the head, every node owns the
//! next one, and the last node links to nothing. Two representations share
//! the same behaviour:
//!
//! - [`list::LinkedList`]: every node is a separate heap allocation.
//! - [`arena::ArenaList`]: nodes live in a slot arena and link by index;
//!   released slots are recycled through a free list.
//!
//! Both are driven through two traits:
//!
//! - [`traits::List`]: positions are `usize`, absence is `Option`, and a
//!   rejected insertion hands the value back in an [`error::InsertError`].
//! - [`sentinel::SentinelList`]: positions are `isize`, nothing ever fails,
//!   and reads outside the list return `T::default()`. It is implemented for
//!   every `List`.
//!
//! # Examples
//!
//! ```
//! use mola_list::{LinkedList, List, SentinelList};
//!
//! let mut list = LinkedList::new();
//! list.insert_end(1);
//! list.insert_end(2);
//! list.insert_end(3);
//!
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.get_at(1), 2);
//! assert_eq!(list.find(&2), 1);
//! assert_eq!(list.find(&9), -1);
//!
//! list.remove_at(1);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//!
//! // Out of range: the sentinel surface shrugs, the checked one reports.
//! assert_eq!(list.get_at(7), 0);
//! assert_eq!(list.get(7), None);
//! let err = list.try_insert(7, 42).unwrap_err();
//! assert_eq!(err.into_inner(), 42);
//! ```
//!
//! ```
//! use mola_list::{ArenaList, SentinelList};
//!
//! let mut list = ArenaList::with_capacity(4);
//! list.insert_start(2);
//! list.insert_start(1);
//! list.insert_at(3, 2);
//!
//! let mut line = String::new();
//! list.write_summary("arena", &mut line).unwrap();
//! assert_eq!(line, "arena: size = 3, values = 1 2 3 \n");
//! ```

pub mod arena;
pub mod error;
pub mod iter;
pub mod list;
pub mod print;
pub mod sentinel;
pub mod traits;

mod node;

#[cfg(test)]
mod tests;
