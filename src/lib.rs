//! Singly linked lists with positional and value-based access.
//!
//! See [`linked_list`] for the containers and the two access surfaces.
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod linked_list;

pub use linked_list::{
    arena::ArenaList,
    error::InsertError,
    list::LinkedList,
    sentinel::SentinelList,
    traits::List,
};
