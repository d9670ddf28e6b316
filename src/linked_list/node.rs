use alloc::boxed::Box;

/// An owning link: the node it points at, or nothing past the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in a singly linked list.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    /// Split the node into its value and the rest of the chain.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>) {
        let Node { value, next } = *self;
        (value, next)
    }
}
