use core::{fmt, marker::PhantomData};

use super::traits::List;

/// Displays a named list as `"<name>: size = <n>, values = <v0> <v1> ... "`.
///
/// Every value is followed by a single space, so the line keeps a trailing
/// space whenever the list is non-empty.
pub struct Summary<'a, L, T> {
    name: &'a str,
    list: &'a L,
    _marker: PhantomData<T>,
}

impl<'a, L, T> Summary<'a, L, T>
where
    L: List<T>,
{
    pub(crate) fn new(name: &'a str, list: &'a L) -> Self {
        Self {
            name,
            list,
            _marker: PhantomData,
        }
    }
}

impl<L, T> fmt::Display for Summary<'_, L, T>
where
    L: List<T>,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: size = {}, values = ", self.name, self.list.len())?;
        for value in self.list.iter() {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}
