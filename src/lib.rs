//! An owning singly linked list with a before-begin anchor.
//!
//! [`ForwardList`] keeps a chain of boxed nodes and a cached length. Besides
//! the usual front operations it offers positional editing through
//! [`CursorMut`]: every edit inserts or erases the element *after* the
//! cursor, and the before-begin position makes that work at the very front
//! too.
//!
//! ```
//! use forward_list::{forward_list, ForwardList};
//!
//! let mut list: ForwardList<i32> = forward_list![1, 2];
//! list.push_front(0);
//!
//! let mut cursor = list.cursor_before_begin_mut();
//! cursor.insert_after(-1)?;
//! cursor.move_next()?;
//! assert_eq!(cursor.erase_after()?, Some(0));
//!
//! assert_eq!(list.to_string(), "-1 1 2");
//! # Ok::<(), forward_list::ListError>(())
//! ```
//!
//! Misusing a position (advancing past the end, inserting or erasing after
//! it) returns a [`ListError`] instead of touching the chain.

mod cursor;
mod error;
mod forward_list;
mod iter;

pub use crate::cursor::{Cursor, CursorMut};
pub use crate::error::ListError;
pub use crate::forward_list::{swap, Details, ForwardList};
pub use crate::iter::{IntoIter, Iter, IterMut};

/// Builds a [`ForwardList`] from a literal sequence, keeping the written
/// order.
///
/// ```
/// use forward_list::forward_list;
///
/// let list = forward_list!["a", "b", "c"];
/// assert_eq!(list.front(), Some(&"a"));
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::ForwardList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ForwardList::from([$($value),+])
    };
}
