//! Positions inside a [`ForwardList`](crate::ForwardList).
//!
//! A cursor sits on one of three kinds of position: the before-begin anchor,
//! a live element, or the past-the-end marker. Cursors borrow the list, so a
//! cursor can never outlive the list or observe a node that was freed.
//!
//! [`CursorMut`] is the only way to edit the middle of a list. Its edits
//! happen after the cursor: [`insert_after`](CursorMut::insert_after) and
//! [`erase_after`](CursorMut::erase_after) leave the cursor where it is and
//! change its successor.

use std::fmt;
use std::mem;
use std::ptr;

use log::debug;

use crate::error::ListError;
use crate::forward_list::{Link, Node};

enum Position<'a, T> {
    BeforeBegin(&'a Link<T>),
    At(&'a Node<T>),
    End,
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

fn enter<T>(link: &Link<T>) -> Position<'_, T> {
    match link.as_deref() {
        Some(node) => Position::At(node),
        None => Position::End,
    }
}

/// A read-only position in a list.
///
/// `Cursor` is `Copy`: keep a copy to remember a position while advancing
/// the original. Two cursors are equal when they sit on the same position of
/// the same chain; all past-the-end cursors are equal.
pub struct Cursor<'a, T> {
    position: Position<'a, T>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn before_begin(head: &'a Link<T>) -> Cursor<'a, T> {
        Cursor {
            position: Position::BeforeBegin(head),
        }
    }

    pub(crate) fn front(head: &'a Link<T>) -> Cursor<'a, T> {
        Cursor {
            position: enter(head),
        }
    }

    pub(crate) fn end() -> Cursor<'a, T> {
        Cursor {
            position: Position::End,
        }
    }

    /// The element under the cursor. `None` on the anchor and on the end.
    pub fn current(&self) -> Option<&'a T> {
        match self.position {
            Position::At(node) => Some(&node.value),
            _ => None,
        }
    }

    /// The element the cursor would reach with one [`move_next`](Cursor::move_next).
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = match self.position {
            Position::BeforeBegin(head) => head.as_deref(),
            Position::At(node) => node.next.as_deref(),
            Position::End => None,
        };
        next.map(|node| &node.value)
    }

    /// Advances one position. Fails if the cursor is already past the end.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.position = match self.position {
            Position::BeforeBegin(head) => enter(head),
            Position::At(node) => enter(&node.next),
            Position::End => return Err(ListError::AdvancePastEnd),
        };
        Ok(())
    }

    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.position, other.position) {
            (Position::BeforeBegin(a), Position::BeforeBegin(b)) => ptr::eq(a, b),
            (Position::At(a), Position::At(b)) => ptr::eq(a, b),
            (Position::End, Position::End) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::BeforeBegin(_) => f.write_str("Cursor(BeforeBegin)"),
            Position::At(node) => f.debug_tuple("Cursor").field(&node.value).finish(),
            Position::End => f.write_str("Cursor(End)"),
        }
    }
}

enum PositionMut<'a, T> {
    BeforeBegin(&'a mut Link<T>),
    At(&'a mut Node<T>),
    End,
}

fn enter_mut<T>(link: &mut Link<T>) -> PositionMut<'_, T> {
    match link.as_deref_mut() {
        Some(node) => PositionMut::At(node),
        None => PositionMut::End,
    }
}

/// The link that holds the successor of `position`, if the position has one.
fn successor_link<'b, T>(position: &'b mut PositionMut<'_, T>) -> Option<&'b mut Link<T>> {
    match position {
        PositionMut::BeforeBegin(head) => Some(&mut **head),
        PositionMut::At(node) => Some(&mut node.next),
        PositionMut::End => None,
    }
}

/// A position in a list that can edit the chain after itself.
///
/// Holding a `CursorMut` borrows the list mutably; the list's length is kept
/// in step with every edit made through the cursor.
pub struct CursorMut<'a, T> {
    position: PositionMut<'a, T>,
    len: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn before_begin(head: &'a mut Link<T>, len: &'a mut usize) -> CursorMut<'a, T> {
        CursorMut {
            position: PositionMut::BeforeBegin(head),
            len,
        }
    }

    pub(crate) fn front(head: &'a mut Link<T>, len: &'a mut usize) -> CursorMut<'a, T> {
        CursorMut {
            position: enter_mut(head),
            len,
        }
    }

    pub fn current(&self) -> Option<&T> {
        match &self.position {
            PositionMut::At(node) => Some(&node.value),
            _ => None,
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        match &mut self.position {
            PositionMut::At(node) => Some(&mut node.value),
            _ => None,
        }
    }

    pub fn peek_next(&self) -> Option<&T> {
        let next = match &self.position {
            PositionMut::BeforeBegin(head) => head.as_deref(),
            PositionMut::At(node) => node.next.as_deref(),
            PositionMut::End => None,
        };
        next.map(|node| &node.value)
    }

    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        successor_link(&mut self.position)
            .and_then(|link| link.as_deref_mut())
            .map(|node| &mut node.value)
    }

    /// Advances one position. Fails if the cursor is already past the end.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.position = match mem::replace(&mut self.position, PositionMut::End) {
            PositionMut::BeforeBegin(head) => enter_mut(head),
            PositionMut::At(node) => enter_mut(&mut node.next),
            PositionMut::End => return Err(ListError::AdvancePastEnd),
        };
        Ok(())
    }

    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, PositionMut::BeforeBegin(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, PositionMut::End)
    }

    /// A read-only view of the same position, borrowed from this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        match &self.position {
            PositionMut::BeforeBegin(head) => Cursor::before_begin(head),
            PositionMut::At(node) => Cursor {
                position: Position::At(&**node),
            },
            PositionMut::End => Cursor::end(),
        }
    }

    /// Splices `value` in directly after the cursor in O(1) and returns a
    /// reference to it. The cursor does not move; the new element becomes
    /// its successor.
    pub fn insert_after(&mut self, value: T) -> Result<&mut T, ListError> {
        let link = successor_link(&mut self.position).ok_or(ListError::InsertAfterEnd)?;
        let next = link.take();
        let node = link.insert(Box::new(Node::new(value, next)));
        *self.len += 1;
        Ok(&mut node.value)
    }

    /// Unlinks and returns the cursor's successor in O(1).
    ///
    /// When the cursor is on the last element there is nothing to remove:
    /// the call returns `Ok(None)` and the list's length is unchanged.
    pub fn erase_after(&mut self) -> Result<Option<T>, ListError> {
        let link = successor_link(&mut self.position).ok_or(ListError::EraseAfterEnd)?;
        match link.take() {
            Some(node) => {
                let Node { value, next } = *node;
                *link = next;
                *self.len -= 1;
                Ok(Some(value))
            }
            None => {
                debug!("erase_after on the last position, nothing removed");
                Ok(None)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_cursor(), f)
    }
}
