use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{self, FromIterator};
use std::mem;

use log::{debug, trace};

use crate::cursor::{Cursor, CursorMut};
use crate::iter::{IntoIter, Iter, IterMut};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}

/// An owning singly linked list.
///
/// The list's head link doubles as the before-begin anchor: a position that
/// holds no element but whose successor is the first element. Every
/// positional edit is expressed as "insert after" or "erase after" some
/// position, so the same code handles the front of the list and its middle.
///
/// There is no tail pointer. [`push_back`](ForwardList::push_back) walks the
/// whole chain; keep a [`CursorMut`] on the last element if you need cheap
/// appends.
pub struct ForwardList<T> {
    head: Link<T>,
    len: usize,
}

/// Returns the link that terminates the chain starting at `link`.
fn last_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

impl<T> ForwardList<T> {
    pub fn new() -> ForwardList<T> {
        ForwardList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Inserts `value` as the new first element in O(1).
    pub fn push_front(&mut self, value: T) {
        let new_node = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.len += 1;
    }

    /// Appends `value` after the current last element.
    ///
    /// This walks the whole chain and is O(n).
    pub fn push_back(&mut self, value: T) {
        *last_link(&mut self.head) = Some(Box::new(Node::new(value, None)));
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Removes every element, front to back.
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len);
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists without touching any element.
    pub fn swap(&mut self, other: &mut ForwardList<T>) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// A read-only cursor on the before-begin anchor.
    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::before_begin(&self.head)
    }

    /// A read-only cursor on the first element, or on the end if the list is
    /// empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::front(&self.head)
    }

    /// The past-the-end position. Every cursor that walks off the last
    /// element compares equal to this one.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::end()
    }

    /// A mutable cursor on the before-begin anchor. Inserting after it
    /// prepends, erasing after it removes the first element.
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::before_begin(&mut self.head, &mut self.len)
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::front(&mut self.head, &mut self.len)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.len)
    }

    /// A displayable dump of the chain: one line per node with the node's
    /// address, its successor's address and its value.
    pub fn details(&self) -> Details<'_, T> {
        Details { list: self }
    }

    /// Writes [`details`](ForwardList::details) to the `log` facade at debug
    /// level, one record per node.
    pub fn log_details(&self)
    where
        T: fmt::Debug,
    {
        debug!("list of {} elements", self.len);
        for node in self.nodes() {
            debug!("{}", NodeLine(node));
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

/// Swaps the contents of `lhs` and `rhs`. See [`ForwardList::swap`].
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        ForwardList::new()
    }
}

// Dropping the head box directly would recurse once per node.
impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> ForwardList<T> {
        trace!("deep copying {} elements", self.len);
        self.iter().cloned().collect()
    }

    /// Builds the copy first and only then swaps it in, so a panicking
    /// `T::clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = last_link(&mut self.head);
        for value in iter {
            link = &mut link.insert(Box::new(Node::new(value, None))).next;
            self.len += 1;
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ForwardList<T> {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> ForwardList<T> {
        let mut list = ForwardList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for ForwardList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

/// Diagnostic view returned by [`ForwardList::details`]. The format is meant
/// for humans and may change.
pub struct Details<'a, T> {
    list: &'a ForwardList<T>,
}

struct NodeLine<'a, T>(&'a Node<T>);

impl<T: fmt::Debug> fmt::Display for NodeLine<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0;
        write!(f, "{:p}->", node)?;
        match node.next.as_deref() {
            Some(next) => write!(f, "{:p}", next)?,
            None => f.write_str("null")?,
        }
        write!(f, " {:?}", node.value)
    }
}

impl<T: fmt::Debug> fmt::Display for Details<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.list.nodes() {
            writeln!(f, "{}", NodeLine(node))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: ForwardList<u32> = ForwardList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn push_front_and_back_keep_order() {
        let mut list = ForwardList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        assert_eq!(collect(&list), vec![0, 1, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&0));
    }

    #[test]
    fn pop_front_on_empty_is_a_no_op() {
        let mut list: ForwardList<u32> = ForwardList::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        list.push_front(7);
        assert_eq!(list.pop_front(), Some(7));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn array_literal_preserves_order() {
        let list = ForwardList::from(['a', 'b', 'c']);
        assert_eq!(collect(&list), vec!['a', 'b', 'c']);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn clear_twice_leaves_empty_list() {
        let mut list = ForwardList::from([1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn front_mut_edits_first_element() {
        let mut list = ForwardList::from([1, 2]);
        if let Some(first) = list.front_mut() {
            *first = 10;
        }
        assert_eq!(collect(&list), vec![10, 2]);
    }

    #[test]
    fn clone_is_independent() {
        let original = ForwardList::from([String::from("x"), String::from("y")]);
        let mut copy = original.clone();
        copy.push_front(String::from("w"));
        assert_eq!(original.len(), 2);
        assert_eq!(collect(&original), vec!["x", "y"]);
        assert_eq!(collect(&copy), vec!["w", "x", "y"]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = ForwardList::from([4, 5, 6]);
        let mut target = ForwardList::from([1]);
        target.clone_from(&source);
        assert_eq!(target, source);
        target.push_back(7);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn swap_exchanges_chains() {
        let mut a = ForwardList::from([1, 2, 3]);
        let mut b = ForwardList::from([9]);
        swap(&mut a, &mut b);
        assert_eq!(collect(&a), vec![9]);
        assert_eq!(collect(&b), vec![1, 2, 3]);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn comparisons_are_lexicographic() {
        assert_eq!(ForwardList::from([1, 2, 3]), ForwardList::from([1, 2, 3]));
        assert_ne!(ForwardList::from([1, 2]), ForwardList::from([1, 2, 3]));
        assert!(ForwardList::from([1, 2]) < ForwardList::from([1, 2, 3]));
        assert!(ForwardList::from([2]) > ForwardList::from([1, 9, 9]));
        assert!(ForwardList::from([1, 2]) <= ForwardList::from([1, 2]));
        assert!(ForwardList::<i32>::new() < ForwardList::from([0]));
    }

    #[test]
    fn extend_appends_after_existing_tail() {
        let mut list = ForwardList::from([1, 2]);
        list.extend(vec![3, 4]);
        list.extend(&[5]);
        assert_eq!(collect(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn display_separates_with_spaces() {
        let list = ForwardList::from([11, 21, 22]);
        assert_eq!(list.to_string(), "11 21 22");
        assert_eq!(ForwardList::<u8>::new().to_string(), "");
        assert_eq!(format!("{:?}", list), "[11, 21, 22]");
    }

    #[test]
    fn details_has_one_line_per_node() {
        let list = ForwardList::from([1, 2, 3]);
        let dump = list.details().to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" 1"));
        assert!(lines[2].contains("->null "));
        assert!(!lines[0].contains("null"));
    }

    #[test]
    fn equal_lists_hash_alike() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(ForwardList::from([1, 2]));

        let collected: ForwardList<i32> = vec![1, 2].into_iter().collect();
        let mut pushed = ForwardList::new();
        pushed.push_front(2);
        pushed.push_front(1);
        assert!(seen.contains(&collected));
        assert!(seen.contains(&pushed));
        assert!(!seen.contains(&ForwardList::from([1, 2, 3])));
        assert!(!seen.contains(&ForwardList::from([2, 1])));
        assert!(!seen.contains(&ForwardList::new()));
    }

    #[test]
    fn long_list_drops_without_overflowing_the_stack() {
        let mut list = ForwardList::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        let copy = list.clone();
        assert_eq!(copy.len(), 200_000);
        drop(list);
        drop(copy);
    }
}
