use crate::list::arena::NodeId;
use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the tail sentinel of the list.
///
/// Moving backward is *O*(1) on a doubly-linked list; the other topologies
/// find the predecessor by a scan from the head sentinel.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The tail sentinel
/// of the list is denoted by `#`).
/// ```
/// use sentinel_list::{List, Topology};
///
/// // Create a list: [ A B C D #]
/// let list = List::from_elements(Topology::Doubly, ['A', 'B', 'C', 'D']).unwrap();
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Move to the end and forward, cyclically: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NodeId,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self::new(self.list, self.current, self.index)
    }
}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use sentinel_list::{List, Topology};
///
/// let list = List::from_elements(Topology::Singly, [1, 2, 3]).unwrap();
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// cursor2.move_next_cyclic();
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.index)
            .field(&self.current())
            .finish()
    }
}

// Private methods
impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NodeId, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    pub(crate) fn is_end_node(&self) -> bool {
        self.list.is_end(self.current)
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Whether stepping backward follows a stored link.
    fn has_backward_links(&self) -> bool {
        self.list.prev_node(self.list.tail_node()).is_some()
    }

    /// Move by `steps` without crossing a sentinel; callers check the bounds.
    fn seek_forward_fast(&mut self, steps: usize) {
        self.index += steps;
        (0..steps).for_each(|_| self.current = self.list.next_node(self.current));
    }

    fn seek_backward_fast(&mut self, steps: usize) {
        self.index -= steps;
        (0..steps).for_each(|_| self.current = self.list.predecessor_of(self.current));
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    /// Return the index of the cursor
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the `List` is empty. See [`List::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Move the cursor to the next position; from the end position it wraps
    /// to the first element.
    ///
    /// On a circular list this is the ring edge, tail sentinel to head sentinel
    /// to front. The other topologies have no such edge and simply restart.
    pub fn move_next_cyclic(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.is_end_node() {
            self.move_to_start();
        } else {
            self.seek_forward_fast(1);
        }
    }

    /// Move the cursor to the next position, or return an error
    /// when it would pass the end position.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_next(&mut self) -> Result<(), &'static str> {
        if self.is_end_node() {
            return Err("`move_next` across the tail sentinel");
        }
        self.seek_forward_fast(1);
        Ok(())
    }

    /// Move the cursor to the previous position, or return an error
    /// when it would pass the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let list = List::from_elements(Topology::Singly, [1, 2, 3]).unwrap();
    /// let mut cursor = list.cursor_start();
    ///
    /// // Forbid to move passing through the head sentinel
    /// assert!(cursor.move_prev().is_err());
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn move_prev(&mut self) -> Result<(), &'static str> {
        if self.index == 0 {
            return Err("`move_prev` across the head sentinel");
        }
        self.seek_backward_fast(1);
        Ok(())
    }

    /// Move forward the cursor by given steps, or return an error
    /// when it would pass the end position.
    ///
    /// If an error occurs, the cursor will stay at the end position.
    pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
        (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
    }

    /// Move backward the cursor by given steps, or return an error
    /// when it would pass the first element.
    ///
    /// If an error occurs, the cursor will stay at the first element.
    pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
        (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
    }

    /// Move the cursor to the given position `target`, or return an error
    /// when `target > len`.
    ///
    /// If an error occurs, the cursor will stay put.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let list = List::from_elements(Topology::Circular, [1, 2, 3]).unwrap();
    /// let mut cursor = list.cursor_start();
    ///
    /// assert!(cursor.seek_to(2).is_ok());
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(cursor.seek_to(5), Err(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// ```
    pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
        let len = self.list.len();
        if target > len {
            return Err(target - len);
        }
        if target == self.index {
            return Ok(());
        }
        if target == len {
            self.move_to_end();
            return Ok(());
        }
        // current=c, target=t, tail=#
        if target > self.index {
            if self.has_backward_links() && len - target < target - self.index {
                // target is far from the right side of current: [ c     t<--#]
                self.move_to_end();
                self.seek_backward_fast(len - target);
            } else {
                // [    c-->t     #]
                self.seek_forward_fast(target - self.index);
            }
        } else if self.has_backward_links() && self.index - target <= target {
            // target is near the left side of current: [    t<--c     #]
            self.seek_backward_fast(self.index - target);
        } else {
            // [-->t      c #]
            self.move_to_start();
            self.seek_forward_fast(target);
        }
        Ok(())
    }

    /// Set the cursor to the start of the list (i.e. the first element).
    #[inline]
    pub fn move_to_start(&mut self) {
        self.index = 0;
        self.current = self.list.front_node();
    }

    /// Set the cursor to the end of the list (i.e. the tail sentinel).
    #[inline]
    pub fn move_to_end(&mut self) {
        self.index = self.list.len();
        self.current = self.list.tail_node();
    }

    /// Provides a reference to the element under the cursor, or `None` at
    /// the end position.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        self.list.element(self.current)
    }

    /// Provides a reference to the element after the cursor, or `None` if
    /// the cursor is at the last element or the end position.
    pub fn peek_next(&self) -> Option<&'a T> {
        if self.is_end_node() {
            return None;
        }
        self.list.element(self.list.next_node(self.current))
    }
}
