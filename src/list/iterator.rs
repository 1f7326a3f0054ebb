use crate::list::arena::{NodeId, NIL};
use crate::list::cursor::Cursor;
use crate::list::topology::Topology;
use crate::list::List;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `List`, front to back.
///
/// It walks a [`Cursor`] forward and counts down the elements it has left,
/// so it never has to look at a sentinel to know it is done.
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::{List, Topology};
///
/// let mut list = List::from_elements(Topology::Singly, [1, 2, 3]).unwrap();
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.insert_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            cursor: list.cursor_start(),
            remaining: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        self.clone().for_each(|element| {
            f.field(element);
        });
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor.current();
        let _ = self.cursor.move_next();
        self.remaining -= 1;
        current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An iterator over the elements of a `List`, back to front.
///
/// This `struct` is created by [`List::iter_rev`].
pub struct IterRev<'a, T: 'a> {
    list: &'a List<T>,
    walk: Walk,
    remaining: usize,
}

enum Walk {
    /// Follow the backward links from this node.
    Links(NodeId),
    /// Node indices collected front to back, popped from the end.
    Stack(Vec<NodeId>),
}

impl<'a, T: 'a> IterRev<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let walk = if let Some(back) = list.prev_node(list.tail_node()) {
            Walk::Links(back)
        } else {
            let mut ids = Vec::with_capacity(list.len());
            let mut id = list.front_node();
            while !list.is_end(id) {
                ids.push(id);
                id = list.next_node(id);
            }
            Walk::Stack(ids)
        };
        Self {
            list,
            walk,
            remaining: list.len(),
        }
    }
}

impl<'a, T: 'a> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = match &mut self.walk {
            Walk::Links(id) => {
                let current = *id;
                *id = self.list.prev_node(current).unwrap_or(NIL);
                current
            }
            Walk::Stack(ids) => ids.pop()?,
        };
        self.list.element(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterRev<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterRev<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.delete_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects into a doubly-linked list. Use [`List::from_elements`] to pick
/// another topology.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new(Topology::Doubly);
        list.extend(iter);
        list
    }
}

/// # Panics
///
/// Panics if a node cannot be allocated, like the standard collections do.
/// [`List::from_elements`] reports that case as an error instead.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend(iter) {
            panic!("cannot extend a {} list: {}", self.topology(), err);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
