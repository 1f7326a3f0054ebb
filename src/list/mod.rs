use std::fmt::{Debug, Formatter};

use crate::error::{ListError, Result};
use crate::identity::Identity;
use crate::list::arena::{Arena, NodeId, NIL};
use crate::list::cursor::Cursor;
use crate::list::topology::{Topology, Wiring};
use crate::{Iter, IterRev};

pub mod cursor;
pub mod iterator;
pub mod topology;

pub(crate) mod arena;

pub(crate) mod algorithms;

/// Sentinel indices of a freshly created list. [`List::reverse`] swaps their
/// roles, so the list keeps its own `head`/`tail` fields.
const HEAD: NodeId = 0;
const TAIL: NodeId = 1;

/// The `List` is a linked list of one of three topologies ([`Topology`]),
/// bounded by a head and a tail sentinel node.
///
/// Nodes live in an index arena: a node is addressed by a stable index, and
/// the sentinels are two reserved indices without payload. Walking the list
/// never dereferences a null link; a walk ends when it reaches the tail
/// sentinel.
///
/// Elements are looked up by identity (see [`Identity`]) in the
/// identity-relative operations, and by position in the positional ones.
///
/// # Naming Conventions
///
/// - `front`/`back`: the first and the last element;
/// - `before`/`after`: the neighbours of an anchor element;
/// - `at`: a 0-based position.
pub struct List<T> {
    arena: Arena<T>,
    head: NodeId,
    tail: NodeId,
    /// the number of elements, sentinels excluded
    len: usize,
    topology: Topology,
}

/// Where an anchor was found by a forward scan.
pub(crate) struct Found {
    /// The predecessor of `prev`, or `NIL` if `prev` is the head sentinel.
    pub(crate) before_prev: NodeId,
    pub(crate) prev: NodeId,
    pub(crate) node: NodeId,
}

// private methods
impl<T> List<T> {
    fn from_arena(mut arena: Arena<T>, topology: Topology) -> Self {
        topology.wiring().seal(&mut arena.links, HEAD, TAIL);
        Self {
            arena,
            head: HEAD,
            tail: TAIL,
            len: 0,
            topology,
        }
    }

    #[inline]
    pub(crate) fn wiring(&self) -> &'static dyn Wiring {
        self.topology.wiring()
    }

    #[inline]
    pub(crate) fn next_node(&self, id: NodeId) -> NodeId {
        self.wiring().advance(&self.arena.links, id)
    }

    #[inline]
    pub(crate) fn prev_node(&self, id: NodeId) -> Option<NodeId> {
        self.wiring().backward(&self.arena.links, id)
    }

    #[inline]
    pub(crate) fn is_end(&self, id: NodeId) -> bool {
        self.wiring().is_boundary(self.head, self.tail, id)
    }

    pub(crate) fn tail_node(&self) -> NodeId {
        self.tail
    }

    /// The first real node, or the tail sentinel if the list is empty.
    pub(crate) fn front_node(&self) -> NodeId {
        self.next_node(self.head)
    }

    /// The node linking forward to `id`; *O*(1) only with backward links.
    pub(crate) fn predecessor_of(&self, id: NodeId) -> NodeId {
        self.wiring().predecessor(&self.arena.links, self.head, id)
    }

    /// The last real node, or the head sentinel if the list is empty.
    pub(crate) fn back_node(&self) -> NodeId {
        self.predecessor_of(self.tail)
    }

    /// The node linking to the last real node, found in one pass.
    ///
    /// The list must not be empty.
    fn node_before_back(&self) -> NodeId {
        if let Some(back) = self.prev_node(self.tail) {
            return self.predecessor_of(back);
        }
        let (mut prev, mut node) = (self.head, self.front_node());
        while !self.is_end(self.next_node(node)) {
            prev = node;
            node = self.next_node(node);
        }
        prev
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<&T> {
        self.arena.element(id)
    }

    /// The node after which position `at` begins: the head sentinel for 0,
    /// otherwise the node at `at - 1`.
    fn node_before(&self, at: usize) -> NodeId {
        debug_assert!(at <= self.len);
        if at == 0 {
            return self.head;
        }
        let mut cursor = self.cursor_start();
        // `at - 1 < len`, so seeking cannot fail.
        let _ = cursor.seek_to(at - 1);
        cursor.current
    }

    /// Scan forward for the first node holding `anchor`.
    pub(crate) fn find(&self, anchor: &T) -> Option<Found>
    where
        T: Identity,
    {
        let (mut before_prev, mut prev) = (NIL, self.head);
        let mut node = self.front_node();
        while !self.is_end(node) {
            if self.element(node).map_or(false, |e| e.is_same(anchor)) {
                return Some(Found {
                    before_prev,
                    prev,
                    node,
                });
            }
            before_prev = prev;
            prev = node;
            node = self.next_node(node);
        }
        None
    }

    /// Allocate a node for `element` and link it right after `at`.
    ///
    /// `at` must not be the tail sentinel.
    fn attach_after(&mut self, at: NodeId, element: T) -> Result<NodeId> {
        debug_assert_ne!(at, self.tail, "cannot attach after the tail sentinel");
        let node = self.arena.alloc(Some(element))?;
        self.wiring().link_after(&mut self.arena.links, at, node);
        self.len += 1;
        Ok(node)
    }

    /// Unlink the node right after `at` and release it, returning its element.
    ///
    /// Returns `None`, without touching the list, if the node after `at` is a
    /// sentinel.
    fn detach_after(&mut self, at: NodeId) -> Option<T> {
        let node = self.next_node(at);
        if self.is_end(node) {
            return None;
        }
        self.wiring().unlink_after(&mut self.arena.links, at);
        self.len -= 1;
        self.arena.release(node)
    }

    fn out_of_range(&self, op: &str, position: usize) -> ListError {
        log::debug!(
            "{}: position {} is out of range for length {}",
            op,
            position,
            self.len
        );
        ListError::OutOfRange {
            position,
            len: self.len,
        }
    }

    fn check_not_empty(&self, op: &str) -> Result<()> {
        if self.is_empty() {
            log::debug!("{}: {} list is empty", op, self.topology);
            return Err(ListError::EmptyList);
        }
        Ok(())
    }
}

// construction, teardown and queries
impl<T> List<T> {
    /// Create an empty `List` of the given topology.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let list: List<&str> = List::new(Topology::Circular);
    /// assert!(list.is_empty());
    /// assert_eq!(list.topology(), Topology::Circular);
    /// ```
    #[inline]
    pub fn new(topology: Topology) -> Self {
        Self::from_arena(Arena::with_sentinels(), topology)
    }

    /// Like [`List::new`], but reports allocation failure as
    /// [`ListError::OutOfMemory`] instead of aborting.
    pub fn try_new(topology: Topology) -> Result<Self> {
        Ok(Self::from_arena(Arena::try_with_sentinels()?, topology))
    }

    /// Create a list of the given topology holding the elements of `iter`
    /// in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let list = List::from_elements(Topology::Singly, ["a", "b"]).unwrap();
    /// assert_eq!(list.get_back(), Ok(&"b"));
    /// ```
    pub fn from_elements<I>(topology: Topology, iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::try_new(topology)?;
        list.try_extend(iter)?;
        Ok(list)
    }

    /// Append every element of `iter`, locating the back of the list once.
    pub(crate) fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.arena.reserve(iter.size_hint().0)?;
        let mut back = self.back_node();
        for element in iter {
            back = self.attach_after(back, element)?;
        }
        Ok(())
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::new(Topology::Doubly);
    /// list.insert_front(2).unwrap();
    /// list.insert_back(3).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Removes all elements from the `List`, dropping them front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while self.detach_after(self.head).is_some() {}
    }

    /// Tear the list down, handing every element to `destructor` exactly once,
    /// front to back.
    ///
    /// Dropping a list is the default release: its elements are dropped in
    /// the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::new(Topology::Singly);
    /// list.insert_back(String::from("a")).unwrap();
    /// list.insert_back(String::from("b")).unwrap();
    ///
    /// let mut released = Vec::new();
    /// list.destroy(|s| released.push(s));
    /// assert_eq!(released, ["a", "b"]);
    /// ```
    pub fn destroy<F>(mut self, mut destructor: F)
    where
        F: FnMut(T),
    {
        while let Some(element) = self.detach_after(self.head) {
            destructor(element);
        }
    }

    /// Provides a cursor at the first element (the end position if the list
    /// is empty).
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the end position, i.e. the tail sentinel.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, self.len)
    }

    /// Provides a cursor at the given position; `at == len` is the end
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let list = List::from_elements(Topology::Doubly, [1, 2, 3]).unwrap();
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        if at > self.len {
            return Err(self.out_of_range("cursor", at));
        }
        let mut cursor = self.cursor_start();
        let _ = cursor.seek_to(at);
        Ok(cursor)
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides an iterator from the back to the front.
    ///
    /// A doubly-linked list follows its backward links; the other topologies
    /// collect the node indices in one forward pass first.
    #[inline]
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev::new(self)
    }
}

// head and tail mutation
impl<T> List<T> {
    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time for every topology.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::new(Topology::Singly);
    /// list.insert_front(2).unwrap();
    /// list.insert_front(1).unwrap();
    /// assert_eq!(list.get_front(), Ok(&1));
    /// ```
    pub fn insert_front(&mut self, element: T) -> Result<()> {
        self.attach_after(self.head, element).map(drop)
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// *O*(1) for a doubly-linked list, *O*(*n*) otherwise: no pointer to the
    /// last real node is kept, so it is found by a scan.
    pub fn insert_back(&mut self, element: T) -> Result<()> {
        let back = self.back_node();
        self.attach_after(back, element).map(drop)
    }

    /// Provides a reference to the front element, or
    /// [`ListError::EmptyList`].
    pub fn get_front(&self) -> Result<&T> {
        self.element(self.front_node()).ok_or(ListError::EmptyList)
    }

    /// Provides a reference to the back element, or
    /// [`ListError::EmptyList`].
    pub fn get_back(&self) -> Result<&T> {
        self.element(self.back_node()).ok_or(ListError::EmptyList)
    }

    /// Removes the first element and returns it.
    pub fn delete_front(&mut self) -> Result<T> {
        self.check_not_empty("delete_front")?;
        self.detach_after(self.head).ok_or(ListError::EmptyList)
    }

    /// Removes the last element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError, Topology};
    ///
    /// let mut list = List::new(Topology::Doubly);
    /// assert_eq!(list.delete_back(), Err(ListError::EmptyList));
    ///
    /// list.insert_back(1).unwrap();
    /// list.insert_back(3).unwrap();
    /// assert_eq!(list.delete_back(), Ok(3));
    /// ```
    pub fn delete_back(&mut self) -> Result<T> {
        self.check_not_empty("delete_back")?;
        let prev = self.node_before_back();
        self.detach_after(prev).ok_or(ListError::EmptyList)
    }
}

// identity-relative mutation and access
impl<T: Identity> List<T> {
    /// Inserts `element` right before the first occurrence of `anchor`.
    ///
    /// On an empty list, `anchor` and `element` become the only two entries,
    /// as `[element, anchor]`.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if `anchor` is not in a non-empty list; the list
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let (a, b, c) = (&1, &2, &3);
    /// let mut list = List::new(Topology::Singly);
    /// list.insert_before(&c, a).unwrap();
    /// list.insert_before(&c, b).unwrap();
    /// assert!(list.iter().copied().eq([a, b, c].iter().copied()));
    /// ```
    pub fn insert_before(&mut self, anchor: &T, element: T) -> Result<()>
    where
        T: Clone,
    {
        if self.is_empty() {
            self.arena.reserve(2)?;
            self.insert_front(anchor.clone())?;
            return self.insert_front(element);
        }
        let found = self.find(anchor).ok_or_else(|| self.not_found("insert_before"))?;
        self.attach_after(found.prev, element).map(drop)
    }

    /// Inserts `element` right after the first occurrence of `anchor`.
    ///
    /// On an empty list, `anchor` and `element` become the only two entries,
    /// as `[anchor, element]`.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if `anchor` is not in a non-empty list; the list
    /// is left unchanged.
    pub fn insert_after(&mut self, anchor: &T, element: T) -> Result<()>
    where
        T: Clone,
    {
        if self.is_empty() {
            self.arena.reserve(2)?;
            self.insert_front(anchor.clone())?;
            return self.insert_back(element);
        }
        let found = self.find(anchor).ok_or_else(|| self.not_found("insert_after"))?;
        self.attach_after(found.node, element).map(drop)
    }

    /// Provides the element right before the first occurrence of `anchor`.
    pub fn get_before(&self, anchor: &T) -> Result<&T> {
        self.check_not_empty("get_before")?;
        let found = self.find(anchor).ok_or_else(|| self.not_found("get_before"))?;
        self.element(found.prev).ok_or(ListError::NotFound)
    }

    /// Provides the element right after the first occurrence of `anchor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError, Topology};
    ///
    /// let (a, b) = (&'a', &'b');
    /// let mut list = List::new(Topology::Circular);
    /// list.insert_after(&a, b).unwrap();
    /// assert_eq!(list.get_after(&a), Ok(&b));
    /// // nothing follows the last element, the ring edge is not crossed
    /// assert_eq!(list.get_after(&b), Err(ListError::NotFound));
    /// ```
    pub fn get_after(&self, anchor: &T) -> Result<&T> {
        self.check_not_empty("get_after")?;
        let found = self.find(anchor).ok_or_else(|| self.not_found("get_after"))?;
        self.element(self.next_node(found.node))
            .ok_or(ListError::NotFound)
    }

    /// Removes the first occurrence of `anchor` and returns it.
    pub fn delete(&mut self, anchor: &T) -> Result<T> {
        self.check_not_empty("delete")?;
        let found = self.find(anchor).ok_or_else(|| self.not_found("delete"))?;
        self.detach_after(found.prev).ok_or(ListError::NotFound)
    }

    /// Removes the element right before the first occurrence of `anchor`.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if `anchor` is absent or is the first element.
    pub fn delete_before(&mut self, anchor: &T) -> Result<T> {
        self.check_not_empty("delete_before")?;
        let found = self
            .find(anchor)
            .ok_or_else(|| self.not_found("delete_before"))?;
        if found.before_prev == NIL {
            return Err(self.not_found("delete_before"));
        }
        self.detach_after(found.before_prev)
            .ok_or(ListError::NotFound)
    }

    /// Removes the element right after the first occurrence of `anchor`.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if `anchor` is absent or is the last element.
    pub fn delete_after(&mut self, anchor: &T) -> Result<T> {
        self.check_not_empty("delete_after")?;
        let found = self
            .find(anchor)
            .ok_or_else(|| self.not_found("delete_after"))?;
        self.detach_after(found.node)
            .ok_or_else(|| self.not_found("delete_after"))
    }

    /// Returns `true` if the list holds `element`, scanning front to back.
    pub fn search(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Returns `true` if the list holds `element`, scanning back to front.
    pub fn search_reverse(&self, element: &T) -> bool {
        self.iter_rev().any(|e| e.is_same(element))
    }

    fn not_found(&self, op: &str) -> ListError {
        log::debug!("{}: anchor is not in the {} list", op, self.topology);
        ListError::NotFound
    }
}

// positional access
impl<T> List<T> {
    /// Adds an element at the given position. `at == 0` inserts at the front
    /// and `at == len` appends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError, Topology};
    ///
    /// let mut list = List::from_elements(Topology::Doubly, [1, 2, 3]).unwrap();
    /// list.insert_at(9, 1).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 9, 2, 3]);
    ///
    /// assert_eq!(
    ///     list.insert_at(7, 5),
    ///     Err(ListError::OutOfRange { position: 5, len: 4 })
    /// );
    /// ```
    pub fn insert_at(&mut self, element: T, at: usize) -> Result<()> {
        if at > self.len {
            return Err(self.out_of_range("insert_at", at));
        }
        let prev = self.node_before(at);
        self.attach_after(prev, element).map(drop)
    }

    /// Provides the element at the given position.
    ///
    /// A doubly-linked list walks from whichever end is closer.
    pub fn get_at(&self, at: usize) -> Result<&T> {
        if at >= self.len {
            return Err(self.out_of_range("get_at", at));
        }
        self.cursor(at)?
            .current()
            .ok_or_else(|| self.out_of_range("get_at", at))
    }

    /// Removes the element at the given position and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::from_elements(Topology::Singly, [1, 9, 2, 3]).unwrap();
    /// assert_eq!(list.delete_at(0), Ok(1));
    /// assert_eq!(list.get_at(0), Ok(&9));
    /// ```
    pub fn delete_at(&mut self, at: usize) -> Result<T> {
        if at >= self.len {
            return Err(self.out_of_range("delete_at", at));
        }
        let prev = self.node_before(at);
        self.detach_after(prev)
            .ok_or_else(|| self.out_of_range("delete_at", at))
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An empty doubly-linked list.
impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new(Topology::Doubly)
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::topology::Topology;
    use crate::list::List;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TOPOLOGIES: [Topology; 3] = [Topology::Singly, Topology::Doubly, Topology::Circular];

    fn to_vec<T: Copy>(list: &List<&T>) -> Vec<T> {
        list.iter().map(|e| **e).collect()
    }

    #[test]
    fn list_create() {
        for &topology in &TOPOLOGIES {
            let mut list = List::<i32>::new(topology);
            assert!(list.is_empty());
            assert_eq!(list.topology(), topology);
            list.insert_back(1).unwrap();
            assert!(!list.is_empty());
            assert_eq!(list.delete_back(), Ok(1));
            assert!(list.is_empty());

            let list = List::<i32>::try_new(topology).unwrap();
            assert_eq!(list.len(), 0);
        }
    }

    #[test]
    fn list_drop() {
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        for &topology in &TOPOLOGIES {
            let dropped = RefCell::new(Vec::<i32>::new());
            let mut list = List::new(topology);
            list.insert_back(DropChecker::new(2, &dropped)).unwrap();
            list.insert_back(DropChecker::new(3, &dropped)).unwrap();
            list.insert_front(DropChecker::new(1, &dropped)).unwrap();
            drop(list);
            assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
        }
    }

    #[test]
    fn list_destroy_visits_each_element_once() {
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            for i in 0..5 {
                list.insert_back(i).unwrap();
            }
            let mut seen = Vec::new();
            list.destroy(|e| seen.push(e));
            assert_eq!(seen, [0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn list_front_and_back() {
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            assert_eq!(list.get_front(), Err(ListError::EmptyList));
            assert_eq!(list.get_back(), Err(ListError::EmptyList));
            assert_eq!(list.delete_front(), Err(ListError::EmptyList));
            assert_eq!(list.delete_back(), Err(ListError::EmptyList));

            list.insert_back(1).unwrap();
            assert_eq!(list.get_back(), Ok(&1));
            assert_eq!(list.delete_front(), Ok(1));
            assert_eq!(list.delete_back(), Err(ListError::EmptyList));
            assert!(list.is_empty());

            list.insert_front(1).unwrap();
            list.insert_front(2).unwrap();
            list.insert_back(3).unwrap();
            assert_eq!(list.get_back(), Ok(&3));
            assert_eq!(list.get_front(), Ok(&2));
            assert_eq!(list.delete_front(), Ok(2));
            assert_eq!(list.delete_back(), Ok(3));
            assert_eq!(list.get_front(), Ok(&1));
            assert_eq!(list.get_back(), Ok(&1));
            assert_eq!(list.delete_back(), Ok(1));
            assert!(list.is_empty());

            // the sentinels survive emptying and refilling
            list.insert_back(4).unwrap();
            list.insert_back(5).unwrap();
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), [4, 5]);
        }
    }

    #[test]
    fn list_delete_back_drains_in_reverse() {
        for &topology in &TOPOLOGIES {
            let mut list = List::from_elements(topology, 0..6).unwrap();
            list.reverse().unwrap();
            list.insert_front(6).unwrap();
            let mut drained = Vec::new();
            while let Ok(element) = list.delete_back() {
                drained.push(element);
                assert_eq!(list.iter_rev().count(), list.len());
            }
            assert_eq!(drained, [0, 1, 2, 3, 4, 5, 6]);
            list.insert_back(7).unwrap();
            assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), [7]);
        }
    }

    #[test]
    fn list_len_counts_inserts_minus_deletes() {
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            let mut expected = 0;
            for i in 0..20 {
                if i % 3 == 2 {
                    list.delete_back().unwrap();
                    expected -= 1;
                } else if i % 2 == 0 {
                    list.insert_front(i).unwrap();
                    expected += 1;
                } else {
                    list.insert_back(i).unwrap();
                    expected += 1;
                }
                assert_eq!(list.len(), expected);
                assert_eq!(list.is_empty(), expected == 0);
                assert_eq!(list.iter().count(), expected);
            }
        }
    }

    #[test]
    fn list_insert_relative_to_anchor() {
        let values = [0, 1, 2, 3, 4];
        let [a, b, c, d, e] = [&values[0], &values[1], &values[2], &values[3], &values[4]];
        let stranger = 9;
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            list.insert_after(&a, c).unwrap();
            assert_eq!(to_vec(&list), [0, 2]);
            list.insert_before(&c, b).unwrap();
            list.insert_after(&c, e).unwrap();
            list.insert_before(&e, d).unwrap();
            assert_eq!(to_vec(&list), [0, 1, 2, 3, 4]);

            assert_eq!(list.insert_after(&&stranger, a), Err(ListError::NotFound));
            assert_eq!(list.insert_before(&&stranger, a), Err(ListError::NotFound));
            assert_eq!(list.len(), 5);

            let mut list = List::new(topology);
            list.insert_before(&b, a).unwrap();
            assert_eq!(to_vec(&list), [0, 1]);
        }
    }

    #[test]
    fn list_insert_relative_on_empty_keeps_call_order() {
        let (anchor, element) = (&1, &2);
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            list.insert_before(&anchor, element).unwrap();
            assert_eq!(to_vec(&list), [2, 1]);
            assert!(std::ptr::eq(*list.get_before(&anchor).unwrap(), element));

            let mut list = List::new(topology);
            list.insert_after(&anchor, element).unwrap();
            assert_eq!(to_vec(&list), [1, 2]);
            assert!(std::ptr::eq(*list.get_after(&anchor).unwrap(), element));
            assert_eq!(list.get_back(), Ok(&element));
        }
    }

    #[test]
    fn list_anchor_is_matched_by_identity() {
        let first = Rc::new(5);
        let twin = Rc::new(5);
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            list.insert_back(Rc::clone(&first)).unwrap();
            assert!(list.search(&first));
            assert!(!list.search(&twin));
            assert_eq!(list.delete(&twin), Err(ListError::NotFound));
            assert!(Rc::ptr_eq(&list.delete(&first).unwrap(), &first));
        }
    }

    #[test]
    fn list_get_and_delete_neighbours() {
        let values = [10, 20, 30, 40];
        let [a, b, c, d] = [&values[0], &values[1], &values[2], &values[3]];
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            assert_eq!(list.get_after(&a), Err(ListError::EmptyList));
            assert_eq!(list.delete_before(&a), Err(ListError::EmptyList));
            list.try_extend(vec![a, b, c, d]).unwrap();

            assert_eq!(list.get_before(&c), Ok(&b));
            assert_eq!(list.get_after(&c), Ok(&d));
            assert_eq!(list.get_before(&a), Err(ListError::NotFound));
            assert_eq!(list.get_after(&d), Err(ListError::NotFound));

            assert_eq!(list.delete_before(&a), Err(ListError::NotFound));
            assert_eq!(list.delete_after(&d), Err(ListError::NotFound));
            assert_eq!(list.delete_before(&c), Ok(b));
            assert_eq!(to_vec(&list), [10, 30, 40]);
            assert_eq!(list.delete_after(&a), Ok(c));
            assert_eq!(to_vec(&list), [10, 40]);
            assert_eq!(list.delete_before(&d), Ok(a));
            assert_eq!(list.delete(&d), Ok(d));
            assert!(list.is_empty());
        }
    }

    #[test]
    fn list_delete_takes_first_occurrence() {
        let (x, y) = (&1, &2);
        for &topology in &TOPOLOGIES {
            let mut list = List::from_elements(topology, vec![y, x, y, x]).unwrap();
            assert_eq!(list.delete_after(&x), Ok(y));
            assert_eq!(to_vec(&list), [2, 1, 1]);
            assert_eq!(list.delete(&x), Ok(x));
            assert_eq!(to_vec(&list), [2, 1]);
        }
    }

    #[test]
    fn list_insert_after_then_get_after() {
        let values = [1, 2, 3, 4];
        for &topology in &TOPOLOGIES {
            let mut list = List::from_elements(topology, values.iter()).unwrap();
            let new = 8;
            for anchor in values.iter() {
                let mut list2 = List::from_elements(topology, list.iter().copied()).unwrap();
                list2.insert_after(&anchor, &new).unwrap();
                assert!(std::ptr::eq(*list2.get_after(&anchor).unwrap(), &new));
            }
            list.clear();
            assert!(list.is_empty());
        }
    }

    #[test]
    fn list_positional_access() {
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            list.insert_front(3).unwrap();
            list.insert_front(2).unwrap();
            list.insert_front(1).unwrap();
            list.insert_at(9, 1).unwrap();
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 9, 2, 3]);
            list.insert_at(0, 0).unwrap();
            list.insert_at(4, 5).unwrap();
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 9, 2, 3, 4]);

            for (i, expected) in [0, 1, 9, 2, 3, 4].iter().enumerate() {
                assert_eq!(list.get_at(i), Ok(expected));
            }
            assert_eq!(
                list.get_at(6),
                Err(ListError::OutOfRange {
                    position: 6,
                    len: 6
                })
            );
            assert_eq!(
                list.insert_at(7, 7),
                Err(ListError::OutOfRange {
                    position: 7,
                    len: 6
                })
            );
            assert_eq!(list.len(), 6);

            assert_eq!(list.delete_at(5), Ok(4));
            assert_eq!(list.delete_at(0), Ok(0));
            assert_eq!(list.delete_at(1), Ok(9));
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
            assert_eq!(
                list.delete_at(3),
                Err(ListError::OutOfRange {
                    position: 3,
                    len: 3
                })
            );
        }
    }

    #[test]
    fn list_positional_access_on_empty() {
        for &topology in &TOPOLOGIES {
            let mut list = List::<u8>::new(topology);
            let out_of_range = ListError::OutOfRange {
                position: 0,
                len: 0,
            };
            assert_eq!(list.get_at(0), Err(out_of_range.clone()));
            assert_eq!(list.delete_at(0), Err(out_of_range));
            assert_eq!(
                list.insert_at(1, 1),
                Err(ListError::OutOfRange {
                    position: 1,
                    len: 0
                })
            );
            list.insert_at(1, 0).unwrap();
            assert_eq!(list.get_at(0), Ok(&1));
        }
    }

    #[test]
    fn list_delete_at_shifts_following() {
        for &topology in &TOPOLOGIES {
            let mut list = List::from_elements(topology, 0..8).unwrap();
            for i in 0..4 {
                let next = *list.get_at(i + 1).unwrap();
                list.delete_at(i).unwrap();
                assert_eq!(list.get_at(i), Ok(&next));
            }
        }
    }

    #[test]
    fn list_search_both_directions() {
        let values = ['A', 'B', 'C', 'Z'];
        let [a, b, c, z] = [&values[0], &values[1], &values[2], &values[3]];
        for &topology in &TOPOLOGIES {
            let mut list = List::new(topology);
            assert!(!list.search(&a));
            assert!(!list.search_reverse(&a));
            list.insert_front(a).unwrap();
            list.insert_back(b).unwrap();
            list.insert_back(c).unwrap();
            assert_eq!(list.iter().map(|e| **e).collect::<String>(), "ABC");
            assert!(list.search(&b));
            assert!(list.search_reverse(&b));
            assert!(!list.search(&z));
            assert!(!list.search_reverse(&z));
        }
    }

    #[test]
    fn list_recycles_nodes() {
        let mut list = List::new(Topology::Singly);
        for round in 0..3 {
            for i in 0..10 {
                list.insert_back(round * 10 + i).unwrap();
            }
            for _ in 0..10 {
                list.delete_front().unwrap();
            }
        }
        assert!(list.is_empty());
        // two sentinels plus the ten slots reused every round
        assert_eq!(list.arena.links.len(), 12);
    }
}
