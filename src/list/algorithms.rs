use crate::error::{ListError, Result};
use crate::identity::Identity;
use crate::list::arena::NIL;
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub(crate) mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    /// Lists are equal if they hold equal elements in the same order;
    /// the topology does not take part.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// The clone has the same topology as the original.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::new(self.topology());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Reverse the order of the elements in place.
    ///
    /// Every link is flipped, so the head and tail sentinels trade places; a
    /// circular list gets its ring edge re-attached to the new tail.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if there is nothing to reverse.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::from_elements(Topology::Circular, [1, 2, 3]).unwrap();
    /// list.reverse().unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) -> Result<()> {
        if self.is_empty() {
            log::debug!("reverse: {} list is empty", self.topology());
            return Err(ListError::EmptyList);
        }
        let wiring = self.wiring();
        let (head, tail) = (self.head, self.tail);
        let links = &mut self.arena.links;
        let (mut prev, mut id) = (NIL, head);
        loop {
            let next = if id == tail { NIL } else { links[id].next };
            wiring.relink(&mut links[id], prev, next);
            if id == tail {
                break;
            }
            prev = id;
            id = next;
        }
        self.head = tail;
        self.tail = head;
        wiring.close(links, self.head, self.tail);
        Ok(())
    }

    /// Calls `formatter` on every element, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let list = List::from_elements(Topology::Singly, ["A", "B", "C"]).unwrap();
    /// let mut out = String::new();
    /// list.print(|s| out.push_str(s));
    /// assert_eq!(out, "ABC");
    ///
    /// out.clear();
    /// list.print_reverse(|s| out.push_str(s));
    /// assert_eq!(out, "CBA");
    /// ```
    pub fn print<F>(&self, formatter: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(formatter);
    }

    /// Calls `formatter` on every element, back to front.
    pub fn print_reverse<F>(&self, formatter: F)
    where
        F: FnMut(&T),
    {
        self.iter_rev().for_each(formatter);
    }
}

impl<T: Identity> List<T> {
    /// Swap the positions of the first occurrences of `a` and `b`.
    ///
    /// Only the elements move; the nodes stay where they are. Exchanging an
    /// element with itself succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] on an empty list;
    /// - [`ListError::NotFound`] if either element is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let (a, b, c) = (&'a', &'b', &'c');
    /// let mut list = List::from_elements(Topology::Doubly, [a, b, c]).unwrap();
    /// list.exchange(&a, &c).unwrap();
    /// assert_eq!(list.iter().map(|e| **e).collect::<String>(), "cba");
    /// ```
    pub fn exchange(&mut self, a: &T, b: &T) -> Result<()> {
        if self.is_empty() {
            log::debug!("exchange: {} list is empty", self.topology());
            return Err(ListError::EmptyList);
        }
        let (mut first, mut second) = (NIL, NIL);
        let mut id = self.front_node();
        while !self.is_end(id) && (first == NIL || second == NIL) {
            if let Some(element) = self.element(id) {
                if first == NIL && element.is_same(a) {
                    first = id;
                }
                if second == NIL && element.is_same(b) {
                    second = id;
                }
            }
            id = self.next_node(id);
        }
        if first == NIL || second == NIL {
            log::debug!("exchange: element is not in the {} list", self.topology());
            return Err(ListError::NotFound);
        }
        self.arena.swap_elements(first, second);
        Ok(())
    }
}
