//! A growable array, the list's companion container.
//!
//! The capacity starts at [`MIN_CAPACITY`] and doubles whenever a push finds
//! the vector full. Growth goes through `try_reserve`, so running out of
//! memory is an error rather than an abort.

use crate::error::{Result, VectorError};
use crate::list::algorithms::sort::merge_sort_slots;
use std::cmp::Ordering;
use std::fmt;
use std::slice;

/// The smallest capacity a [`Vector`] is ever created with.
pub const MIN_CAPACITY: usize = 50;

/// A growable array of owned elements.
///
/// # Examples
///
/// ```
/// use sentinel_list::Vector;
///
/// let mut vector = Vector::new();
/// vector.push("b").unwrap();
/// vector.insert_at("a", 0).unwrap();
/// assert_eq!(vector.get(), Ok(&"b"));
/// assert_eq!(vector.get_at(0), Ok(&"a"));
/// assert_eq!(vector.capacity(), sentinel_list::vector::MIN_CAPACITY);
/// ```
pub struct Vector<T> {
    elements: Vec<T>,
    /// Capacity as the vector tracks it; `elements` may have been given more.
    capacity: usize,
}

impl<T> Vector<T> {
    /// Create an empty vector with [`MIN_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Create an empty vector with room for at least `capacity` elements,
    /// and never less than [`MIN_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Like [`Vector::with_capacity`], but reports allocation failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, VectorError> {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut elements = Vec::new();
        elements.try_reserve_exact(capacity).map_err(|_| {
            log::warn!("vector: cannot allocate {} slots", capacity);
            VectorError::OutOfMemory
        })?;
        Ok(Self { elements, capacity })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Make room for one more element, doubling the capacity when full.
    fn grow(&mut self) -> Result<(), VectorError> {
        if self.elements.len() < self.capacity {
            return Ok(());
        }
        let capacity = self.capacity.saturating_mul(2);
        self.elements
            .try_reserve_exact(capacity - self.elements.len())
            .map_err(|_| {
                log::warn!("vector: cannot grow from {} to {} slots", self.capacity, capacity);
                VectorError::OutOfMemory
            })?;
        self.capacity = capacity;
        Ok(())
    }

    fn out_of_range(&self, op: &str, position: usize) -> VectorError {
        log::debug!(
            "{}: position {} is out of range for length {}",
            op,
            position,
            self.len()
        );
        VectorError::OutOfRange {
            position,
            len: self.len(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: T) -> Result<(), VectorError> {
        self.grow()?;
        self.elements.push(element);
        Ok(())
    }

    /// Insert an element at `position`, shifting the following elements up.
    /// `position == len` appends.
    pub fn insert_at(&mut self, element: T, position: usize) -> Result<(), VectorError> {
        if position > self.len() {
            return Err(self.out_of_range("insert_at", position));
        }
        self.grow()?;
        self.elements.insert(position, element);
        Ok(())
    }

    /// Provides the last element.
    pub fn get(&self) -> Result<&T, VectorError> {
        self.elements.last().ok_or_else(|| {
            log::debug!("get: vector is empty");
            VectorError::EmptyVector
        })
    }

    pub fn get_at(&self, position: usize) -> Result<&T, VectorError> {
        self.elements
            .get(position)
            .ok_or_else(|| self.out_of_range("get_at", position))
    }

    /// Remove the last element and return it.
    pub fn remove(&mut self) -> Result<T, VectorError> {
        self.elements.pop().ok_or_else(|| {
            log::debug!("remove: vector is empty");
            VectorError::EmptyVector
        })
    }

    /// Remove the element at `position` and return it, shifting the following
    /// elements down.
    pub fn remove_at(&mut self, position: usize) -> Result<T, VectorError> {
        if position >= self.len() {
            return Err(self.out_of_range("remove_at", position));
        }
        Ok(self.elements.remove(position))
    }

    /// Stable sort with a comparator function.
    ///
    /// Uses the same bottom-up merge as [`List::sort`](crate::List::sort). The
    /// merge buffers are allocated first; if that fails the vector is left as
    /// it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::Vector;
    ///
    /// let mut vector = Vector::new();
    /// for e in [3, 1, 2].iter() {
    ///     vector.push(*e).unwrap();
    /// }
    /// vector.sort(|a, b| a.cmp(b)).unwrap();
    /// assert_eq!(vector.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn sort<F>(&mut self, mut compare: F) -> Result<(), VectorError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len();
        if len < 2 {
            return Ok(());
        }
        let mut slots = Vec::new();
        let mut scratch = Vec::new();
        if slots.try_reserve_exact(len).is_err() || scratch.try_reserve_exact(len).is_err() {
            log::warn!("sort: cannot allocate merge buffers for {} elements", len);
            return Err(VectorError::OutOfMemory);
        }
        slots.extend(self.elements.drain(..).map(Some));
        let sorted = merge_sort_slots(slots, scratch, &mut compare);
        self.elements.extend(sorted.into_iter().flatten());
        Ok(())
    }

    /// Calls `formatter` on every element, first to last.
    pub fn print<F>(&self, formatter: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(formatter);
    }

    /// Tear the vector down, handing every element to `destructor` exactly
    /// once, first to last.
    pub fn destroy<F>(self, destructor: F)
    where
        F: FnMut(T),
    {
        self.elements.into_iter().for_each(destructor);
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
