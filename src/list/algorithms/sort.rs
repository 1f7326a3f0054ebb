use crate::error::{ListError, Result};
use crate::list::arena::NodeId;
use crate::List;
use std::cmp::Ordering;

const INSERTION_SORT_THRESHOLD: usize = 8;

impl<T> List<T> {
    /// Sort the elements at positions `low..high` with a comparator function,
    /// leaving the rest of the list untouched.
    ///
    /// This sort is stable (i.e., does not reorder equal elements). Nodes keep
    /// their places; only the elements move between them.
    ///
    /// # Errors
    ///
    /// - [`ListError::OutOfRange`] if `low > high` or `high > len`;
    /// - [`ListError::OutOfMemory`] if the merge buffers cannot be allocated.
    ///   They are allocated before any element moves, so the list is left
    ///   untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(*n*)
    /// memory, where *n* is `high - low`.
    ///
    /// # Current Implementation
    ///
    /// Runs of a few elements are sorted by insertion, then merged bottom-up,
    /// doubling the run width on each pass. Nothing recurses.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::from_elements(Topology::Singly, [5, 2, 4, 3, 1]).unwrap();
    /// list.sort(1, 4, |a, b| a.cmp(b)).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 2, 3, 4, 1]);
    ///
    /// assert!(list.sort(2, 6, |a, b| a.cmp(b)).is_err());
    /// ```
    pub fn sort<F>(&mut self, low: usize, high: usize, mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len();
        if low > high || high > len {
            log::debug!(
                "sort: range {}..{} is out of range for length {}",
                low,
                high,
                len
            );
            return Err(ListError::OutOfRange {
                position: if low > high { low } else { high },
                len,
            });
        }
        let count = high - low;
        if count < 2 {
            return Ok(());
        }

        let mut ids: Vec<NodeId> = Vec::new();
        let mut slots = Vec::new();
        let mut scratch = Vec::new();
        if ids.try_reserve_exact(count).is_err()
            || slots.try_reserve_exact(count).is_err()
            || scratch.try_reserve_exact(count).is_err()
        {
            log::warn!("sort: cannot allocate merge buffers for {} elements", count);
            return Err(ListError::OutOfMemory);
        }

        let mut cursor = self.cursor(low)?;
        for _ in 0..count {
            ids.push(cursor.current);
            let _ = cursor.move_next();
        }

        let arena = &mut self.arena;
        slots.extend(ids.iter().map(|&id| arena.take_element(id)));
        let sorted = merge_sort_slots(slots, scratch, &mut compare);
        for (&id, slot) in ids.iter().zip(sorted) {
            if let Some(element) = slot {
                arena.put_element(id, element);
            }
        }
        Ok(())
    }

    /// Sort the whole list with a comparator function.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Topology};
    ///
    /// let mut list = List::from_elements(Topology::Circular, [5, 2, 4, 3, 1]).unwrap();
    /// list.sort_by(|a, b| b.cmp(a)).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort(0, self.len(), compare)
    }

    /// Sort the whole list with a key extraction function.
    pub fn sort_by_key<K, F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)))
    }
}

/// Stable sort of `slots`, every one of which must hold an element.
///
/// `scratch` is the merge buffer; it must have room for `slots.len()`
/// elements, so sorting never allocates.
pub(crate) fn merge_sort_slots<T, F>(
    mut slots: Vec<Option<T>>,
    mut scratch: Vec<Option<T>>,
    compare: &mut F,
) -> Vec<Option<T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = slots.len();
    for run in slots.chunks_mut(INSERTION_SORT_THRESHOLD) {
        insertion_sort(run, compare);
    }

    scratch.clear();
    scratch.resize_with(len, || None);
    let mut width = INSERTION_SORT_THRESHOLD;
    while width < len {
        let mut low = 0;
        while low < len {
            let mid = low.saturating_add(width).min(len);
            let high = mid.saturating_add(width).min(len);
            merge(&mut slots, &mut scratch, (low, mid, high), compare);
            low = high;
        }
        // `slots` is all `None` now and becomes the next pass's buffer.
        std::mem::swap(&mut slots, &mut scratch);
        width = width.saturating_mul(2);
    }
    slots
}

/// Whether `left` may stay before `right`. Equal elements keep their order.
fn in_order<T, F>(left: &Option<T>, right: &Option<T>, compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    match (left, right) {
        (Some(left), Some(right)) => compare(left, right) != Ordering::Greater,
        _ => true,
    }
}

fn insertion_sort<T, F>(run: &mut [Option<T>], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for sorted in 1..run.len() {
        let mut at = sorted;
        while at > 0 && !in_order(&run[at - 1], &run[at], compare) {
            run.swap(at - 1, at);
            at -= 1;
        }
    }
}

/// Merge the sorted runs `src[low..mid]` and `src[mid..high]` into
/// `dst[low..high]`, taking the left element on ties.
fn merge<T, F>(
    src: &mut [Option<T>],
    dst: &mut [Option<T>],
    (low, mid, high): (usize, usize, usize),
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut left, mut right) = (low, mid);
    for slot in &mut dst[low..high] {
        let take_left = left < mid && (right >= high || in_order(&src[left], &src[right], compare));
        *slot = if take_left {
            left += 1;
            src[left - 1].take()
        } else {
            right += 1;
            src[right - 1].take()
        };
    }
}
