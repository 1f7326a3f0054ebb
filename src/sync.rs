//! Thread-safe access to a [`List`] or a [`Vector`].
//!
//! The containers themselves are plain single-threaded values. [`Shared`]
//! puts one behind a mutex and offers two ways in:
//!
//! - [`Shared::with`] locks for the duration of one closure call;
//! - [`Shared::lock`] hands out the guard itself, so a caller can chain
//!   several operations (say, a search and an insert) under one lock.
//!
//! A panic while the lock is held poisons the mutex. Every container
//! operation either completes or leaves the container untouched, so the
//! poison is cleared and the container used as is.

use crate::list::List;
use crate::vector::Vector;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A container shared between threads.
///
/// # Examples
///
/// ```
/// use sentinel_list::{Shared, List, Topology};
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(Shared::new(List::new(Topology::Doubly)));
/// let handles = (0..4)
///     .map(|i| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || shared.with(|list| list.insert_back(i)))
///     })
///     .collect::<Vec<_>>();
/// for handle in handles {
///     handle.join().unwrap().unwrap();
/// }
/// assert_eq!(shared.with(|list| list.len()), 4);
/// ```
#[derive(Debug, Default)]
pub struct Shared<C> {
    inner: Mutex<C>,
}

pub type SharedList<T> = Shared<List<T>>;

pub type SharedVector<T> = Shared<Vector<T>>;

impl<C> Shared<C> {
    pub fn new(container: C) -> Self {
        Self {
            inner: Mutex::new(container),
        }
    }

    /// Lock the container until the returned guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("shared container lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Run `f` on the container under the lock.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        f(&mut self.lock())
    }

    pub fn into_inner(self) -> C {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{Shared, SharedList, SharedVector};
    use crate::list::topology::Topology;
    use crate::list::List;
    use crate::vector::Vector;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn shared_list_from_many_threads() {
        let shared: Arc<SharedList<Arc<usize>>> =
            Arc::new(Shared::new(List::new(Topology::Singly)));
        let handles = (0..8)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for j in 0..25 {
                        shared.with(|list| list.insert_front(Arc::new(i * 100 + j)).unwrap());
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
        let list = Arc::try_unwrap(shared).unwrap().into_inner();
        assert_eq!(list.len(), 200);
    }

    #[test]
    fn shared_lock_spans_several_operations() {
        let first = Arc::new(1);
        let shared = Shared::new(List::new(Topology::Circular));
        {
            let mut list = shared.lock();
            if !list.search(&first) {
                list.insert_back(Arc::clone(&first)).unwrap();
            }
            list.insert_after(&first, Arc::new(2)).unwrap();
        }
        assert_eq!(shared.with(|list| list.len()), 2);
        assert!(shared.with(|list| list.get_front().map(|e| Arc::ptr_eq(e, &first))).unwrap());
    }

    #[test]
    fn shared_recovers_from_poison() {
        let shared: Arc<SharedVector<i32>> = Arc::new(Shared::new(Vector::new()));
        shared.with(|vector| vector.push(1)).unwrap();
        let poisoner = Arc::clone(&shared);
        let result = thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());
        assert_eq!(shared.with(|vector| vector.get().copied()), Ok(1));
    }
}
