use std::ptr::{self, NonNull};
use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison of list elements.
///
/// Two elements are the *same* only if they denote the same underlying object.
/// Equal content is not enough: two separately allocated `Rc::new(1)` are
/// different elements.
///
/// Cloning a handle (`Rc`, `Arc`, a reference) yields the same identity, which
/// is how the identity-relative operations of [`List`](crate::List) can store an
/// anchor they were only given by reference.
///
/// # Examples
///
/// ```
/// use sentinel_list::Identity;
/// use std::rc::Rc;
///
/// let a = Rc::new(1);
/// let b = Rc::new(1);
/// assert!(a.is_same(&a.clone()));
/// assert!(!a.is_same(&b));
/// ```
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for NonNull<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

#[cfg(test)]
mod tests {
    use super::Identity;
    use std::ptr::NonNull;
    use std::rc::Rc;
    use std::sync::Arc;

    #[test]
    fn identity_is_not_equality() {
        let values = [7, 7];
        let (a, b) = (&values[0], &values[1]);
        assert_eq!(a, b);
        assert!(a.is_same(&a));
        assert!(!a.is_same(&b));

        let rc = Rc::new(String::from("x"));
        assert!(rc.is_same(&Rc::clone(&rc)));
        assert!(!rc.is_same(&Rc::new(String::from("x"))));

        let arc = Arc::new(3_u8);
        assert!(arc.is_same(&arc.clone()));
        assert!(!arc.is_same(&Arc::new(3_u8)));

        let mut x = 1;
        let ptr = NonNull::from(&mut x);
        assert!(ptr.is_same(&ptr));
    }
}
