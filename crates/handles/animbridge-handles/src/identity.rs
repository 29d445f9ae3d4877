//! Reference-identity keys.
//!
//! `HandlePool` is keyed by `Eq + Hash`. Value types (strings, ids) can be used
//! directly; reference types should be wrapped in [`Identity`] so that two
//! distinct objects that happen to compare equal still get distinct handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Compares and hashes an `Rc<T>` by allocation address.
///
/// The wrapper keeps the object alive while it is a pool key, so the address
/// cannot be recycled for another object during the assignment.
pub struct Identity<T: ?Sized>(Rc<T>);

impl<T: ?Sized> Identity<T> {
    pub fn new(object: Rc<T>) -> Self {
        Self(object)
    }

    pub fn object(&self) -> &Rc<T> {
        &self.0
    }

    pub fn into_inner(self) -> Rc<T> {
        self.0
    }

    #[inline]
    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl<T: ?Sized> From<Rc<T>> for Identity<T> {
    fn from(object: Rc<T>) -> Self {
        Self(object)
    }
}

impl<T: ?Sized> From<&Rc<T>> for Identity<T> {
    fn from(object: &Rc<T>) -> Self {
        Self(Rc::clone(object))
    }
}

impl<T: ?Sized> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> Eq for Identity<T> {}

impl<T: ?Sized> Hash for Identity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.addr()).finish()
    }
}
