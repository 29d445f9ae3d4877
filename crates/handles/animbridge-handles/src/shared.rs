//! Lock-guarded pool for hosts that touch handles from more than one thread.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::PoolError;
use crate::handle::{Handle, HandleRange};
use crate::pool::HandlePool;

/// Cloneable, thread-safe front for a [`HandlePool`].
///
/// Each operation holds the lock for its whole check-then-mutate sequence, so
/// an `allocate` racing a `release` sees the pool either before or after the
/// release, never in between.
#[derive(Debug)]
pub struct SharedHandlePool<K> {
    inner: Arc<Mutex<HandlePool<K>>>,
}

impl<K> Clone for SharedHandlePool<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash> SharedHandlePool<K> {
    pub fn new(range: HandleRange) -> Self {
        Self::from_pool(HandlePool::new(range))
    }

    pub fn from_pool(pool: HandlePool<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    pub fn allocate(&self, object: K) -> Option<Handle> {
        self.inner.lock().allocate(object)
    }

    pub fn try_allocate(&self, object: K) -> Result<Handle, PoolError> {
        self.inner.lock().try_allocate(object)
    }

    pub fn release<Q>(&self, object: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().release(object)
    }

    pub fn lookup<Q>(&self, object: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().lookup(object)
    }

    /// Run `f` with exclusive access, for compound operations that must not
    /// interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut HandlePool<K>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn available(&self) -> usize {
        self.inner.lock().available()
    }
}
