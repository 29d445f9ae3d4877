//! Handle pool: bounded, LIFO-reusing handle allocator keyed by object identity.
//!
//! Methods:
//! - new / from_config: seed the reservoir from a half-open range
//! - allocate / try_allocate: idempotent per live object, pops the top of the reservoir
//! - release: returns the object's handle to the top of the reservoir
//! - lookup: non-allocating query

use std::borrow::Borrow;
use std::hash::Hash;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::{Handle, HandleRange};

/// Allocates handles from a fixed range and maps live objects to them.
///
/// The reservoir is a `Vec` used as a stack: the handle released most recently
/// is the first one handed out again. Every handle of the range is either in
/// the reservoir or assigned to exactly one object, never both.
///
/// Mutation takes `&mut self`; share across threads through
/// [`SharedHandlePool`](crate::SharedHandlePool).
#[derive(Debug)]
pub struct HandlePool<K> {
    range: HandleRange,
    free: Vec<Handle>,
    assignments: HashMap<K, Handle>,
}

impl<K: Eq + Hash> HandlePool<K> {
    /// Seed the reservoir with every handle in `range`, ascending, so a fresh
    /// pool hands out `end - 1` first.
    pub fn new(range: HandleRange) -> Self {
        Self {
            range,
            free: range.iter().collect(),
            assignments: HashMap::new(),
        }
    }

    pub fn from_config(cfg: &PoolConfig) -> Result<Self, PoolError> {
        Ok(Self::new(cfg.range()?))
    }

    /// Handle for `object`, allocating one if it has none.
    ///
    /// Returns the existing handle without consuming a slot when `object` is
    /// already assigned. Returns `None` when the range is fully in use.
    pub fn allocate(&mut self, object: K) -> Option<Handle> {
        match self.assignments.entry(object) {
            Entry::Occupied(e) => Some(*e.get()),
            Entry::Vacant(v) => match self.free.pop() {
                Some(handle) => {
                    v.insert(handle);
                    log::debug!(
                        "handle pool: assigned {} ({} left)",
                        handle.0,
                        self.free.len()
                    );
                    Some(handle)
                }
                None => {
                    log::warn!(
                        "handle pool: exhausted, all {} handles of {}..{} assigned",
                        self.range.len(),
                        self.range.start(),
                        self.range.end()
                    );
                    None
                }
            },
        }
    }

    /// Like [`allocate`](Self::allocate) but reports exhaustion as an error.
    pub fn try_allocate(&mut self, object: K) -> Result<Handle, PoolError> {
        let capacity = self.capacity();
        self.allocate(object).ok_or(PoolError::Exhausted { capacity })
    }

    /// Drop `object`'s assignment and make its handle the next one reused.
    ///
    /// Unknown objects are ignored. Returns the freed handle, if any.
    pub fn release<Q>(&mut self, object: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.assignments.remove(object)?;
        self.free.push(handle);
        log::debug!("handle pool: released {}", handle.0);
        Some(handle)
    }

    /// Current handle for `object`, without allocating.
    pub fn lookup<Q>(&self, object: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.assignments.get(object).copied()
    }

    pub fn contains<Q>(&self, object: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.assignments.contains_key(object)
    }

    pub fn range(&self) -> HandleRange {
        self.range
    }

    /// Total number of handles the pool manages.
    pub fn capacity(&self) -> usize {
        self.range.len()
    }

    /// Handles still waiting in the reservoir.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of live assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.free.is_empty()
    }

    /// Iterate over live `(object, handle)` assignments in arbitrary order.
    pub fn assignments(&self) -> impl Iterator<Item = (&K, Handle)> {
        self.assignments.iter().map(|(k, h)| (k, *h))
    }
}

impl<K: Eq + Hash> Default for HandlePool<K> {
    fn default() -> Self {
        Self::new(HandleRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool(start: i32, end: i32) -> HandlePool<String> {
        HandlePool::new(HandleRange::new(start, end).unwrap())
    }

    fn assert_partition(p: &HandlePool<String>) {
        let assigned: HashSet<Handle> = p.assignments().map(|(_, h)| h).collect();
        let free: HashSet<Handle> = p.free.iter().copied().collect();
        assert_eq!(assigned.len(), p.len(), "duplicate handle among assignments");
        assert_eq!(free.len(), p.available(), "duplicate handle in reservoir");
        assert!(assigned.is_disjoint(&free));
        let all: HashSet<Handle> = p.range().iter().collect();
        let union: HashSet<Handle> = assigned.union(&free).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn allocate_reuse_and_exhaustion_sequence() {
        let mut p = pool(0, 2);
        assert_eq!(p.allocate("Hello".into()), Some(Handle(1)));
        assert_eq!(p.allocate("Hello".into()), Some(Handle(1)));
        assert_eq!(p.allocate("World".into()), Some(Handle(0)));
        assert_eq!(p.allocate("World".into()), Some(Handle(0)));
        assert_eq!(p.allocate("Nil".into()), None);

        assert_eq!(p.lookup("Hello"), Some(Handle(1)));
        assert_eq!(p.lookup("World"), Some(Handle(0)));
        assert_eq!(p.lookup("Nil"), None);

        p.release("Hello");
        p.release("World");

        assert_eq!(p.allocate("Goodbye".into()), Some(Handle(0)));
        assert_eq!(p.allocate("Moon".into()), Some(Handle(1)));
        assert_eq!(p.allocate("Another Failure".into()), None);
        assert_partition(&p);
    }

    #[test]
    fn release_unknown_is_noop() {
        let mut p = pool(0, 3);
        p.allocate("a".into());
        let before = (p.len(), p.available());
        assert_eq!(p.release("never-seen"), None);
        assert_eq!((p.len(), p.available()), before);
        assert_eq!(p.allocate("b".into()), Some(Handle(1)));
        assert_partition(&p);
    }

    #[test]
    fn double_release_does_not_duplicate_handle() {
        let mut p = pool(0, 2);
        p.allocate("a".into());
        assert_eq!(p.release("a"), Some(Handle(1)));
        assert_eq!(p.release("a"), None);
        assert_eq!(p.available(), 2);
        assert_partition(&p);
    }

    #[test]
    fn try_allocate_reports_capacity() {
        let mut p = pool(5, 6);
        assert_eq!(p.try_allocate("x".into()), Ok(Handle(5)));
        assert_eq!(
            p.try_allocate("y".into()),
            Err(PoolError::Exhausted { capacity: 1 })
        );
        // idempotent even when exhausted
        assert_eq!(p.try_allocate("x".into()), Ok(Handle(5)));
    }

    #[test]
    fn empty_range_never_allocates() {
        let mut p = pool(3, 3);
        assert!(p.is_exhausted());
        assert_eq!(p.allocate("x".into()), None);
        assert!(p.is_empty());
    }

    #[test]
    fn default_pool_uses_default_config() {
        let p: HandlePool<u64> = HandlePool::default();
        assert_eq!(p.capacity(), 1024);
        assert_eq!(p.available(), 1024);
    }
}
