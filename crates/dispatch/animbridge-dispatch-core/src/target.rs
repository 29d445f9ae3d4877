//! Resolution of dispatch targets to engine handles.

use std::borrow::Borrow;
use std::hash::Hash;

use animbridge_handles::HandlePool;

use crate::ids::StateMachineHandle;

/// Anything that can name a state machine on the engine side.
///
/// `None` means the target has no live handle (for example it was already
/// released); dispatching to it is a caller error.
pub trait DispatchTarget {
    fn state_machine_handle(&self) -> Option<StateMachineHandle>;
}

impl DispatchTarget for StateMachineHandle {
    fn state_machine_handle(&self) -> Option<StateMachineHandle> {
        Some(*self)
    }
}

impl<T: DispatchTarget + ?Sized> DispatchTarget for &T {
    fn state_machine_handle(&self) -> Option<StateMachineHandle> {
        (**self).state_machine_handle()
    }
}

/// A target whose handle lives in a [`HandlePool`] under `key`.
///
/// Resolution is a plain lookup and never allocates. Only non-negative pool
/// handles resolve.
pub struct PooledTarget<'a, K, Q: ?Sized> {
    pool: &'a HandlePool<K>,
    key: &'a Q,
}

impl<'a, K, Q: ?Sized> PooledTarget<'a, K, Q> {
    pub fn new(pool: &'a HandlePool<K>, key: &'a Q) -> Self {
        Self { pool, key }
    }
}

impl<K, Q> DispatchTarget for PooledTarget<'_, K, Q>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    fn state_machine_handle(&self) -> Option<StateMachineHandle> {
        let handle = self.pool.lookup(self.key)?;
        match StateMachineHandle::try_from(handle) {
            Ok(h) => Some(h),
            Err(_) => {
                log::warn!("pool handle {} cannot name a state machine", handle.get());
                None
            }
        }
    }
}
