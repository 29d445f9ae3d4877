//! Response-side correlation filtering.
//!
//! Responses arrive outside this crate, possibly out of order. Since request
//! ids are issued in strictly increasing order, a response older than the
//! newest one already handled for the same target is stale.

use std::hash::Hash;

use hashbrown::HashMap;

use crate::ids::RequestId;

/// Tracks the newest accepted request id per target.
#[derive(Debug)]
pub struct CorrelationFilter<T> {
    latest: HashMap<T, RequestId>,
}

impl<T> Default for CorrelationFilter<T> {
    fn default() -> Self {
        Self {
            latest: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> CorrelationFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `id` is newer than anything accepted for `target`; records it.
    pub fn accept(&mut self, target: T, id: RequestId) -> bool {
        match self.latest.get_mut(&target) {
            Some(seen) if *seen >= id => {
                log::trace!("discarding stale response {} (newest {})", id.0, seen.0);
                false
            }
            Some(seen) => {
                *seen = id;
                true
            }
            None => {
                self.latest.insert(target, id);
                true
            }
        }
    }

    pub fn latest(&self, target: &T) -> Option<RequestId> {
        self.latest.get(target).copied()
    }

    /// Stop tracking `target`, e.g. after its handle was released.
    pub fn forget(&mut self, target: &T) {
        self.latest.remove(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::StateMachineHandle;

    #[test]
    fn stale_and_duplicate_responses_are_rejected() {
        let mut f = CorrelationFilter::new();
        let a = StateMachineHandle(1);
        let b = StateMachineHandle(2);

        assert!(f.accept(a, RequestId(5)));
        assert!(!f.accept(a, RequestId(3)));
        assert!(!f.accept(a, RequestId(5)));
        assert!(f.accept(b, RequestId(4)), "targets are tracked separately");
        assert!(f.accept(a, RequestId(9)));
        assert_eq!(f.latest(&a), Some(RequestId(9)));

        f.forget(&a);
        assert!(f.accept(a, RequestId(1)));
    }
}
