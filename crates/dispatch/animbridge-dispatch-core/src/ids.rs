//! Engine-side identifiers and the request-id counter.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use animbridge_handles::Handle;

/// Correlation id attached to every outbound command. Never dereferenced;
/// only compared, so responses can be matched and stale ones discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StateMachineHandle(pub u64);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ArtboardHandle(pub u64);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ViewModelInstanceHandle(pub u64);

/// Pool handles are `i32`; only non-negative values name engine objects.
impl TryFrom<Handle> for StateMachineHandle {
    type Error = std::num::TryFromIntError;

    fn try_from(h: Handle) -> Result<Self, Self::Error> {
        u64::try_from(h.get()).map(StateMachineHandle)
    }
}

/// Monotonic request-id source for `CommandQueue` implementations.
///
/// Uses a `Cell`, so it is `!Sync`: ids are only strictly increasing when
/// issued from a single thread, which is what the queue requires anyway.
#[derive(Debug, Default)]
pub struct RequestCounter {
    next: Cell<u64>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }

    /// Hand out the current id and advance.
    #[inline]
    pub fn issue(&self) -> RequestId {
        let id = self.next.get();
        self.next.set(id.wrapping_add(1));
        RequestId(id)
    }

    /// The id the next `issue` call will return.
    #[inline]
    pub fn peek(&self) -> RequestId {
        RequestId(self.next.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_monotonic() {
        let c = RequestCounter::starting_at(41);
        assert_eq!(c.peek(), RequestId(41));
        assert_eq!(c.issue(), RequestId(41));
        assert_eq!(c.issue(), RequestId(42));
        assert!(c.issue() > RequestId(42));
    }

    #[test]
    fn negative_pool_handle_does_not_convert() {
        assert_eq!(
            StateMachineHandle::try_from(Handle(7)),
            Ok(StateMachineHandle(7))
        );
        assert!(StateMachineHandle::try_from(Handle(-1)).is_err());
    }
}
