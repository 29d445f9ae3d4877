//! Handle values and the numeric range they are drawn from.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::PoolError;

/// Compact integer naming an object on the far side of the engine boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Handle(pub i32);

impl Handle {
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<Handle> for i32 {
    fn from(h: Handle) -> Self {
        h.0
    }
}

/// Validated half-open range `[start, end)` of handle values.
///
/// An empty range (`start == end`) is allowed and produces a pool that can
/// never allocate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct HandleRange {
    start: i32,
    end: i32,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawRange> for HandleRange {
    type Error = PoolError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        HandleRange::new(raw.start, raw.end)
    }
}

impl From<HandleRange> for RawRange {
    fn from(r: HandleRange) -> Self {
        RawRange {
            start: r.start,
            end: r.end,
        }
    }
}

impl HandleRange {
    pub fn new(start: i32, end: i32) -> Result<Self, PoolError> {
        if start > end {
            return Err(PoolError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of handles in the range.
    #[inline]
    pub fn len(&self) -> usize {
        // start <= end holds, so the difference fits in u32.
        (i64::from(self.end) - i64::from(self.start)) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        (self.start..self.end).contains(&handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Handle> {
        (self.start..self.end).map(Handle)
    }
}

/// `0..1024`, the same span as `PoolConfig::default()`.
impl Default for HandleRange {
    fn default() -> Self {
        Self { start: 0, end: 1024 }
    }
}

impl TryFrom<Range<i32>> for HandleRange {
    type Error = PoolError;

    fn try_from(r: Range<i32>) -> Result<Self, Self::Error> {
        HandleRange::new(r.start, r.end)
    }
}

impl From<HandleRange> for Range<i32> {
    fn from(r: HandleRange) -> Self {
        r.start..r.end
    }
}
