use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Every handle in the range is assigned. Release stale objects and retry.
    #[error("handle pool exhausted: all {capacity} handles are assigned")]
    Exhausted { capacity: usize },
    #[error("invalid handle range: start {start} is greater than end {end}")]
    InvalidRange { start: i32, end: i32 },
}
