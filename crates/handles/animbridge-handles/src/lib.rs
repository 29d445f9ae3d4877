//! animbridge handles
//!
//! Bounded, reusable integer handles for objects that must be named across the
//! boundary to an external animation/state-machine engine. Handles are cheap to
//! pass (an `i32`); the objects they stand for are not.
//!
//! - [`HandlePool`]: single-owner pool, `&mut self` mutation, LIFO reuse.
//! - [`SharedHandlePool`]: lock-guarded front for multi-threaded hosts.
//! - [`Identity`]: reference-identity key for `Rc` objects.

pub mod config;
pub mod error;
pub mod handle;
pub mod identity;
pub mod pool;
pub mod shared;

pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::{Handle, HandleRange};
pub use identity::Identity;
pub use pool::HandlePool;
pub use shared::SharedHandlePool;
