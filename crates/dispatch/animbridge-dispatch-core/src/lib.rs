//! animbridge dispatch core
//!
//! Translates UI pointer events and state-machine commands into one-way,
//! correlated calls on an external engine's command queue.
//!
//! Flow for one event: resolve the target's handle ([`DispatchTarget`]) →
//! take a fresh [`RequestId`] from the [`CommandQueue`] → make the queue call
//! matching the [`Input`] variant → return. Nothing is awaited.
//!
//! All components hold the queue as `Rc<dyn CommandQueue>` and are therefore
//! confined to the thread that owns the queue.

pub mod correlation;
pub mod fit;
pub mod geometry;
pub mod handler;
pub mod ids;
pub mod input;
pub mod queue;
pub mod state_machine;
pub mod target;

pub use correlation::CorrelationFilter;
pub use fit::{Alignment, BridgedFit, Fit, ScaleFactor, ScaleProvider, ViewFit};
pub use geometry::{Point, Size};
pub use handler::InputHandler;
pub use ids::{
    ArtboardHandle, RequestCounter, RequestId, StateMachineHandle, ViewModelInstanceHandle,
};
pub use input::{Input, PointerEvent, PointerKind};
pub use queue::CommandQueue;
pub use state_machine::{StateMachine, StateMachineService};
pub use target::{DispatchTarget, PooledTarget};

pub use animbridge_handles::{Handle, HandlePool, HandleRange};
