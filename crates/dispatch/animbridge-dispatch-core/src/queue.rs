//! The external command-queue contract.
//!
//! Implemented by the native engine binding (or a test double). Every method
//! is a one-way send: nothing is awaited and no listener is registered. Any
//! response the engine produces travels over a separate channel and is matched
//! back by its [`RequestId`].
//!
//! The queue is confined to one thread. Callers hold it as
//! `Rc<dyn CommandQueue>`, which keeps every component built on it `!Send`.

use crate::fit::{Alignment, Fit};
use crate::geometry::{Point, Size};
use crate::ids::{ArtboardHandle, RequestId, StateMachineHandle, ViewModelInstanceHandle};

#[allow(clippy::too_many_arguments)]
pub trait CommandQueue {
    /// Fresh correlation id, strictly greater than every id issued before.
    fn next_request_id(&self) -> RequestId;

    fn pointer_down(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    );

    fn pointer_up(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    );

    fn pointer_move(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    );

    fn pointer_exit(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    );

    /// Instantiate the artboard's default state machine. The handle is minted
    /// synchronously; the engine builds the object asynchronously.
    fn create_default_state_machine(
        &self,
        artboard: ArtboardHandle,
        request_id: RequestId,
    ) -> StateMachineHandle;

    fn create_state_machine_named(
        &self,
        name: &str,
        artboard: ArtboardHandle,
        request_id: RequestId,
    ) -> StateMachineHandle;

    /// Advance by `seconds` since the previous advance.
    fn advance_state_machine(
        &self,
        state_machine: StateMachineHandle,
        seconds: f64,
        request_id: RequestId,
    );

    fn delete_state_machine(&self, state_machine: StateMachineHandle, request_id: RequestId);

    fn bind_view_model_instance(
        &self,
        state_machine: StateMachineHandle,
        instance: ViewModelInstanceHandle,
        request_id: RequestId,
    );
}
