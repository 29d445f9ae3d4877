//! State-machine commands.
//!
//! [`StateMachineService`] is the thin, fire-and-forget command surface;
//! [`StateMachine`] owns one engine state machine and deletes it on drop.

use std::fmt;
use std::rc::Rc;

use crate::ids::{ArtboardHandle, StateMachineHandle, ViewModelInstanceHandle};
use crate::queue::CommandQueue;
use crate::target::DispatchTarget;

/// Issues state-machine commands, one fresh request id per command.
pub struct StateMachineService {
    queue: Rc<dyn CommandQueue>,
}

impl StateMachineService {
    pub fn new(queue: Rc<dyn CommandQueue>) -> Self {
        Self { queue }
    }

    /// Create the named state machine, or the artboard's default when `name`
    /// is `None`. Returns the engine handle immediately.
    pub fn create_state_machine(
        &self,
        name: Option<&str>,
        artboard: ArtboardHandle,
    ) -> StateMachineHandle {
        let request_id = self.queue.next_request_id();
        let handle = match name {
            Some(name) => self.queue.create_state_machine_named(name, artboard, request_id),
            None => self.queue.create_default_state_machine(artboard, request_id),
        };
        log::debug!(
            "created state machine {} ({}) from artboard {}",
            handle.0,
            name.unwrap_or("<default>"),
            artboard.0
        );
        handle
    }

    pub fn advance(&self, state_machine: StateMachineHandle, seconds: f64) {
        let request_id = self.queue.next_request_id();
        log::trace!("advance state machine {} by {seconds}s", state_machine.0);
        self.queue.advance_state_machine(state_machine, seconds, request_id);
    }

    /// Delete the engine object. The handle is invalid afterwards.
    pub fn delete(&self, state_machine: StateMachineHandle) {
        let request_id = self.queue.next_request_id();
        log::debug!("delete state machine {}", state_machine.0);
        self.queue.delete_state_machine(state_machine, request_id);
    }

    pub fn bind_view_model_instance(
        &self,
        state_machine: StateMachineHandle,
        instance: ViewModelInstanceHandle,
    ) {
        let request_id = self.queue.next_request_id();
        self.queue.bind_view_model_instance(state_machine, instance, request_id);
    }
}

/// An engine state machine owned by the UI side.
///
/// Two values are equal when they name the same engine object.
pub struct StateMachine {
    handle: StateMachineHandle,
    service: Rc<StateMachineService>,
}

impl StateMachine {
    /// Create a state machine on `artboard` (default one if `name` is `None`).
    pub fn create(
        service: &Rc<StateMachineService>,
        name: Option<&str>,
        artboard: ArtboardHandle,
    ) -> Self {
        let handle = service.create_state_machine(name, artboard);
        Self::from_handle(service, handle)
    }

    /// Take ownership of an existing engine handle; it is deleted on drop.
    pub fn from_handle(service: &Rc<StateMachineService>, handle: StateMachineHandle) -> Self {
        Self {
            handle,
            service: Rc::clone(service),
        }
    }

    pub fn handle(&self) -> StateMachineHandle {
        self.handle
    }

    /// Advance the timeline by `seconds`; call once per frame.
    pub fn advance(&self, seconds: f64) {
        self.service.advance(self.handle, seconds);
    }

    pub fn bind_view_model_instance(&self, instance: ViewModelInstanceHandle) {
        self.service.bind_view_model_instance(self.handle, instance);
    }
}

impl Drop for StateMachine {
    fn drop(&mut self) {
        self.service.delete(self.handle);
    }
}

impl PartialEq for StateMachine {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for StateMachine {}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl DispatchTarget for StateMachine {
    fn state_machine_handle(&self) -> Option<StateMachineHandle> {
        Some(self.handle)
    }
}
