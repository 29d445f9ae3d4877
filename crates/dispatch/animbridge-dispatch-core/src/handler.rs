//! InputHandler: pointer input → command queue.
//!
//! Each `handle` call resolves the target, takes one fresh request id and
//! makes exactly one queue call. Nothing is returned and no callback is
//! registered.

use std::rc::Rc;

use crate::input::Input;
use crate::queue::CommandQueue;
use crate::target::DispatchTarget;

pub struct InputHandler {
    queue: Rc<dyn CommandQueue>,
}

impl InputHandler {
    pub fn new(queue: Rc<dyn CommandQueue>) -> Self {
        Self { queue }
    }

    /// Send `input` to the state machine named by `target`.
    ///
    /// A target without a live handle is a caller error: the event is dropped
    /// and logged, and no request id is consumed.
    pub fn handle<T: DispatchTarget + ?Sized>(&self, input: Input, target: &T) {
        let Some(state_machine) = target.state_machine_handle() else {
            log::warn!("dropping {:?} for a target with no live handle", input.kind());
            return;
        };

        let request_id = self.queue.next_request_id();
        log::trace!(
            "pointer {:?} -> state machine {} (request {})",
            input.kind(),
            state_machine.0,
            request_id.0
        );

        let q = &*self.queue;
        match input {
            Input::PointerDown(e) => q.pointer_down(
                state_machine,
                e.position,
                e.bounds,
                e.fit,
                e.alignment,
                e.scale_factor,
                request_id,
            ),
            Input::PointerUp(e) => q.pointer_up(
                state_machine,
                e.position,
                e.bounds,
                e.fit,
                e.alignment,
                e.scale_factor,
                request_id,
            ),
            Input::PointerMove(e) => q.pointer_move(
                state_machine,
                e.position,
                e.bounds,
                e.fit,
                e.alignment,
                e.scale_factor,
                request_id,
            ),
            Input::PointerExit(e) => q.pointer_exit(
                state_machine,
                e.position,
                e.bounds,
                e.fit,
                e.alignment,
                e.scale_factor,
                request_id,
            ),
        }
    }
}
