//! Test doubles for the dispatch layer.
//!
//! [`RecordingQueue`] implements `CommandQueue` by appending every call to an
//! in-memory log, minting state-machine handles from a counter, and issuing
//! request ids from a `RequestCounter`.

use std::cell::{Cell, RefCell};

use serde::Serialize;

use animbridge_dispatch::{
    Alignment, ArtboardHandle, CommandQueue, Fit, Point, PointerEvent, PointerKind,
    RequestCounter, RequestId, ScaleProvider, Size, StateMachineHandle, ViewModelInstanceHandle,
};

/// One pointer command as the queue received it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointerCall {
    pub kind: PointerKind,
    pub state_machine: StateMachineHandle,
    pub event: PointerEvent,
    pub request_id: RequestId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Call {
    Pointer(PointerCall),
    CreateStateMachine {
        name: Option<String>,
        artboard: ArtboardHandle,
        request_id: RequestId,
        returned: StateMachineHandle,
    },
    Advance {
        state_machine: StateMachineHandle,
        seconds: f64,
        request_id: RequestId,
    },
    Delete {
        state_machine: StateMachineHandle,
        request_id: RequestId,
    },
    BindViewModelInstance {
        state_machine: StateMachineHandle,
        instance: ViewModelInstanceHandle,
        request_id: RequestId,
    },
}

impl Call {
    pub fn request_id(&self) -> RequestId {
        match self {
            Call::Pointer(p) => p.request_id,
            Call::CreateStateMachine { request_id, .. }
            | Call::Advance { request_id, .. }
            | Call::Delete { request_id, .. }
            | Call::BindViewModelInstance { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingQueue {
    ids: RequestCounter,
    next_state_machine: Cell<u64>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request ids start at `first`; minted state machines start at `first_handle`.
    pub fn starting_at(first: u64, first_handle: u64) -> Self {
        Self {
            ids: RequestCounter::starting_at(first),
            next_state_machine: Cell::new(first_handle),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn pointer_calls(&self) -> Vec<PointerCall> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Pointer(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn pointer_calls_of(&self, kind: PointerKind) -> Vec<PointerCall> {
        self.pointer_calls()
            .into_iter()
            .filter(|p| p.kind == kind)
            .collect()
    }

    pub fn deleted(&self) -> Vec<StateMachineHandle> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Delete { state_machine, .. } => Some(*state_machine),
                _ => None,
            })
            .collect()
    }

    /// Ids the next `next_request_id` call would return.
    pub fn peek_request_id(&self) -> RequestId {
        self.ids.peek()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn record_pointer(
        &self,
        kind: PointerKind,
        state_machine: StateMachineHandle,
        event: PointerEvent,
        request_id: RequestId,
    ) {
        self.record(Call::Pointer(PointerCall {
            kind,
            state_machine,
            event,
            request_id,
        }));
    }

    fn mint(&self) -> StateMachineHandle {
        let h = self.next_state_machine.get();
        self.next_state_machine.set(h + 1);
        StateMachineHandle(h)
    }
}

impl CommandQueue for RecordingQueue {
    fn next_request_id(&self) -> RequestId {
        self.ids.issue()
    }

    fn pointer_down(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    ) {
        let event = PointerEvent::new(position, bounds, fit, alignment, scale_factor);
        self.record_pointer(PointerKind::Down, state_machine, event, request_id);
    }

    fn pointer_up(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    ) {
        let event = PointerEvent::new(position, bounds, fit, alignment, scale_factor);
        self.record_pointer(PointerKind::Up, state_machine, event, request_id);
    }

    fn pointer_move(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    ) {
        let event = PointerEvent::new(position, bounds, fit, alignment, scale_factor);
        self.record_pointer(PointerKind::Move, state_machine, event, request_id);
    }

    fn pointer_exit(
        &self,
        state_machine: StateMachineHandle,
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
        request_id: RequestId,
    ) {
        let event = PointerEvent::new(position, bounds, fit, alignment, scale_factor);
        self.record_pointer(PointerKind::Exit, state_machine, event, request_id);
    }

    fn create_default_state_machine(
        &self,
        artboard: ArtboardHandle,
        request_id: RequestId,
    ) -> StateMachineHandle {
        let returned = self.mint();
        self.record(Call::CreateStateMachine {
            name: None,
            artboard,
            request_id,
            returned,
        });
        returned
    }

    fn create_state_machine_named(
        &self,
        name: &str,
        artboard: ArtboardHandle,
        request_id: RequestId,
    ) -> StateMachineHandle {
        let returned = self.mint();
        self.record(Call::CreateStateMachine {
            name: Some(name.to_string()),
            artboard,
            request_id,
            returned,
        });
        returned
    }

    fn advance_state_machine(
        &self,
        state_machine: StateMachineHandle,
        seconds: f64,
        request_id: RequestId,
    ) {
        self.record(Call::Advance {
            state_machine,
            seconds,
            request_id,
        });
    }

    fn delete_state_machine(&self, state_machine: StateMachineHandle, request_id: RequestId) {
        self.record(Call::Delete {
            state_machine,
            request_id,
        });
    }

    fn bind_view_model_instance(
        &self,
        state_machine: StateMachineHandle,
        instance: ViewModelInstanceHandle,
        request_id: RequestId,
    ) {
        self.record(Call::BindViewModelInstance {
            state_machine,
            instance,
            request_id,
        });
    }
}

/// Scale provider with fixed values.
#[derive(Copy, Clone, Debug)]
pub struct FixedScale {
    pub native: Option<f64>,
    pub display: f64,
}

impl Default for FixedScale {
    fn default() -> Self {
        Self {
            native: None,
            display: 1.0,
        }
    }
}

impl ScaleProvider for FixedScale {
    fn native_scale(&self) -> Option<f64> {
        self.native
    }

    fn display_scale(&self) -> f64 {
        self.display
    }
}

/// Pointer event with the given geometry and display context.
pub fn pointer_event(
    (x, y): (f64, f64),
    (width, height): (f64, f64),
    fit: Fit,
    alignment: Alignment,
    scale_factor: f32,
) -> PointerEvent {
    PointerEvent::new(
        Point::new(x, y),
        Size::new(width, height),
        fit,
        alignment,
        scale_factor,
    )
}
