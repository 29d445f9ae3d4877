//! Input contracts for the dispatch layer.
//!
//! Hosts translate platform touches/mouse events into [`Input`] values and hand
//! them to [`InputHandler::handle`](crate::InputHandler::handle).

use serde::{Deserialize, Serialize};

use crate::fit::{Alignment, Fit, ScaleProvider, ViewFit};
use crate::geometry::{Point, Size};

/// One pointer interaction, with the display context the engine needs to map
/// the view-space position into artboard space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub bounds: Size,
    pub fit: Fit,
    pub alignment: Alignment,
    pub scale_factor: f32,
}

impl PointerEvent {
    pub fn new(
        position: Point,
        bounds: Size,
        fit: Fit,
        alignment: Alignment,
        scale_factor: f32,
    ) -> Self {
        Self {
            position,
            bounds,
            fit,
            alignment,
            scale_factor,
        }
    }

    /// Build an event from a view's configured fit.
    pub fn from_view(
        position: Point,
        bounds: Size,
        fit: &ViewFit,
        provider: &dyn ScaleProvider,
    ) -> Self {
        let bridged = fit.bridged(provider);
        Self::new(
            position,
            bounds,
            bridged.fit,
            bridged.alignment,
            bridged.scale_factor,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Input {
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove(PointerEvent),
    PointerExit(PointerEvent),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    Up,
    Move,
    Exit,
}

impl Input {
    pub fn kind(&self) -> PointerKind {
        match self {
            Input::PointerDown(_) => PointerKind::Down,
            Input::PointerUp(_) => PointerKind::Up,
            Input::PointerMove(_) => PointerKind::Move,
            Input::PointerExit(_) => PointerKind::Exit,
        }
    }

    pub fn event(&self) -> &PointerEvent {
        match self {
            Input::PointerDown(e)
            | Input::PointerUp(e)
            | Input::PointerMove(e)
            | Input::PointerExit(e) => e,
        }
    }
}
