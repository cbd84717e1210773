use serde::{Deserialize, Serialize};

use crate::core::WorldViewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pan session captured at drag start.
///
/// Every pointer-move re-derives the viewport from this baseline instead of
/// the live viewport, so a continuous drag never accumulates rounding
/// drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanSession {
    pub baseline: WorldViewport,
    pub anchor_x_px: f64,
    pub anchor_y_px: f64,
}

/// Pointer interaction state owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    pan: Option<PanSession>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            pan: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn pan_session(self) -> Option<PanSession> {
        self.pan
    }

    pub(crate) fn begin_pan(&mut self, session: PanSession) {
        self.mode = InteractionMode::Panning;
        self.pan = Some(session);
    }

    pub(crate) fn end_pan(&mut self) {
        self.mode = InteractionMode::Idle;
        self.pan = None;
    }
}
