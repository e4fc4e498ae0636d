//! Normalises winit mouse and touch events into [`PointerEvent`]s.
//!
//! winit reports positions in physical pixels; everything downstream works in
//! logical pixels, so [`PointerInput`] divides by the current scale factor.
//! Only the first active touch is followed, and any mouse button starts a drag.

use glam::DVec2;
use winit::event::{ElementState, TouchPhase};

/// A device-independent pointer event in logical window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed or a touch began.
    Down { x: f64, y: f64 },
    /// The pointer moved.
    Move { x: f64, y: f64 },
    /// A button was released or the tracked touch ended.
    Up,
    /// The pointer left the window.
    Leave,
}

/// Converts raw winit input into [`PointerEvent`]s.
#[derive(Debug, Clone)]
pub struct PointerInput {
    position: DVec2,
    scale_factor: f64,
    active_touch: Option<u64>,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PointerInput {
    #[must_use]
    pub fn new(scale_factor: f64) -> Self {
        let mut input = Self {
            position: DVec2::ZERO,
            scale_factor: 1.0,
            active_touch: None,
        };
        input.set_scale_factor(scale_factor);
        input
    }

    /// Update the physical-to-logical ratio. Non-positive or non-finite
    /// values are ignored.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    fn to_logical(&self, physical_x: f64, physical_y: f64) -> DVec2 {
        DVec2::new(physical_x, physical_y) / self.scale_factor
    }

    /// Process a `CursorMoved` event.
    pub fn on_cursor_moved(&mut self, physical_x: f64, physical_y: f64) -> PointerEvent {
        self.position = self.to_logical(physical_x, physical_y);
        PointerEvent::Move {
            x: self.position.x,
            y: self.position.y,
        }
    }

    /// Process a `MouseInput` event for any button.
    pub fn on_button(&mut self, state: ElementState) -> PointerEvent {
        match state {
            ElementState::Pressed => PointerEvent::Down {
                x: self.position.x,
                y: self.position.y,
            },
            ElementState::Released => PointerEvent::Up,
        }
    }

    /// Process a `CursorLeft` event. Leaving ends any drag, including one
    /// driven by a touch.
    pub fn on_cursor_left(&mut self) -> PointerEvent {
        self.active_touch = None;
        PointerEvent::Leave
    }

    /// Process a `Touch` event. Touches other than the first active one
    /// produce nothing.
    pub fn on_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        physical_x: f64,
        physical_y: f64,
    ) -> Option<PointerEvent> {
        let at = self.to_logical(physical_x, physical_y);
        match phase {
            TouchPhase::Started if self.active_touch.is_none() => {
                self.active_touch = Some(id);
                tracing::trace!(id, "touch drag started");
                Some(PointerEvent::Down { x: at.x, y: at.y })
            }
            TouchPhase::Moved if self.active_touch == Some(id) => {
                Some(PointerEvent::Move { x: at.x, y: at.y })
            }
            TouchPhase::Ended | TouchPhase::Cancelled if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerEvent::Up)
            }
            _ => None,
        }
    }

    /// Last cursor position in logical coordinates.
    #[must_use]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}
