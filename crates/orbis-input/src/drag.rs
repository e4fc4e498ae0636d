//! Drag state machine.
//!
//! `Idle --Down--> Dragging --Up/Leave--> Idle`. While dragging, every move
//! yields the pointer displacement since the previous event.

use glam::DVec2;

use crate::pointer::PointerEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: DVec2,
    },
}

/// Tracks whether the user is dragging and turns moves into deltas.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pointer event. Returns the displacement in logical pixels
    /// when the event moved an active drag.
    pub fn handle(&mut self, event: PointerEvent) -> Option<DVec2> {
        match (self.state, event) {
            (_, PointerEvent::Down { x, y }) => {
                self.state = DragState::Dragging {
                    last: DVec2::new(x, y),
                };
                tracing::trace!(x, y, "drag start");
                None
            }
            (DragState::Dragging { last }, PointerEvent::Move { x, y }) => {
                let at = DVec2::new(x, y);
                self.state = DragState::Dragging { last: at };
                Some(at - last)
            }
            (DragState::Idle, PointerEvent::Move { .. }) => None,
            (_, PointerEvent::Up | PointerEvent::Leave) => {
                if self.is_dragging() {
                    tracing::trace!("drag end");
                }
                self.state = DragState::Idle;
                None
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}
