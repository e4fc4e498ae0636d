//! Pointer input: winit mouse and touch events normalised into a single
//! pointer stream, and the drag state machine that consumes it.

pub mod drag;
pub mod pointer;

pub use drag::{DragState, DragTracker};
pub use pointer::{PointerEvent, PointerInput};
