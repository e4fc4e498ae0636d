//! Orbis application: the frame scheduler, the globe view bound to a window
//! surface, and the winit event loop that drives them.

pub mod platform;
pub mod scheduler;
pub mod snapshot;
pub mod view;
pub mod window;
