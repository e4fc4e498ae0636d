//! Flat-color 2-D rendering: a [`Canvas`] abstraction over rectangle and line
//! primitives, a CPU [`Framebuffer`] that rasterizes them, and the wgpu
//! plumbing that puts the framebuffer on screen.

pub mod canvas;
pub mod color;
pub mod framebuffer;
pub mod gpu;
pub mod present;
pub mod recorder;
pub mod surface;

pub use canvas::{Canvas, Stroke};
pub use color::Rgba;
pub use framebuffer::Framebuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use present::FramePresenter;
pub use recorder::{DrawCommand, DrawRecorder};
pub use surface::{MIN_SURFACE_DIMENSION, PhysicalSize, SurfaceResizeEvent, SurfaceWrapper};
