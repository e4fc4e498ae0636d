//! Window surface dimensions in physical and logical pixels.
//!
//! winit reports physical sizes and a scale factor; the globe lays itself out
//! in logical pixels and rasterizes at physical resolution. [`SurfaceWrapper`]
//! keeps both views consistent and clamps zero-size surfaces (minimised
//! windows, Wayland before the first configure) to 1×1.

/// Minimum surface dimension (prevents zero-size panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Physical pixel dimensions of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// Produced when the surface dimensions or scale factor change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceResizeEvent {
    pub physical: PhysicalSize,
    pub logical_width: f64,
    pub logical_height: f64,
    pub scale_factor: f64,
}

/// Tracks the current surface size and device pixel ratio.
#[derive(Clone, Debug)]
pub struct SurfaceWrapper {
    physical: PhysicalSize,
    scale_factor: f64,
    /// False until a non-zero size has been reported.
    configured: bool,
}

fn sanitize_scale(scale_factor: f64) -> f64 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}

impl Default for SurfaceWrapper {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

impl SurfaceWrapper {
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        Self {
            physical: PhysicalSize {
                width: physical_width.max(MIN_SURFACE_DIMENSION),
                height: physical_height.max(MIN_SURFACE_DIMENSION),
            },
            scale_factor: sanitize_scale(scale_factor),
            configured: physical_width > 0 && physical_height > 0,
        }
    }

    /// Build a surface from a logical size, e.g. for offscreen rendering.
    pub fn from_logical(width: f64, height: f64, scale_factor: f64) -> Self {
        let scale_factor = sanitize_scale(scale_factor);
        Self::new(
            (width.max(0.0) * scale_factor).round() as u32,
            (height.max(0.0) * scale_factor).round() as u32,
            scale_factor,
        )
    }

    /// Handle a window resize. Returns an event only if the size changed.
    pub fn handle_resize(
        &mut self,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        let next = PhysicalSize {
            width: physical_width.max(MIN_SURFACE_DIMENSION),
            height: physical_height.max(MIN_SURFACE_DIMENSION),
        };
        if physical_width > 0 && physical_height > 0 {
            self.configured = true;
        }
        if next == self.physical {
            return None;
        }
        self.physical = next;
        Some(self.event())
    }

    /// Handle a scale factor change (window moved to another display, or the
    /// user changed display scaling). Always produces an event because the
    /// logical size changes even when the physical one does not.
    pub fn handle_scale_factor_changed(
        &mut self,
        new_scale_factor: f64,
        new_physical_width: u32,
        new_physical_height: u32,
    ) -> SurfaceResizeEvent {
        self.scale_factor = sanitize_scale(new_scale_factor);
        self.handle_resize(new_physical_width, new_physical_height);
        self.event()
    }

    /// The current state as a resize event.
    pub fn event(&self) -> SurfaceResizeEvent {
        SurfaceResizeEvent {
            physical: self.physical,
            logical_width: self.logical_width(),
            logical_height: self.logical_height(),
            scale_factor: self.scale_factor,
        }
    }

    pub fn physical_size(&self) -> PhysicalSize {
        self.physical
    }

    pub fn logical_width(&self) -> f64 {
        self.physical.width as f64 / self.scale_factor
    }

    pub fn logical_height(&self) -> f64 {
        self.physical.height as f64 / self.scale_factor
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }
}
