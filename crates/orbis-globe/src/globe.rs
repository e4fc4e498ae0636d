//! The globe instance: orientation, drag state, surface layout and clock for
//! one drawing surface, plus the fixed layer order used to paint a frame.

use orbis_config::{Config, CullingConfig};
use orbis_input::{DragTracker, PointerEvent};
use orbis_render::{Canvas, Rgba};

use crate::land_mask::LandMask;
use crate::orbiters::{self, OrbitDescriptor, default_orbits};
use crate::projection::SurfaceMetrics;
use crate::rotation::RotationState;
use crate::{rings, starfield, surface, wireframe};

/// Depth cut-offs as fractions of the globe radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullThresholds {
    pub surface_back_face: f64,
    pub wireframe_near_side: f64,
    pub orbiter_far_side: f64,
}

impl Default for CullThresholds {
    fn default() -> Self {
        Self::from(&CullingConfig::default())
    }
}

impl From<&CullingConfig> for CullThresholds {
    fn from(config: &CullingConfig) -> Self {
        Self {
            surface_back_face: config.surface_back_face,
            wireframe_near_side: config.wireframe_near_side,
            orbiter_far_side: config.orbiter_far_side,
        }
    }
}

/// Behaviour knobs fixed for the lifetime of a [`Globe`].
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeOptions {
    pub auto_yaw_speed: f64,
    pub reduced_motion: bool,
    pub background: Rgba,
    pub culling: CullThresholds,
    pub orbits: Vec<OrbitDescriptor>,
}

impl Default for GlobeOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GlobeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            auto_yaw_speed: config.motion.auto_yaw_speed,
            reduced_motion: config.motion.reduced_motion,
            background: Rgba::from_array(config.render.background),
            culling: CullThresholds::from(&config.culling),
            orbits: default_orbits(),
        }
    }
}

/// State for one globe bound to one surface.
#[derive(Clone, Debug)]
pub struct Globe {
    rotation: RotationState,
    drag: DragTracker,
    metrics: SurfaceMetrics,
    time: u64,
    mask: LandMask,
    options: GlobeOptions,
}

impl Default for Globe {
    fn default() -> Self {
        Self::new(GlobeOptions::default())
    }
}

impl Globe {
    pub fn new(options: GlobeOptions) -> Self {
        Self {
            rotation: RotationState::default(),
            drag: DragTracker::new(),
            metrics: SurfaceMetrics::default(),
            time: 0,
            mask: LandMask::continents(),
            options,
        }
    }

    /// Recompute the layout for a new logical size and pixel ratio.
    /// Returns whether anything changed.
    pub fn resize(&mut self, width: f64, height: f64, pixel_ratio: f64) -> bool {
        let metrics = SurfaceMetrics::new(width, height, pixel_ratio);
        if metrics == self.metrics {
            return false;
        }
        tracing::debug!(
            width = metrics.width,
            height = metrics.height,
            pixel_ratio = metrics.pixel_ratio,
            radius = metrics.radius,
            "globe resized"
        );
        self.metrics = metrics;
        true
    }

    /// Feed a pointer event. Returns whether the orientation changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match self.drag.handle(event) {
            Some(delta) => {
                self.rotation.apply_drag(delta);
                tracing::trace!(
                    yaw = self.rotation.yaw(),
                    pitch = self.rotation.pitch(),
                    "drag"
                );
                true
            }
            None => false,
        }
    }

    /// Step the automatic animation by one frame. Nothing moves while the
    /// user is dragging or when motion is reduced.
    pub fn advance(&mut self) {
        if self.drag.is_dragging() || self.options.reduced_motion {
            return;
        }
        self.rotation.advance(self.options.auto_yaw_speed);
        self.time += 1;
    }

    /// Paint the current state: background, stars, surface, wireframe,
    /// rings, orbiters. An empty surface draws nothing.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let m = &self.metrics;
        if m.is_empty() {
            return;
        }
        let culling = &self.options.culling;

        canvas.clear(self.options.background);
        starfield::draw(canvas, m);
        surface::draw(canvas, m, &self.rotation, &self.mask, culling.surface_back_face);
        wireframe::draw(canvas, m, &self.rotation, culling.wireframe_near_side);
        rings::draw(canvas, m, &self.rotation, self.time);
        orbiters::draw(
            canvas,
            &self.options.orbits,
            m,
            &self.rotation,
            self.time,
            culling.orbiter_far_side,
        );
    }

    /// One animation frame: advance, then render.
    pub fn tick(&mut self, canvas: &mut impl Canvas) {
        self.advance();
        self.render(canvas);
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn options(&self) -> &GlobeOptions {
        &self.options
    }
}
