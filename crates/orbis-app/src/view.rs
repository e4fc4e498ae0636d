//! A globe attached to one drawing surface.
//!
//! [`GlobeView`] owns the globe state, the software framebuffer it paints
//! into and the frame scheduler. Creating it requires a surface; without one
//! there is simply no view.

use orbis_globe::{Globe, GlobeOptions};
use orbis_input::PointerEvent;
use orbis_render::{Framebuffer, SurfaceResizeEvent, SurfaceWrapper};
use tracing::{debug, info};

use crate::scheduler::{FrameRequester, FrameScheduler};

pub struct GlobeView {
    globe: Globe,
    framebuffer: Framebuffer,
    scheduler: FrameScheduler,
    pixel_ratio_override: Option<f64>,
    render_count: u64,
}

impl GlobeView {
    /// Bind a globe to `surface` and draw its initial state. Returns `None`
    /// when there is no surface to draw on.
    pub fn attach(
        surface: Option<&SurfaceWrapper>,
        options: GlobeOptions,
        pixel_ratio_override: Option<f64>,
    ) -> Option<Self> {
        let Some(surface) = surface else {
            debug!("No drawing surface, globe not attached");
            return None;
        };

        let reduced_motion = options.reduced_motion;
        let mut view = Self {
            globe: Globe::new(options),
            framebuffer: Framebuffer::new(0, 0),
            scheduler: FrameScheduler::new(reduced_motion),
            pixel_ratio_override,
            render_count: 0,
        };
        view.on_resize(surface.event());

        let (width, height) = (view.framebuffer.width(), view.framebuffer.height());
        info!(width, height, reduced_motion, "Globe attached");
        Some(view)
    }

    /// Start the animation loop (no-op under reduced motion).
    pub fn start(&mut self, requester: &dyn FrameRequester) {
        self.scheduler.start(requester);
    }

    /// Re-layout for a new surface size and redraw the current state
    /// immediately, without advancing the animation.
    pub fn on_resize(&mut self, event: SurfaceResizeEvent) {
        let ratio = self.pixel_ratio_override.unwrap_or(event.scale_factor);
        self.globe
            .resize(event.logical_width, event.logical_height, ratio);

        let metrics = self.globe.metrics();
        let (width, height) = metrics.backing_size();
        self.framebuffer.resize(width, height);
        self.framebuffer.set_scale(metrics.pixel_ratio);
        self.render();
    }

    /// Forward a pointer event. Returns whether the orientation changed; the
    /// change becomes visible on the next frame.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        self.globe.handle_pointer(event)
    }

    /// Handle a frame callback from the host. Returns whether a new frame
    /// was rendered.
    pub fn on_frame(&mut self, requester: &dyn FrameRequester) -> bool {
        let Self {
            globe,
            framebuffer,
            scheduler,
            ..
        } = self;
        let ticked = scheduler.on_frame(requester, || globe.tick(framebuffer));
        if ticked {
            self.render_count += 1;
        }
        ticked
    }

    /// Stop requesting frames.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Tear the view down, stopping its loop.
    pub fn detach(mut self) {
        self.stop();
        debug!(renders = self.render_count, "Globe detached");
    }

    fn render(&mut self) {
        self.globe.render(&mut self.framebuffer);
        self.render_count += 1;
    }

    pub fn globe(&self) -> &Globe {
        &self.globe
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Number of frames painted, including resize redraws.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::CountingRequester;

    fn surface() -> SurfaceWrapper {
        SurfaceWrapper::new(400, 300, 1.0)
    }

    fn reduced() -> GlobeOptions {
        GlobeOptions {
            reduced_motion: true,
            ..GlobeOptions::default()
        }
    }

    #[test]
    fn test_missing_surface_is_a_silent_no_op() {
        assert!(GlobeView::attach(None, GlobeOptions::default(), None).is_none());
    }

    #[test]
    fn test_attach_draws_initial_state_without_ticking() {
        let view = GlobeView::attach(Some(&surface()), GlobeOptions::default(), None).unwrap();
        assert_eq!(view.render_count(), 1);
        assert_eq!(view.globe().time(), 0);
        assert_eq!(view.framebuffer().width(), 400);
        assert_eq!(view.framebuffer().pixel(0, 0), Some([8, 10, 24, 255]));
    }

    #[test]
    fn test_reduced_motion_renders_once_and_never_schedules() {
        let requester = CountingRequester::default();
        let mut view = GlobeView::attach(Some(&surface()), reduced(), None).unwrap();
        view.start(&requester);
        for _ in 0..3 {
            assert!(!view.on_frame(&requester));
        }
        assert_eq!(view.render_count(), 1);
        assert_eq!(requester.requests.get(), 0);
        assert_eq!(view.globe().rotation().yaw(), 0.0);
    }

    #[test]
    fn test_first_frame_advances_and_reschedules() {
        let requester = CountingRequester::default();
        let mut view = GlobeView::attach(Some(&surface()), GlobeOptions::default(), None).unwrap();
        view.start(&requester);
        assert!(view.on_frame(&requester));

        assert!((view.globe().rotation().yaw() - 0.004).abs() < 1e-15);
        assert_eq!(view.globe().time(), 1);
        assert_eq!(requester.requests.get(), 2);
    }

    #[test]
    fn test_resize_redraws_without_advancing() {
        let requester = CountingRequester::default();
        let mut view = GlobeView::attach(Some(&surface()), GlobeOptions::default(), None).unwrap();
        view.start(&requester);
        view.on_frame(&requester);

        let mut wrapper = surface();
        let event = wrapper.handle_scale_factor_changed(2.0, 800, 600);
        view.on_resize(event);

        assert_eq!(view.globe().time(), 1);
        assert_eq!(view.render_count(), 3);
        assert_eq!(
            (view.framebuffer().width(), view.framebuffer().height()),
            (800, 600)
        );
        assert_eq!(view.framebuffer().scale(), 2.0);
        assert_eq!(view.globe().metrics().width, 400.0);
    }

    #[test]
    fn test_pixel_ratio_override_sets_backing_size() {
        let view = GlobeView::attach(Some(&surface()), reduced(), Some(3.0)).unwrap();
        assert_eq!(
            (view.framebuffer().width(), view.framebuffer().height()),
            (1200, 900)
        );
    }

    #[test]
    fn test_drag_freezes_animation() {
        let requester = CountingRequester::default();
        let mut view = GlobeView::attach(Some(&surface()), GlobeOptions::default(), None).unwrap();
        view.start(&requester);

        view.on_pointer(PointerEvent::Down { x: 100.0, y: 100.0 });
        assert!(view.on_pointer(PointerEvent::Move { x: 110.0, y: 115.0 }));
        view.on_frame(&requester);

        let rotation = view.globe().rotation();
        assert!((rotation.yaw() - 0.10).abs() < 1e-12);
        assert!((rotation.pitch() - 0.275).abs() < 1e-12);
        assert_eq!(view.globe().time(), 0);
    }

    #[test]
    fn test_stop_prevents_further_frames() {
        let requester = CountingRequester::default();
        let mut view = GlobeView::attach(Some(&surface()), GlobeOptions::default(), None).unwrap();
        view.start(&requester);
        view.stop();
        assert!(!view.on_frame(&requester));
        assert_eq!(requester.requests.get(), 1);
        view.detach();
    }
}
