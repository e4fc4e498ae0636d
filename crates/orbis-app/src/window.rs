//! Window creation and event handling via winit.
//!
//! [`AppState`] implements winit's [`ApplicationHandler`]: it owns the window,
//! the GPU presenter and the [`GlobeView`], and translates window events into
//! resizes, pointer events and frame callbacks.

use std::sync::Arc;

use orbis_config::Config;
use orbis_globe::GlobeOptions;
use orbis_input::PointerInput;
use orbis_render::{
    FramePresenter, RenderContext, SurfaceError, SurfaceResizeEvent, SurfaceWrapper,
    init_render_context_blocking,
};
use tracing::{debug, error, info, instrument};
use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::{Touch, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::view::GlobeView;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            f64::from(config.window.width),
            f64::from(config.window.height),
        ))
}

pub struct AppState {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    presenter: Option<FramePresenter>,
    surface: SurfaceWrapper,
    pointer: PointerInput,
    view: Option<GlobeView>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            presenter: None,
            surface: SurfaceWrapper::default(),
            pointer: PointerInput::default(),
            view: None,
        }
    }

    /// Current logical surface size.
    pub fn logical_size(&self) -> (f64, f64) {
        (self.surface.logical_width(), self.surface.logical_height())
    }

    pub fn view(&self) -> Option<&GlobeView> {
        self.view.as_ref()
    }

    fn apply_resize(&mut self, event_loop: &ActiveEventLoop, resize: SurfaceResizeEvent) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(resize.physical.width, resize.physical.height);
        }
        if let Some(view) = &mut self.view {
            view.on_resize(resize);
        }
        info!(
            width = resize.physical.width,
            height = resize.physical.height,
            scale = resize.scale_factor,
            "Surface resized"
        );
        self.present(event_loop);
    }

    /// Put the view's framebuffer on screen.
    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gpu), Some(presenter), Some(view)) =
            (&mut self.gpu, &mut self.presenter, &self.view)
        else {
            return;
        };
        match presenter.present(gpu, view.framebuffer()) {
            Ok(()) => {}
            Err(SurfaceError::Lost) => {
                let size = self.surface.physical_size();
                gpu.resize(size.width, size.height);
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(SurfaceError::Timeout) => debug!("Surface timeout, frame skipped"),
        }
    }

    fn forward_pointer(&mut self, event: orbis_input::PointerEvent) {
        if let Some(view) = &mut self.view {
            view.on_pointer(event);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(window_attributes_from_config(&self.config)) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                debug!("No window available ({e}), nothing to draw on");
                event_loop.exit();
                return;
            }
        };

        let scale_factor = window.scale_factor();
        let inner_size = window.inner_size();
        self.surface = SurfaceWrapper::new(inner_size.width, inner_size.height, scale_factor);
        self.pointer.set_scale_factor(scale_factor);

        let gpu = match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(ctx) => ctx,
            Err(e) => {
                debug!("No drawing surface ({e}), globe not shown");
                event_loop.exit();
                return;
            }
        };
        self.presenter = Some(FramePresenter::new(&gpu.device, gpu.surface_format));
        self.gpu = Some(gpu);

        self.view = GlobeView::attach(
            Some(&self.surface),
            GlobeOptions::from_config(&self.config),
            self.config.window.pixel_ratio,
        );
        if let Some(view) = &mut self.view {
            view.start(&*window);
        }
        self.window = Some(window);
        self.present(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                if let Some(view) = self.view.take() {
                    view.detach();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(resize) = self.surface.handle_resize(new_size.width, new_size.height) {
                    self.apply_resize(event_loop, resize);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let Some(window) = &self.window else {
                    return;
                };
                let inner = window.inner_size();
                let resize =
                    self.surface
                        .handle_scale_factor_changed(scale_factor, inner.width, inner.height);
                self.pointer.set_scale_factor(resize.scale_factor);
                self.apply_resize(event_loop, resize);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.on_cursor_moved(position.x, position.y);
                self.forward_pointer(event);
            }
            WindowEvent::MouseInput { state, .. } => {
                let event = self.pointer.on_button(state);
                self.forward_pointer(event);
            }
            WindowEvent::CursorLeft { .. } => {
                let event = self.pointer.on_cursor_left();
                self.forward_pointer(event);
            }
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => {
                if let Some(event) = self.pointer.on_touch(id, phase, location.x, location.y) {
                    self.forward_pointer(event);
                }
            }
            WindowEvent::RedrawRequested => {
                // Under reduced motion this only re-presents the static frame.
                if let (Some(window), Some(view)) = (&self.window, &mut self.view) {
                    view.on_frame(&**window);
                }
                self.present(event_loop);
            }
            _ => {}
        }
    }
}

/// Creates an event loop and runs the globe window until it is closed.
#[instrument(skip(config))]
pub fn run(config: Config) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = AppState::new(config);
    event_loop.run_app(&mut app)
}
