//! Display-synchronised frame loop.
//!
//! Each frame runs exactly one tick and then asks the host for the next
//! frame. In static mode (reduced motion) nothing is ever scheduled; the
//! caller renders once on its own.

use tracing::debug;

/// Asks the windowing system for one more frame callback.
pub trait FrameRequester {
    fn request_frame(&self);
}

impl FrameRequester for winit::window::Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Tick on every display refresh.
    Continuous,
    /// Never tick; the view shows one static frame.
    Static,
}

/// Drives the per-frame tick and keeps count of what it did.
#[derive(Debug)]
pub struct FrameScheduler {
    mode: LoopMode,
    running: bool,
    frame_count: u64,
    request_count: u64,
}

impl FrameScheduler {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            mode: if reduced_motion {
                LoopMode::Static
            } else {
                LoopMode::Continuous
            },
            running: false,
            frame_count: 0,
            request_count: 0,
        }
    }

    /// Begin the loop by requesting the first frame. Does nothing in static
    /// mode or when already running.
    pub fn start(&mut self, requester: &dyn FrameRequester) {
        if self.running {
            return;
        }
        match self.mode {
            LoopMode::Continuous => {
                self.running = true;
                self.request(requester);
                debug!("Frame loop started");
            }
            LoopMode::Static => debug!("Reduced motion: showing a single static frame"),
        }
    }

    /// Handle a frame callback: run `tick` once and schedule the next frame.
    /// Returns whether `tick` ran.
    pub fn on_frame(&mut self, requester: &dyn FrameRequester, tick: impl FnOnce()) -> bool {
        if !self.running {
            return false;
        }
        tick();
        self.frame_count += 1;
        self.request(requester);
        true
    }

    /// Stop scheduling. Pending frame callbacks become no-ops.
    pub fn stop(&mut self) {
        if self.running {
            debug!(frames = self.frame_count, "Frame loop stopped");
        }
        self.running = false;
    }

    fn request(&mut self, requester: &dyn FrameRequester) {
        requester.request_frame();
        self.request_count += 1;
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total number of ticks run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total number of frames requested from the host.
    pub fn request_count(&self) -> u64 {
        self.request_count
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts frame requests instead of talking to a window.
    #[derive(Default)]
    pub(crate) struct CountingRequester {
        pub(crate) requests: Cell<u32>,
    }

    impl FrameRequester for CountingRequester {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    #[test]
    fn test_start_requests_first_frame() {
        let requester = CountingRequester::default();
        let mut scheduler = FrameScheduler::new(false);
        scheduler.start(&requester);
        assert!(scheduler.is_running());
        assert_eq!(requester.requests.get(), 1);

        scheduler.start(&requester);
        assert_eq!(requester.requests.get(), 1);
    }

    #[test]
    fn test_each_frame_ticks_once_and_reschedules() {
        let requester = CountingRequester::default();
        let mut scheduler = FrameScheduler::new(false);
        scheduler.start(&requester);

        let mut ticks = 0;
        for _ in 0..5 {
            assert!(scheduler.on_frame(&requester, || ticks += 1));
        }
        assert_eq!(ticks, 5);
        assert_eq!(scheduler.frame_count(), 5);
        assert_eq!(requester.requests.get(), 6);
        assert_eq!(scheduler.request_count(), 6);
    }

    #[test]
    fn test_static_mode_never_schedules() {
        let requester = CountingRequester::default();
        let mut scheduler = FrameScheduler::new(true);
        assert_eq!(scheduler.mode(), LoopMode::Static);
        scheduler.start(&requester);

        let mut ticks = 0;
        assert!(!scheduler.on_frame(&requester, || ticks += 1));
        assert_eq!(ticks, 0);
        assert_eq!(requester.requests.get(), 0);
    }

    #[test]
    fn test_stop_ends_the_loop() {
        let requester = CountingRequester::default();
        let mut scheduler = FrameScheduler::new(false);
        scheduler.start(&requester);
        scheduler.on_frame(&requester, || {});
        scheduler.stop();

        let mut ticked = false;
        assert!(!scheduler.on_frame(&requester, || ticked = true));
        assert!(!ticked);
        assert_eq!(requester.requests.get(), 2);
    }

    #[test]
    fn test_frame_before_start_is_ignored() {
        let requester = CountingRequester::default();
        let mut scheduler = FrameScheduler::new(false);
        assert!(!scheduler.on_frame(&requester, || {}));
        assert_eq!(scheduler.frame_count(), 0);
    }
}
