//! Frame clock
//!
//! Wraps the host's frame-scheduling primitive and a monotonic time source.
//! The clock holds at most one outstanding frame request: `start` arms the
//! first one, every delivered tick re-arms the next *before* any listener
//! work runs, and `stop` cancels whatever is pending. Re-arming first means
//! a `stop()` issued from inside the tick's listener work still cancels the
//! request armed for the following frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Opaque handle for one pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest(pub u64);

/// The host's frame-scheduling primitive: arm one callback slot near the
/// next display refresh, with best-effort cancellation.
///
/// The host answers an armed request by calling
/// [`Animator::tick`](crate::Animator::tick) (or the clock owner's
/// equivalent) when the frame arrives. A host that never answers leaves the
/// clock silently stalled; there is no watchdog.
pub trait FrameSource {
    /// Ask the host for one future frame.
    fn request_frame(&mut self) -> FrameRequest;

    /// Best-effort cancellation; a frame already in flight may still arrive.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Monotonic time in milliseconds.
pub trait TimeSource {
    /// Strictly non-decreasing timestamp, in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Default frame source: hands out numbered requests and otherwise trusts
/// the host to drive frames on its own schedule. Suitable wherever the
/// embedder calls [`Animator::tick`](crate::Animator::tick) or
/// [`Animator::frame`](crate::Animator::frame) itself.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next: u64,
}

impl FrameSource for ManualFrames {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next);
        self.next += 1;
        request
    }

    fn cancel_frame(&mut self, _request: FrameRequest) {}
}

/// Default time source backed by [`Instant`], measured from construction.
#[derive(Clone, Debug)]
pub struct SteadyTime {
    origin: Instant,
}

impl SteadyTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SteadyTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SteadyTime {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Host-controlled time source. Clones share one value, so a host (or a
/// test) can keep a handle and advance time while the clock reads it.
#[derive(Clone, Debug, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward (or anywhere; the clock only requires that hosts
    /// never move it backwards).
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn get(&self) -> f64 {
        self.now.get()
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Converts raw frame deliveries into a running/stopped flag and a
/// timestamp for the owner to forward to listener work.
pub struct Clock {
    source: Box<dyn FrameSource>,
    time: Box<dyn TimeSource>,
    pending: Option<FrameRequest>,
    running: bool,
    start_time: Option<f64>,
}

impl Clock {
    /// Clock over the default manual frame source and steady time.
    pub fn new() -> Self {
        Self::with_sources(Box::new(ManualFrames::default()), Box::new(SteadyTime::new()))
    }

    /// Clock over injected frame and time sources.
    pub fn with_sources(source: Box<dyn FrameSource>, time: Box<dyn TimeSource>) -> Self {
        Self {
            source,
            time,
            pending: None,
            running: false,
            start_time: None,
        }
    }

    /// Record the start time and arm the first frame request. No-op while
    /// already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.start_time = Some(self.time.now_ms());
        self.pending = Some(self.source.request_frame());
        tracing::debug!("clock started");
    }

    /// Cancel the pending frame request and go idle. No-op while stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(request) = self.pending.take() {
            self.source.cancel_frame(request);
        }
        tracing::debug!("clock stopped");
    }

    /// Handle one delivered frame: read the current time, re-arm the next
    /// request, and hand the timestamp back for listener work. Returns
    /// `None` when the clock is stopped (a cancelled-but-in-flight frame).
    pub fn tick(&mut self) -> Option<f64> {
        if !self.running {
            return None;
        }
        let now = self.time.now_ms();
        self.pending = Some(self.source.request_frame());
        Some(now)
    }

    /// Current monotonic time, running or not.
    pub fn now_ms(&self) -> f64 {
        self.time.now_ms()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time recorded when the clock last started.
    pub fn start_time_ms(&self) -> Option<f64> {
        self.start_time
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
