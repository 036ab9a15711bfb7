//! Frame schedulers backed by the browser
//!
//! [`probe`] decides once, at attach time, whether the host has a native
//! "run before next repaint" primitive. Hosts without one get a timer
//! approximation that targets the cadence from [`FallbackCadence`].

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::schedule::{FallbackCadence, FrameCallback, FrameHandle, FrameScheduler, ScheduleError};

use super::{date_now, log};

/// Scheduler chosen for this host.
pub enum HostScheduler {
    /// Native animation-frame primitive.
    Animation(RafScheduler),
    /// Timer approximation targeting ~16ms.
    Timer(TimeoutScheduler),
}

/// Probe the window once for a native frame-scheduling primitive.
pub fn probe(window: &Window) -> HostScheduler {
    let has_native = js_sys::Reflect::has(
        window.as_ref(),
        &JsValue::from_str("requestAnimationFrame"),
    )
    .unwrap_or(false);

    if has_native {
        HostScheduler::Animation(RafScheduler::new(window.clone()))
    } else {
        log("[parallax] no native frame scheduling, falling back to ~16ms timer");
        HostScheduler::Timer(TimeoutScheduler::new(window.clone()))
    }
}

impl FrameScheduler for HostScheduler {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError> {
        match self {
            HostScheduler::Animation(s) => s.request(callback),
            HostScheduler::Timer(s) => s.request(callback),
        }
    }

    fn cancel(&self, handle: FrameHandle) {
        match self {
            HostScheduler::Animation(s) => s.cancel(handle),
            HostScheduler::Timer(s) => s.cancel(handle),
        }
    }
}

/// Scheduler over `requestAnimationFrame` / `cancelAnimationFrame`.
pub struct RafScheduler {
    window: Window,
    // Keeps the pending closure alive until the host fires it. At most one
    // request is outstanding, so a single slot suffices; replacing it drops
    // the previous (already fired or cancelled) closure.
    slot: RefCell<Option<Closure<dyn FnOnce(f64)>>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            slot: RefCell::new(None),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError> {
        let closure = Closure::once(move |now_ms: f64| callback(now_ms));
        let id = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|_| ScheduleError::RequestFailed)?;
        self.slot.replace(Some(closure));
        Ok(FrameHandle(id))
    }

    fn cancel(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
        self.slot.replace(None);
    }
}

/// Scheduler over `setTimeout` / `clearTimeout` with drift-free cadence.
pub struct TimeoutScheduler {
    window: Window,
    cadence: RefCell<FallbackCadence>,
    slot: RefCell<Option<Closure<dyn FnOnce()>>>,
}

impl TimeoutScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            cadence: RefCell::new(FallbackCadence::default()),
            slot: RefCell::new(None),
        }
    }
}

impl FrameScheduler for TimeoutScheduler {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError> {
        let now_ms = date_now();
        let delay_ms = self.cadence.borrow_mut().next_delay_ms(now_ms);
        let fire_ms = now_ms + delay_ms;
        let closure = Closure::once(move || callback(fire_ms));
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .map_err(|_| ScheduleError::RequestFailed)?;
        self.slot.replace(Some(closure));
        Ok(FrameHandle(id))
    }

    fn cancel(&self, handle: FrameHandle) {
        self.window.clear_timeout_with_handle(handle.0);
        self.slot.replace(None);
    }
}
