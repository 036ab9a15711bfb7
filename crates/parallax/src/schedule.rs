//! Frame scheduling capability
//!
//! The updater never talks to the host's scheduling primitive directly; it
//! goes through [`FrameScheduler`], chosen once at attach time. Browsers
//! with a native "run before next repaint" primitive get that; hosts
//! without one get a timer approximation driven by [`FallbackCadence`].

/// Target interval of the timer fallback, in milliseconds (~60 fps).
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Opaque identifier for a pending frame request, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Callback invoked once per granted frame, with the host timestamp in
/// milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Errors raised while requesting a frame.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// The host rejected the frame request.
    #[error("host rejected the frame request")]
    RequestFailed,
}

/// Capability trait: run a callback once before the next repaint.
///
/// Implementations must invoke the callback asynchronously — after
/// `request` has returned — and at most once. At most one request is
/// outstanding at any time (the updater's tick flag guarantees it), so a
/// single pending-callback slot is enough.
pub trait FrameScheduler {
    /// Request one frame callback. Returns a handle for [`cancel`].
    ///
    /// [`cancel`]: FrameScheduler::cancel
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError>;

    /// Revoke a pending request. Cancelling an already-fired or unknown
    /// handle is a no-op.
    fn cancel(&self, handle: FrameHandle);
}

/// Drift-free delay computation for the timer fallback.
///
/// Each request gets `max(0, interval - (now - last_fire))` and the fire
/// time advances to `now + delay`, so a callback that arrives late eats
/// into the next delay instead of pushing the whole cadence back. Lateness
/// never accumulates across requests.
#[derive(Clone, Debug)]
pub struct FallbackCadence {
    interval_ms: f64,
    last_fire_ms: f64,
}

impl FallbackCadence {
    /// Cadence targeting the given interval. The first request fires
    /// immediately.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: f64::NEG_INFINITY,
        }
    }

    /// Delay in milliseconds until the next fire, given the current host
    /// time. Advances internal bookkeeping to the computed fire time.
    pub fn next_delay_ms(&mut self, now_ms: f64) -> f64 {
        let delay = (self.interval_ms - (now_ms - self.last_fire_ms)).max(0.0);
        self.last_fire_ms = now_ms + delay;
        delay
    }

    /// Host time the most recently computed request will fire at.
    pub fn fire_time_ms(&self) -> f64 {
        self.last_fire_ms
    }
}

impl Default for FallbackCadence {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_fires_immediately() {
        let mut cadence = FallbackCadence::default();
        assert_eq!(cadence.next_delay_ms(1_000_000.0), 0.0);
        assert!((cadence.fire_time_ms() - 1_000_000.0).abs() < 0.001);
    }

    #[test]
    fn test_steady_requests_settle_on_interval() {
        let mut cadence = FallbackCadence::default();
        let mut now = 1000.0;
        let _ = cadence.next_delay_ms(now);
        let mut fires = Vec::new();
        // Re-request 1ms after each fire, as a scroll handler would.
        for _ in 0..10 {
            now = cadence.fire_time_ms() + 1.0;
            let delay = cadence.next_delay_ms(now);
            fires.push(now + delay);
        }
        for pair in fires.windows(2) {
            assert!((pair[1] - pair[0] - FRAME_INTERVAL_MS).abs() < 0.001);
        }
    }

    #[test]
    fn test_late_request_does_not_accumulate_drift() {
        let mut cadence = FallbackCadence::default();
        let _ = cadence.next_delay_ms(0.0);

        // Request arrives 40ms late: fires immediately, cadence resyncs.
        let delay = cadence.next_delay_ms(40.0);
        assert_eq!(delay, 0.0);
        assert!((cadence.fire_time_ms() - 40.0).abs() < 0.001);

        // Next on-time request is a full interval out again, not shortened
        // by the earlier lateness.
        let delay = cadence.next_delay_ms(41.0);
        assert!((delay - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_delay_never_negative() {
        let mut cadence = FallbackCadence::default();
        let _ = cadence.next_delay_ms(0.0);
        assert!(cadence.next_delay_ms(1e9) >= 0.0);
    }
}
