//! Integration tests for the scroll-throttled updater
//!
//! These tests drive a ScrollUpdater with a recording scheduler and a
//! recording style target, verifying:
//! - Proportional and clamped offset computation
//! - Leading coalescing (one frame per burst of scroll notifications)
//! - Tick-flag lifecycle across frames, failures, and cancellation
//! - Timer-fallback cadence bounds

use std::cell::RefCell;
use std::rc::Rc;

use parallax::{
    FallbackCadence, FrameCallback, FrameHandle, FrameScheduler, ScheduleError, ScrollUpdater,
    StyleTarget, FRAME_INTERVAL_MS,
};

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct SchedulerState {
    pending: Vec<(FrameHandle, FrameCallback)>,
    requests: u32,
    cancelled: Vec<FrameHandle>,
    next_id: i32,
    fail_requests: bool,
}

/// Scheduler that queues callbacks until the test fires a frame.
#[derive(Clone, Default)]
struct TestScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl TestScheduler {
    /// Fire all queued callbacks, as the host would at the next repaint.
    fn run_frame(&self, now_ms: f64) {
        let pending: Vec<_> = self.state.borrow_mut().pending.drain(..).collect();
        for (_, callback) in pending {
            callback(now_ms);
        }
    }

    fn request_count(&self) -> u32 {
        self.state.borrow().requests
    }

    fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    fn cancelled(&self) -> Vec<FrameHandle> {
        self.state.borrow().cancelled.clone()
    }

    fn fail_requests(&self, fail: bool) {
        self.state.borrow_mut().fail_requests = fail;
    }
}

impl FrameScheduler for TestScheduler {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError> {
        let mut state = self.state.borrow_mut();
        state.requests += 1;
        if state.fail_requests {
            return Err(ScheduleError::RequestFailed);
        }
        state.next_id += 1;
        let handle = FrameHandle(state.next_id);
        state.pending.push((handle, callback));
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        state.cancelled.push(handle);
        state.pending.retain(|(h, _)| *h != handle);
    }
}

/// Style target that records every applied offset.
#[derive(Clone, Default)]
struct TestTarget {
    writes: Rc<RefCell<Vec<f64>>>,
}

impl TestTarget {
    fn writes(&self) -> Vec<f64> {
        self.writes.borrow().clone()
    }
}

impl StyleTarget for TestTarget {
    fn apply_offset(&mut self, offset_px: f64) {
        self.writes.borrow_mut().push(offset_px);
    }
}

fn create_updater(
    divisor: f64,
) -> (
    ScrollUpdater<TestScheduler, TestTarget>,
    TestScheduler,
    TestTarget,
) {
    let scheduler = TestScheduler::default();
    let target = TestTarget::default();
    let updater = ScrollUpdater::new(divisor, scheduler.clone(), target.clone()).unwrap();
    (updater, scheduler, target)
}

// =============================================================================
// Offset computation
// =============================================================================

#[test]
fn test_offset_is_scroll_over_divisor() {
    let (updater, scheduler, target) = create_updater(2.0);
    updater.on_scroll(100.0);
    scheduler.run_frame(16.0);
    assert_eq!(target.writes(), vec![50.0]);
}

#[test]
fn test_negative_scroll_applies_zero() {
    let (updater, scheduler, target) = create_updater(2.0);
    updater.on_scroll(-30.0);
    scheduler.run_frame(16.0);
    assert_eq!(target.writes(), vec![0.0]);
}

#[test]
fn test_invalid_divisor_rejected_at_construction() {
    let scheduler = TestScheduler::default();
    let target = TestTarget::default();
    assert!(ScrollUpdater::new(0.0, scheduler.clone(), target.clone()).is_err());
    assert!(ScrollUpdater::new(-1.0, scheduler.clone(), target.clone()).is_err());
    assert!(ScrollUpdater::new(f64::NAN, scheduler, target).is_err());
}

// =============================================================================
// Coalescing
// =============================================================================

#[test]
fn test_burst_of_scrolls_schedules_one_frame_with_last_offset() {
    let (updater, scheduler, target) = create_updater(2.0);

    updater.on_scroll(100.0);
    updater.on_scroll(250.0);
    updater.on_scroll(400.0);

    assert_eq!(scheduler.request_count(), 1);
    assert_eq!(scheduler.pending_count(), 1);

    scheduler.run_frame(16.0);
    // 400 / 2, not 50 or 125.
    assert_eq!(target.writes(), vec![200.0]);
}

#[test]
fn test_tick_clears_after_frame_so_next_scroll_schedules() {
    let (updater, scheduler, target) = create_updater(2.0);

    updater.on_scroll(100.0);
    assert!(updater.is_ticking());
    scheduler.run_frame(16.0);
    assert!(!updater.is_ticking());

    updater.on_scroll(300.0);
    assert_eq!(scheduler.request_count(), 2);
    scheduler.run_frame(32.0);
    assert_eq!(target.writes(), vec![50.0, 150.0]);
}

#[test]
fn test_frame_without_new_scroll_is_idempotent() {
    let (updater, scheduler, target) = create_updater(2.0);

    updater.on_scroll(100.0);
    scheduler.run_frame(16.0);

    // Re-schedule with the same sample: same style value both times.
    updater.on_scroll(100.0);
    scheduler.run_frame(32.0);

    assert_eq!(target.writes(), vec![50.0, 50.0]);
}

#[test]
fn test_no_scroll_no_frame() {
    let (_updater, scheduler, target) = create_updater(2.0);
    scheduler.run_frame(16.0);
    assert_eq!(scheduler.request_count(), 0);
    assert!(target.writes().is_empty());
}

// =============================================================================
// Failure and cancellation
// =============================================================================

#[test]
fn test_failed_request_clears_tick_and_retries_on_next_scroll() {
    let (updater, scheduler, target) = create_updater(2.0);

    scheduler.fail_requests(true);
    updater.on_scroll(100.0);
    assert!(!updater.is_ticking());
    assert!(target.writes().is_empty());

    scheduler.fail_requests(false);
    updater.on_scroll(200.0);
    assert!(updater.is_ticking());
    scheduler.run_frame(16.0);
    assert_eq!(target.writes(), vec![100.0]);
}

#[test]
fn test_cancel_pending_revokes_frame_and_clears_tick() {
    let (updater, scheduler, target) = create_updater(2.0);

    updater.on_scroll(100.0);
    updater.cancel_pending();

    assert!(!updater.is_ticking());
    assert_eq!(scheduler.cancelled().len(), 1);
    assert_eq!(scheduler.pending_count(), 0);

    scheduler.run_frame(16.0);
    assert!(target.writes().is_empty());

    // Cancelling again with nothing pending is a no-op.
    updater.cancel_pending();
    assert_eq!(scheduler.cancelled().len(), 1);
}

// =============================================================================
// Fallback cadence
// =============================================================================

#[test]
fn test_fallback_fires_within_one_interval() {
    let mut cadence = FallbackCadence::default();
    let _ = cadence.next_delay_ms(1000.0);
    let delay = cadence.next_delay_ms(1001.0);
    assert!(delay >= 0.0);
    assert!(delay <= FRAME_INTERVAL_MS);
}

#[test]
fn test_fallback_cadence_bounded_error_over_many_frames() {
    let mut cadence = FallbackCadence::default();
    let start = 5000.0;
    let _ = cadence.next_delay_ms(start);
    let mut fire = cadence.fire_time_ms();
    // Re-request 2ms after each fire for 100 frames.
    for _ in 0..100 {
        let now = fire + 2.0;
        let delay = cadence.next_delay_ms(now);
        fire = now + delay;
    }
    // 101 fires at a 16ms target: total error stays within one interval.
    let expected = start + 100.0 * FRAME_INTERVAL_MS;
    assert!((fire - expected).abs() <= FRAME_INTERVAL_MS);
}
