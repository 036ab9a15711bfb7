//! Scroll-throttled position updater
//!
//! [`ScrollUpdater`] wires a [`ParallaxEffect`] to an injected
//! [`FrameScheduler`] and [`StyleTarget`]. The scroll callback and the
//! frame callback share the instance through `Rc<RefCell<..>>` — the host
//! runs them one at a time on a single logical thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::effect::ParallaxEffect;
use crate::error::EffectError;
use crate::schedule::{FrameCallback, FrameHandle, FrameScheduler};
use crate::style::StyleTarget;

struct Inner<S, T> {
    effect: ParallaxEffect,
    scheduler: S,
    target: T,
    pending: Option<FrameHandle>,
}

/// One updater instance per animated element.
///
/// Cheap to clone; clones share the same state, which is how the scroll
/// listener and the frame callback both reach it.
pub struct ScrollUpdater<S, T>
where
    S: FrameScheduler + 'static,
    T: StyleTarget + 'static,
{
    inner: Rc<RefCell<Inner<S, T>>>,
}

impl<S, T> Clone for ScrollUpdater<S, T>
where
    S: FrameScheduler + 'static,
    T: StyleTarget + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, T> ScrollUpdater<S, T>
where
    S: FrameScheduler + 'static,
    T: StyleTarget + 'static,
{
    /// Create an updater over the given scheduler and target.
    pub fn new(speed_divisor: f64, scheduler: S, target: T) -> Result<Self, EffectError> {
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                effect: ParallaxEffect::new(speed_divisor)?,
                scheduler,
                target,
                pending: None,
            })),
        })
    }

    /// Handle one scroll notification.
    ///
    /// Records the offset and, if no frame is pending, requests one. Never
    /// panics and never surfaces an error: a failed frame request clears
    /// the tick flag so the next notification retries.
    pub fn on_scroll(&self, offset: f64) {
        if !self.inner.borrow_mut().effect.record_scroll(offset) {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let callback: FrameCallback = Box::new(move |_now_ms| {
            if let Some(inner) = weak.upgrade() {
                Self::run_frame(&inner);
            }
        });

        let requested = {
            let inner = self.inner.borrow();
            inner.scheduler.request(callback)
        };
        let mut inner = self.inner.borrow_mut();
        match requested {
            Ok(handle) => inner.pending = Some(handle),
            Err(_) => inner.effect.clear_tick(),
        }
    }

    /// Execute the granted frame: one style write from the latest sample.
    fn run_frame(inner: &Rc<RefCell<Inner<S, T>>>) {
        let mut inner = inner.borrow_mut();
        inner.pending = None;
        let offset = inner.effect.frame_offset();
        inner.target.apply_offset(offset);
    }

    /// Revoke a pending frame request, if any, and clear the tick flag.
    pub fn cancel_pending(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.pending.take() {
            inner.effect.clear_tick();
            inner.scheduler.cancel(handle);
        }
    }

    /// True while a frame request is pending.
    pub fn is_ticking(&self) -> bool {
        self.inner.borrow().effect.is_ticking()
    }

    /// Latest recorded scroll offset.
    pub fn last_scroll(&self) -> f64 {
        self.inner.borrow().effect.last_scroll()
    }
}

/// Single-shot initialization guard.
///
/// Hosts can deliver more than one readiness signal (content parsed, page
/// fully loaded); whichever arrives first claims the guard, the rest
/// become no-ops.
#[derive(Debug, Default)]
pub struct InitGuard {
    claimed: Cell<bool>,
}

impl InitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once; every later call returns `false`.
    pub fn try_claim(&self) -> bool {
        !self.claimed.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_guard_claims_once() {
        let guard = InitGuard::new();
        assert!(guard.try_claim());
        assert!(!guard.try_claim());
        assert!(!guard.try_claim());
    }
}
