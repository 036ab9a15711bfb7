//! Scroll-driven parallax effect for browser pages
//!
//! A background layer moves at a fraction of the page scroll speed. High
//! frequency scroll notifications are coalesced so that at most one style
//! write happens per display frame, regardless of how fast the host fires
//! scroll events:
//!
//! - **[`ParallaxEffect`]**: the state machine — latest scroll sample,
//!   pending-frame flag, speed divisor
//! - **[`ScrollUpdater`]**: binds the effect to a frame scheduler and a
//!   style target, one instance per animated element
//! - **[`FrameScheduler`]**: capability trait for "run once before the next
//!   repaint", with a timer-based fallback cadence for hosts without a
//!   native primitive
//! - **[`StyleTarget`]**: single-write style application; the target owns
//!   the property name and value form
//!
//! ## Architecture
//!
//! 1. **Pure Rust Core**: all update logic is plain Rust, testable without
//!    a browser. Scheduling and style application are injected capabilities.
//! 2. **Leading coalescing**: the first scroll notification after an idle
//!    period requests a frame; later notifications before that frame fires
//!    only refresh the sample. The final state always reflects the latest
//!    scroll position; intermediate positions are intentionally dropped.
//! 3. **Single logical thread**: the host invokes the scroll and frame
//!    callbacks one at a time, so shared state is `Rc<RefCell<..>>`, never
//!    a lock.
//!
//! ## Example
//!
//! ```rust
//! use parallax::ParallaxEffect;
//!
//! let mut effect = ParallaxEffect::new(2.0).unwrap();
//! assert!(effect.record_scroll(400.0)); // first notification wants a frame
//! assert!(!effect.record_scroll(410.0)); // already ticking: coalesced
//! assert!((effect.frame_offset() - 205.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod effect;
pub mod error;
pub mod schedule;
pub mod style;
pub mod updater;

// Re-export core types at crate root
pub use config::EffectConfig;
pub use effect::{ParallaxEffect, DEFAULT_SPEED_DIVISOR};
pub use error::EffectError;
pub use schedule::{
    FallbackCadence, FrameCallback, FrameHandle, FrameScheduler, ScheduleError, FRAME_INTERVAL_MS,
};
pub use style::{StyleStrategy, StyleTarget};
pub use updater::{InitGuard, ScrollUpdater};

// Browser bindings (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;
