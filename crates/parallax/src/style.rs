//! Style application capability
//!
//! The frame callback performs exactly one style write per frame through
//! [`StyleTarget`]; which CSS property carries the offset is the target's
//! concern, not the update logic's.

use serde::{Deserialize, Serialize};

/// How the computed offset is written to the target element.
///
/// All strategies express the same vertical displacement; they differ in
/// which property carries it and whether the 3-D transform form is used to
/// hint GPU compositing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StyleStrategy {
    /// `transform: translate3d(0px, <offset>px, 0px)` when `gpu` is set,
    /// `transform: translateY(<offset>px)` otherwise.
    Translate {
        #[serde(default = "default_gpu")]
        gpu: bool,
    },
    /// `background-position: 50% <offset>px` — moves the background image
    /// instead of the element box.
    BackgroundPosition,
}

fn default_gpu() -> bool {
    true
}

impl Default for StyleStrategy {
    fn default() -> Self {
        StyleStrategy::Translate { gpu: true }
    }
}

impl StyleStrategy {
    /// CSS property name the offset is written to. A single unprefixed
    /// property; current engines need no vendor fan-out.
    pub fn property(&self) -> &'static str {
        match self {
            StyleStrategy::Translate { .. } => "transform",
            StyleStrategy::BackgroundPosition => "background-position",
        }
    }

    /// CSS value for the given vertical offset in pixels.
    pub fn css_value(&self, offset_px: f64) -> String {
        match self {
            StyleStrategy::Translate { gpu: true } => {
                format!("translate3d(0px, {}px, 0px)", offset_px)
            }
            StyleStrategy::Translate { gpu: false } => format!("translateY({}px)", offset_px),
            StyleStrategy::BackgroundPosition => format!("50% {}px", offset_px),
        }
    }
}

/// Capability trait: apply a computed offset to the visual element.
///
/// Implementations must not panic — the call runs inside the host's frame
/// dispatch. A write that fails should be swallowed (or logged by the
/// implementation); the next frame simply writes again.
pub trait StyleTarget {
    /// Apply the display offset, in pixels, as a single style write.
    fn apply_offset(&mut self, offset_px: f64);
}
