//! Effect configuration

use serde::{Deserialize, Serialize};

use crate::effect::DEFAULT_SPEED_DIVISOR;
use crate::style::StyleStrategy;

/// Configuration for one effect instance.
///
/// Deserialized from JSON at the JS boundary:
///
/// ```json
/// { "target": "hero-bg", "speed_divisor": 2.0, "style": { "mode": "translate", "gpu": true } }
/// ```
///
/// Only `target` is required.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EffectConfig {
    /// Id of the element in the host document the effect moves.
    pub target: String,
    /// Ratio between scroll movement and layer movement.
    #[serde(default = "default_divisor")]
    pub speed_divisor: f64,
    /// How the offset is written to the element.
    #[serde(default)]
    pub style: StyleStrategy,
}

fn default_divisor() -> f64 {
    DEFAULT_SPEED_DIVISOR
}

impl EffectConfig {
    /// Configuration with defaults: divisor 2, GPU-composited translate.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            speed_divisor: DEFAULT_SPEED_DIVISOR,
            style: StyleStrategy::default(),
        }
    }
}
