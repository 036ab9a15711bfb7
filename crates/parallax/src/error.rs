//! Error types for the effect engine

/// Errors raised while constructing the effect.
///
/// Runtime operations (`on_scroll`, the frame callback) never fail: they
/// run inside the host's event dispatch, where an escaping fault would
/// either silently stop updates or take down unrelated handlers.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EffectError {
    /// Speed divisor was zero, negative, or non-finite.
    #[error("speed divisor must be finite and positive, got {0}")]
    InvalidDivisor(f64),
}
