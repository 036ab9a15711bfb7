//! Attachment errors

use wasm_bindgen::JsValue;

use crate::error::EffectError;

/// Errors raised while attaching the effect to the document.
///
/// All of these surface before the effect starts running; once attached,
/// the scroll and frame callbacks never fail outward.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    /// No `window` in this host environment.
    #[error("no window in this host environment")]
    NoWindow,

    /// No `document` on the window.
    #[error("no document in this host environment")]
    NoDocument,

    /// The target element is not in the document. It must exist before
    /// attachment runs.
    #[error("target element #{0} not found in the document")]
    TargetNotFound(String),

    /// The target exists but exposes no inline style to write to.
    #[error("target element #{0} has no inline style")]
    NotStylable(String),

    /// The host rejected the listener installation.
    #[error("could not install event listener")]
    ListenerInstall,

    /// The host rejected the zero-delay deferral of an attachment after
    /// the document had already loaded.
    #[error("could not defer attachment to document ready")]
    DeferFailed,

    /// Configuration rejected by the effect engine.
    #[error("invalid effect configuration: {0}")]
    Config(#[from] EffectError),

    /// Configuration JSON did not parse.
    #[error("malformed configuration JSON: {0}")]
    ConfigJson(String),
}

impl From<AttachError> for JsValue {
    fn from(e: AttachError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }
}
