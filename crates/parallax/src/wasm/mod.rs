//! WASM exports and browser bindings
//!
//! Wires the pure effect engine to the browser: a scroll listener on the
//! window, a frame scheduler picked by probing the host once, and a DOM
//! element as the style target. JS sees a small surface — [`Parallax`]
//! for explicitly managed instances, [`attach_when_ready`] for
//! fire-and-forget document-lifetime attachment.

mod bootstrap;
mod dom;
mod error;
mod scheduler;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::EffectConfig;
use crate::updater::ScrollUpdater;

pub use dom::ElementTarget;
pub use error::AttachError;
pub use scheduler::{probe, HostScheduler, RafScheduler, TimeoutScheduler};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);

    /// Current host time in milliseconds
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    pub(crate) fn date_now() -> f64;
}

/// Handle to an attached effect — one per animated element.
///
/// Dropping the handle on the JS side does not stop the effect; call
/// [`detach`] to remove the scroll listener and revoke a pending frame.
///
/// [`detach`]: Parallax::detach
#[wasm_bindgen]
pub struct Parallax {
    updater: ScrollUpdater<HostScheduler, ElementTarget>,
    window: Window,
    target_id: String,
    scroll_closure: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Parallax {
    /// Attach to the element with the given id, using defaults
    /// (speed divisor 2, GPU-composited translate).
    pub fn attach(target_id: &str) -> Result<Parallax, JsValue> {
        Parallax::attach_with(EffectConfig::new(target_id)).map_err(JsValue::from)
    }

    /// Attach from a JSON configuration string, e.g.
    /// `{"target": "hero-bg", "speed_divisor": 2, "style": {"mode": "translate"}}`.
    pub fn attach_with_config(config_json: &str) -> Result<Parallax, JsValue> {
        let config: EffectConfig = serde_json::from_str(config_json)
            .map_err(|e| AttachError::ConfigJson(e.to_string()))?;
        Parallax::attach_with(config).map_err(JsValue::from)
    }

    /// Remove the scroll listener and revoke any pending frame request.
    /// Calling it again is a no-op.
    pub fn detach(&mut self) {
        if let Some(closure) = self.scroll_closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            self.updater.cancel_pending();
            log(&format!("[parallax] detached from #{}", self.target_id));
        }
    }
}

impl Parallax {
    /// Attach from a parsed configuration (Rust-side API).
    ///
    /// Resolves the target element — which must already exist in the
    /// document — probes the host for a frame-scheduling primitive, and
    /// installs the scroll listener.
    pub fn attach_with(config: EffectConfig) -> Result<Parallax, AttachError> {
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;
        let document = window.document().ok_or(AttachError::NoDocument)?;

        let target = ElementTarget::resolve(&document, &config.target, config.style)?;
        let scheduler = scheduler::probe(&window);
        let updater = ScrollUpdater::new(config.speed_divisor, scheduler, target)?;

        let listener_updater = updater.clone();
        let listener_window = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            // The handler must not throw into the host's event dispatch;
            // a failed offset read falls back to the document origin.
            let offset = listener_window.page_y_offset().unwrap_or(0.0);
            listener_updater.on_scroll(offset);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|_| AttachError::ListenerInstall)?;

        log(&format!(
            "[parallax] attached to #{} (divisor {})",
            config.target, config.speed_divisor
        ));

        Ok(Parallax {
            updater,
            window,
            target_id: config.target,
            scroll_closure: Some(closure),
        })
    }
}

/// Attach once the document is ready.
///
/// Safe to call at any point in the page lifecycle: if the document is
/// still parsing, attachment waits for a readiness signal; if it has
/// already loaded, attachment still happens (deferred one tick). Exactly
/// one attachment occurs even when several readiness signals fire. The
/// effect lives for the document lifetime.
#[wasm_bindgen]
pub fn attach_when_ready(config_json: &str) -> Result<(), JsValue> {
    let config: EffectConfig = serde_json::from_str(config_json)
        .map_err(|e| AttachError::ConfigJson(e.to_string()))?;
    bootstrap::attach_when_ready(config).map_err(JsValue::from)
}

/// Route panics to the browser console.
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
