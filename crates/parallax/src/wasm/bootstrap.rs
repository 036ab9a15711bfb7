//! Readiness-gated attachment
//!
//! The effect must begin listening only after the document is
//! interactively ready. Both the content-parsed and the fully-loaded
//! signals are observed; a shared [`InitGuard`] keeps attachment
//! single-shot no matter how many of them fire.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

use crate::config::EffectConfig;
use crate::updater::InitGuard;

use super::error::AttachError;
use super::{log, Parallax};

/// Attach once the document is ready; exactly once, even if several
/// readiness signals fire.
pub fn attach_when_ready(config: EffectConfig) -> Result<(), AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;

    let guard = Rc::new(InitGuard::new());

    // "loading" means parsing is still in progress; "interactive" and
    // "complete" mean the signals below have already fired or are firing.
    if document.ready_state() == "loading" {
        install_listener(&document, "DOMContentLoaded", Rc::clone(&guard), config.clone())?;
        install_listener(&window, "load", guard, config)?;
    } else {
        // Already loaded: still attach, deferred one tick so it never runs
        // inside the caller's stack.
        let closure = Closure::once(move || {
            if guard.try_claim() {
                attach_for_document_lifetime(&config);
            }
        });
        window
            .set_timeout_with_callback(closure.as_ref().unchecked_ref())
            .map_err(|_| AttachError::DeferFailed)?;
        closure.forget();
    }
    Ok(())
}

fn install_listener(
    target: &EventTarget,
    event: &str,
    guard: Rc<InitGuard>,
    config: EffectConfig,
) -> Result<(), AttachError> {
    let closure = Closure::wrap(Box::new(move || {
        if guard.try_claim() {
            attach_for_document_lifetime(&config);
        }
    }) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| AttachError::ListenerInstall)?;
    // Listener lives for the document lifetime.
    closure.forget();
    Ok(())
}

/// Attach and release the handle: the effect runs as long as the document.
/// A failure here is logged, never thrown into the host's event dispatch.
fn attach_for_document_lifetime(config: &EffectConfig) {
    match Parallax::attach_with(config.clone()) {
        Ok(instance) => std::mem::forget(instance),
        Err(e) => log(&format!("[parallax] attach failed: {}", e)),
    }
}
