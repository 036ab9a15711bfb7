//! DOM style target

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::style::{StyleStrategy, StyleTarget};

use super::error::AttachError;
use super::log;

/// DOM element the computed offset is applied to.
///
/// Holds a non-owning handle resolved once at attach time; the document
/// owns the element. One unprefixed property write per frame.
pub struct ElementTarget {
    element: HtmlElement,
    strategy: StyleStrategy,
    id: String,
}

impl ElementTarget {
    /// Resolve the element by id.
    ///
    /// The element must exist in the document before the effect attaches;
    /// absence is a fail-fast attachment error, not a silent no-op.
    pub fn resolve(
        document: &Document,
        id: &str,
        strategy: StyleStrategy,
    ) -> Result<Self, AttachError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| AttachError::TargetNotFound(id.to_string()))?;
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| AttachError::NotStylable(id.to_string()))?;
        Ok(Self {
            element,
            strategy,
            id: id.to_string(),
        })
    }
}

impl StyleTarget for ElementTarget {
    fn apply_offset(&mut self, offset_px: f64) {
        let style = self.element.style();
        if style
            .set_property(self.strategy.property(), &self.strategy.css_value(offset_px))
            .is_err()
        {
            // Swallowed: the next frame writes again.
            log(&format!("[parallax] style write failed on #{}", self.id));
        }
    }
}
