//! Browser document adapter for presentation state.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::presentation::DocumentSurface;

/// The page's `<html>` element.
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    root: HtmlElement,
}

impl BrowserDocument {
    /// Attach to the current window's document element, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let root = web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self { root })
    }
}

impl DocumentSurface for BrowserDocument {
    fn set_class(&mut self, class: &str, enabled: bool) {
        let _ = self.root.class_list().toggle_with_force(class, enabled);
    }

    fn set_style_property(&mut self, property: &str, value: &str) {
        let _ = self.root.style().set_property(property, value);
    }

    fn remove_style_property(&mut self, property: &str) {
        let _ = self.root.style().remove_property(property);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = self.root.set_attribute(name, value);
    }
}
