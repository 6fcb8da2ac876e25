//! Document-level presentation derived from the active preferences.
//!
//! # Design
//! - `PresentationState::compute` is pure; `apply` is the only place that
//!   touches a document.
//! - `apply` writes every managed flag on each call, so re-applying the same
//!   state changes nothing.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::i18n::{Direction, LocaleCode};
use crate::theme::{OVERRIDABLE_PROPERTIES, StyleOverride, ThemeMode};

/// Class toggled on the root element for dark palettes.
pub const DARK_CLASS: &str = "dark";
/// Attribute carrying the active theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Attribute carrying the text direction.
pub const DIR_ATTRIBUTE: &str = "dir";

/// Desired document state for a theme/locale pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresentationState {
    /// Active theme.
    pub theme: ThemeMode,
    /// Whether the dark class is set.
    pub dark: bool,
    /// Custom properties to set; every other overridable property is removed.
    pub style_overrides: &'static [StyleOverride],
    /// Text direction.
    pub direction: Direction,
}

impl PresentationState {
    /// Derive the desired state for `theme` and `locale`.
    #[must_use]
    pub const fn compute(theme: ThemeMode, locale: LocaleCode) -> Self {
        Self {
            theme,
            dark: theme.is_dark(),
            style_overrides: theme.overrides(),
            direction: locale.direction(),
        }
    }

    fn override_for(&self, property: &str) -> Option<&'static str> {
        self.style_overrides
            .iter()
            .find(|entry| entry.property == property)
            .map(|entry| entry.value)
    }
}

/// Mutable view of the document root that presentation is applied to.
pub trait DocumentSurface {
    /// Add (`enabled`) or remove a class on the root element.
    fn set_class(&mut self, class: &str, enabled: bool);
    /// Set an inline custom property on the root element.
    fn set_style_property(&mut self, property: &str, value: &str);
    /// Remove an inline custom property from the root element.
    fn remove_style_property(&mut self, property: &str);
    /// Set an attribute on the root element.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Write `state` to `surface`.
pub fn apply(state: &PresentationState, surface: &mut impl DocumentSurface) {
    surface.set_class(DARK_CLASS, state.dark);
    for property in OVERRIDABLE_PROPERTIES {
        match state.override_for(property) {
            Some(value) => surface.set_style_property(property, value),
            None => surface.remove_style_property(property),
        }
    }
    surface.set_attribute(THEME_ATTRIBUTE, state.theme.as_str());
    surface.set_attribute(DIR_ATTRIBUTE, state.direction.as_str());
    debug!(
        theme = state.theme.as_str(),
        dark = state.dark,
        overrides = state.style_overrides.len(),
        dir = state.direction.as_str(),
        "applied presentation state"
    );
}

/// In-memory document root, used headless and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSnapshot {
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
}

impl DocumentSnapshot {
    /// Empty root element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `class` is set.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Inline value of `property`, if set.
    #[must_use]
    pub fn style_property(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Number of inline properties currently set.
    #[must_use]
    pub fn style_len(&self) -> usize {
        self.style.len()
    }

    /// Value of attribute `name`, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl DocumentSurface for DocumentSnapshot {
    fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn set_style_property(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    fn remove_style_property(&mut self, property: &str) {
        self.style.remove(property);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::COFFEE_CRASH_OVERRIDES;

    fn applied(theme: ThemeMode, locale: LocaleCode) -> DocumentSnapshot {
        let mut document = DocumentSnapshot::new();
        apply(&PresentationState::compute(theme, locale), &mut document);
        document
    }

    #[test]
    fn light_theme_sets_no_flags() {
        let document = applied(ThemeMode::Light, LocaleCode::En);
        assert!(!document.has_class(DARK_CLASS));
        assert_eq!(document.style_len(), 0);
        assert_eq!(document.attribute(THEME_ATTRIBUTE), Some("light"));
        assert_eq!(document.attribute(DIR_ATTRIBUTE), Some("ltr"));
    }

    #[test]
    fn coffee_crash_sets_dark_and_all_overrides() {
        let document = applied(ThemeMode::CoffeeCrash, LocaleCode::Es);
        assert!(document.has_class(DARK_CLASS));
        for entry in COFFEE_CRASH_OVERRIDES {
            assert_eq!(document.style_property(entry.property), Some(entry.value));
        }
        assert_eq!(document.attribute(THEME_ATTRIBUTE), Some("coffee-crash"));
    }

    #[test]
    fn switching_back_to_light_clears_overrides() {
        let mut document = DocumentSnapshot::new();
        apply(
            &PresentationState::compute(ThemeMode::CoffeeCrash, LocaleCode::En),
            &mut document,
        );
        apply(
            &PresentationState::compute(ThemeMode::Light, LocaleCode::En),
            &mut document,
        );
        assert_eq!(document.style_len(), 0);
        assert!(!document.has_class(DARK_CLASS));
    }

    #[test]
    fn dark_theme_clears_coffee_overrides_but_keeps_flag() {
        let mut document = applied(ThemeMode::CoffeeCrash, LocaleCode::En);
        apply(
            &PresentationState::compute(ThemeMode::Dark, LocaleCode::En),
            &mut document,
        );
        assert!(document.has_class(DARK_CLASS));
        assert_eq!(document.style_len(), 0);
    }

    #[test]
    fn applying_twice_is_a_no_op() {
        let state = PresentationState::compute(ThemeMode::CoffeeCrash, LocaleCode::Ar);
        let mut document = DocumentSnapshot::new();
        apply(&state, &mut document);
        let first = document.clone();
        apply(&state, &mut document);
        assert_eq!(document, first);
    }

    #[test]
    fn arabic_is_rtl_and_others_ltr() {
        for locale in LocaleCode::all() {
            let document = applied(ThemeMode::Light, locale);
            let expected = if locale == LocaleCode::Ar { "rtl" } else { "ltr" };
            assert_eq!(document.attribute(DIR_ATTRIBUTE), Some(expected));
        }
    }
}
