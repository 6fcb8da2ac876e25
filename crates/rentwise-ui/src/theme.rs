//! Theme registry and the style overrides each theme carries.

use serde::Serialize;

/// A single CSS custom property override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StyleOverride {
    /// Custom property name, including the leading `--`.
    pub property: &'static str,
    /// Value assigned while the owning theme is active.
    pub value: &'static str,
}

/// Custom properties a theme may override. Any property not overridden by
/// the active theme is removed from the document so the stylesheet default
/// wins again.
pub const OVERRIDABLE_PROPERTIES: [&str; 4] =
    ["--background", "--foreground", "--primary", "--accent"];

/// Overrides installed by the coffee-crash theme.
pub const COFFEE_CRASH_OVERRIDES: [StyleOverride; 4] = [
    StyleOverride {
        property: "--background",
        value: "#2B1D14",
    },
    StyleOverride {
        property: "--foreground",
        value: "#F3E6D8",
    },
    StyleOverride {
        property: "--primary",
        value: "#C08A5B",
    },
    StyleOverride {
        property: "--accent",
        value: "#7A4E2D",
    },
];

/// Active colour theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Stylesheet defaults.
    Light,
    /// Dark palette via the `dark` class.
    Dark,
    /// Dark palette plus warm coffee overrides.
    CoffeeCrash,
}

/// Theme used when nothing usable is persisted.
pub const DEFAULT_THEME: ThemeMode = ThemeMode::Light;

impl ThemeMode {
    /// All themes in menu order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::CoffeeCrash]
    }

    /// Persisted value and `data-theme` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::CoffeeCrash => "coffee-crash",
        }
    }

    /// Parse a persisted value; unknown values yield `None`.
    #[must_use]
    pub fn from_storage(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|theme| theme.as_str() == value.trim())
    }

    /// Whether the `dark` class is set while this theme is active.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark | Self::CoffeeCrash => true,
        }
    }

    /// Custom property overrides installed by this theme.
    #[must_use]
    pub const fn overrides(self) -> &'static [StyleOverride] {
        match self {
            Self::Light | Self::Dark => &[],
            Self::CoffeeCrash => &COFFEE_CRASH_OVERRIDES,
        }
    }

    /// Translation key for menu labels.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Light => "theme.light",
            Self::Dark => "theme.dark",
            Self::CoffeeCrash => "theme.coffee-crash",
        }
    }
}
