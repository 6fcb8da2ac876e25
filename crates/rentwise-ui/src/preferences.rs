//! Session preference store for theme and language.
//!
//! # Design
//! - Load once on construction, persist on every set.
//! - A set writes storage first; memory only changes once the write lands,
//!   so a failed write leaves the previous preference active.
//! - Setters return the new `PresentationState`; applying it to a document
//!   is the caller's step (see [`crate::presentation::apply`]).

use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::{DEFAULT_LOCALE, Direction, LocaleCode};
use crate::presentation::PresentationState;
use crate::storage::{PreferenceStorage, StorageError};
use crate::theme::{DEFAULT_THEME, ThemeMode};

/// Storage key holding the theme name.
pub const THEME_KEY: &str = "theme";
/// Storage key holding the language code.
pub const LANGUAGE_KEY: &str = "language";

/// Errors raised when changing preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Language code is not in the registry.
    #[error("unknown language code")]
    UnknownLanguage {
        /// Code supplied by the caller.
        code: String,
    },
    /// Storage rejected the write; the previous value stays active.
    #[error("preference persistence unavailable")]
    Persistence {
        /// Key being written.
        key: &'static str,
        /// Source storage error.
        source: StorageError,
    },
}

/// Owner of the single active theme and language.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    theme: ThemeMode,
    locale: LocaleCode,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Load preferences from `storage`.
    ///
    /// Missing, unrecognised, or unreadable values fall back to the light
    /// theme and English.
    #[must_use]
    pub fn load(storage: S) -> Self {
        let theme = read_key(&storage, THEME_KEY)
            .and_then(|value| parse_or_warn(THEME_KEY, &value, ThemeMode::from_storage))
            .unwrap_or(DEFAULT_THEME);
        let locale = read_key(&storage, LANGUAGE_KEY)
            .and_then(|value| parse_or_warn(LANGUAGE_KEY, &value, LocaleCode::from_code))
            .unwrap_or(DEFAULT_LOCALE);
        debug!(
            theme = theme.as_str(),
            language = locale.code(),
            "loaded preferences"
        );
        Self {
            storage,
            theme,
            locale,
        }
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Active language.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Text direction of the active language.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Desired document state for the active preferences.
    #[must_use]
    pub const fn presentation(&self) -> PresentationState {
        PresentationState::compute(self.theme, self.locale)
    }

    /// Switch the theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Persistence`] when storage rejects the write.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<PresentationState, PreferenceError> {
        self.persist(THEME_KEY, theme.as_str())?;
        if self.theme != theme {
            debug!(from = self.theme.as_str(), to = theme.as_str(), "theme changed");
        }
        self.theme = theme;
        Ok(self.presentation())
    }

    /// Switch the language by registered code and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::UnknownLanguage`] for codes outside the
    /// registry (state and storage untouched), or
    /// [`PreferenceError::Persistence`] when storage rejects the write.
    pub fn set_language(&mut self, code: &str) -> Result<PresentationState, PreferenceError> {
        let locale =
            LocaleCode::from_code(code).ok_or_else(|| PreferenceError::UnknownLanguage {
                code: code.to_string(),
            })?;
        self.set_locale(locale)
    }

    /// Switch the language and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Persistence`] when storage rejects the write.
    pub fn set_locale(&mut self, locale: LocaleCode) -> Result<PresentationState, PreferenceError> {
        self.persist(LANGUAGE_KEY, locale.code())?;
        if self.locale != locale {
            debug!(
                from = self.locale.code(),
                to = locale.code(),
                dir = locale.direction().as_str(),
                "language changed"
            );
        }
        self.locale = locale;
        Ok(self.presentation())
    }

    /// Forget persisted preferences and return to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Persistence`] when a key cannot be removed.
    /// Keys removed before the failure are already back at their defaults in
    /// memory.
    pub fn reset(&mut self) -> Result<PresentationState, PreferenceError> {
        self.forget(THEME_KEY)?;
        self.theme = DEFAULT_THEME;
        self.forget(LANGUAGE_KEY)?;
        self.locale = DEFAULT_LOCALE;
        debug!("preferences reset to defaults");
        Ok(self.presentation())
    }

    /// Backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn forget(&mut self, key: &'static str) -> Result<(), PreferenceError> {
        self.storage.remove(key).map_err(|source| {
            warn!(key, error = %source, "failed to remove preference");
            PreferenceError::Persistence { key, source }
        })
    }

    fn persist(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        self.storage.write(key, value).map_err(|source| {
            warn!(key, error = %source, "failed to persist preference");
            PreferenceError::Persistence { key, source }
        })
    }
}

fn read_key(storage: &impl PreferenceStorage, key: &'static str) -> Option<String> {
    match storage.read(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "preference storage unreadable; using default");
            None
        }
    }
}

fn parse_or_warn<T>(
    key: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() {
        warn!(key, value, "unrecognised stored preference; using default");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{DocumentSnapshot, apply};
    use crate::storage::MemoryStorage;

    /// Storage whose writes and reads always fail.
    #[derive(Default)]
    struct OfflineStorage {
        writes: usize,
    }

    impl PreferenceStorage for OfflineStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable {
                operation: "test.read",
                detail: "offline".to_string(),
            })
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.writes += 1;
            Err(StorageError::Unavailable {
                operation: "test.write",
                detail: "offline".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable {
                operation: "test.remove",
                detail: "offline".to_string(),
            })
        }
    }

    /// Memory storage that fails every removal after the first `removals_left`.
    struct FlakyRemovals {
        inner: MemoryStorage,
        removals_left: usize,
    }

    impl PreferenceStorage for FlakyRemovals {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.write(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            if self.removals_left == 0 {
                return Err(StorageError::Unavailable {
                    operation: "test.remove",
                    detail: "quota".to_string(),
                });
            }
            self.removals_left -= 1;
            self.inner.remove(key)
        }
    }

    #[test]
    fn empty_storage_yields_defaults() {
        let store = PreferenceStore::load(MemoryStorage::new());
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.locale(), LocaleCode::En);
        assert_eq!(store.direction(), Direction::Ltr);
    }

    #[test]
    fn persisted_values_are_restored() {
        let storage = MemoryStorage::with_entries([("theme", "coffee-crash"), ("language", "ar")]);
        let store = PreferenceStore::load(storage);
        assert_eq!(store.theme(), ThemeMode::CoffeeCrash);
        assert_eq!(store.locale(), LocaleCode::Ar);
        assert_eq!(store.direction(), Direction::Rtl);
    }

    #[test]
    fn unrecognised_values_fall_back_to_defaults() {
        let storage = MemoryStorage::with_entries([("theme", "neon"), ("language", "xx")]);
        let store = PreferenceStore::load(storage);
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.locale(), LocaleCode::En);
    }

    #[test]
    fn unreadable_storage_falls_back_to_defaults() {
        let store = PreferenceStore::load(OfflineStorage::default());
        assert_eq!(store.theme(), DEFAULT_THEME);
        assert_eq!(store.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn set_theme_updates_memory_and_storage() {
        let mut store = PreferenceStore::load(MemoryStorage::new());
        let state = store.set_theme(ThemeMode::Dark).expect("set theme");
        assert!(state.dark);
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert_eq!(store.storage().get(THEME_KEY), Some("dark"));
    }

    #[test]
    fn setting_same_theme_twice_is_stable() {
        let mut store = PreferenceStore::load(MemoryStorage::new());
        let first = store.set_theme(ThemeMode::CoffeeCrash).expect("first");
        let second = store.set_theme(ThemeMode::CoffeeCrash).expect("second");
        assert_eq!(first, second);
        assert_eq!(store.storage().get(THEME_KEY), Some("coffee-crash"));
    }

    #[test]
    fn set_language_persists_code_and_direction() {
        let mut store = PreferenceStore::load(MemoryStorage::new());
        let state = store.set_language("ar").expect("arabic");
        assert_eq!(state.direction, Direction::Rtl);
        assert_eq!(store.storage().get(LANGUAGE_KEY), Some("ar"));

        let state = store.set_language("es").expect("spanish");
        assert_eq!(state.direction, Direction::Ltr);
        assert_eq!(store.locale(), LocaleCode::Es);
    }

    #[test]
    fn unknown_language_is_rejected_without_side_effects() {
        let mut store = PreferenceStore::load(MemoryStorage::with_entries([("language", "fr")]));
        let err = store.set_language("klingon").unwrap_err();
        assert!(matches!(err, PreferenceError::UnknownLanguage { ref code } if code == "klingon"));
        assert_eq!(store.locale(), LocaleCode::Fr);
        assert_eq!(store.storage().get(LANGUAGE_KEY), Some("fr"));
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let mut store = PreferenceStore::load(OfflineStorage::default());
        let err = store.set_theme(ThemeMode::Dark).unwrap_err();
        assert!(matches!(
            err,
            PreferenceError::Persistence {
                key: THEME_KEY,
                source: StorageError::Unavailable { .. }
            }
        ));
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.storage().writes, 1);
        assert!(store.reset().is_err());
    }

    #[test]
    fn reset_clears_storage_and_restores_defaults() {
        let storage = MemoryStorage::with_entries([("theme", "dark"), ("language", "ar")]);
        let mut store = PreferenceStore::load(storage);
        let state = store.reset().expect("reset");
        assert_eq!(state, PresentationState::compute(ThemeMode::Light, LocaleCode::En));
        assert_eq!(store.storage().get(THEME_KEY), None);
        assert_eq!(store.storage().get(LANGUAGE_KEY), None);
    }

    #[test]
    fn failed_reset_keeps_memory_in_step_with_storage() {
        let storage = FlakyRemovals {
            inner: MemoryStorage::with_entries([("theme", "dark"), ("language", "ar")]),
            removals_left: 1,
        };
        let mut store = PreferenceStore::load(storage);

        let err = store.reset().expect_err("second removal fails");
        assert!(matches!(err, PreferenceError::Persistence { key, .. } if key == LANGUAGE_KEY));
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.locale(), LocaleCode::Ar);

        let reloaded = PreferenceStore::load(store.storage().inner.clone());
        assert_eq!(reloaded.theme(), store.theme());
        assert_eq!(reloaded.locale(), store.locale());
    }

    #[test]
    fn coffee_crash_then_light_leaves_no_overrides() {
        let mut store = PreferenceStore::load(MemoryStorage::new());
        let mut document = DocumentSnapshot::new();
        apply(
            &store.set_theme(ThemeMode::CoffeeCrash).expect("coffee"),
            &mut document,
        );
        assert_eq!(document.style_len(), 4);
        apply(&store.set_theme(ThemeMode::Light).expect("light"), &mut document);
        assert_eq!(document.style_len(), 0);
    }
}
