#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Rentwise Web UI core.
//! DOM-free preference state, theming, locale metadata, and notices, plus
//! browser adapters compiled only for `wasm32`.

pub mod actions;
pub mod i18n;
pub mod preferences;
pub mod presentation;
pub mod storage;
pub mod theme;
pub mod toast;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use actions::{AccountBackend, ActionOutcome, BackendError};
pub use i18n::{DEFAULT_LOCALE, Direction, LocaleCode, TranslationBundle};
pub use preferences::{LANGUAGE_KEY, PreferenceError, PreferenceStore, THEME_KEY};
pub use presentation::{DocumentSnapshot, DocumentSurface, PresentationState, apply};
pub use storage::{MemoryStorage, PreferenceStorage, StorageError};
pub use theme::{DEFAULT_THEME, ThemeMode};
pub use toast::{Toast, ToastKind, ToastQueue};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use {dom::BrowserDocument, storage::BrowserStorage};

/// Load preferences from browser storage and apply them to the page.
///
/// Call once on mount; the returned store handles later selections.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn mount_preferences() -> PreferenceStore<BrowserStorage> {
    let store = PreferenceStore::load(BrowserStorage);
    if let Some(mut document) = BrowserDocument::from_window() {
        apply(&store.presentation(), &mut document);
    }
    store
}

