use rentwise_ui::presentation::{DARK_CLASS, DIR_ATTRIBUTE, THEME_ATTRIBUTE};
use rentwise_ui::theme::OVERRIDABLE_PROPERTIES;
use rentwise_ui::{
    DocumentSnapshot, FileStorage, LocaleCode, PreferenceError, PreferenceStore, ThemeMode, apply,
};
use tempfile::tempdir;

#[test]
fn fresh_process_without_persisted_keys_uses_defaults() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = PreferenceStore::load(FileStorage::new(temp_dir.path().join("prefs.json")));
    assert_eq!(store.theme(), ThemeMode::Light);
    assert_eq!(store.locale(), LocaleCode::En);
}

#[test]
fn preferences_survive_a_restart() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("session").join("prefs.json");

    let mut store = PreferenceStore::load(FileStorage::new(&path));
    store.set_theme(ThemeMode::CoffeeCrash).expect("set theme");
    store.set_language("ar").expect("set language");
    drop(store);

    let restarted = PreferenceStore::load(FileStorage::new(&path));
    assert_eq!(restarted.theme(), ThemeMode::CoffeeCrash);
    assert_eq!(restarted.locale(), LocaleCode::Ar);

    let mut document = DocumentSnapshot::new();
    apply(&restarted.presentation(), &mut document);
    assert!(document.has_class(DARK_CLASS));
    assert_eq!(document.attribute(THEME_ATTRIBUTE), Some("coffee-crash"));
    assert_eq!(document.attribute(DIR_ATTRIBUTE), Some("rtl"));
}

#[test]
fn full_theme_cycle_leaves_no_residual_overrides() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut store = PreferenceStore::load(FileStorage::new(temp_dir.path().join("prefs.json")));
    let mut document = DocumentSnapshot::new();

    for theme in [
        ThemeMode::CoffeeCrash,
        ThemeMode::Dark,
        ThemeMode::CoffeeCrash,
        ThemeMode::Light,
    ] {
        apply(&store.set_theme(theme).expect("set theme"), &mut document);
    }

    for property in OVERRIDABLE_PROPERTIES {
        assert_eq!(document.style_property(property), None, "{property}");
    }
    assert!(!document.has_class(DARK_CLASS));
}

#[test]
fn direction_follows_every_registered_language() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut store = PreferenceStore::load(FileStorage::new(temp_dir.path().join("prefs.json")));
    let mut document = DocumentSnapshot::new();

    for locale in LocaleCode::all() {
        apply(&store.set_language(locale.code()).expect("set"), &mut document);
        let expected = if locale == LocaleCode::Ar { "rtl" } else { "ltr" };
        assert_eq!(document.attribute(DIR_ATTRIBUTE), Some(expected));
    }

    let err = store.set_language("zz").unwrap_err();
    assert!(matches!(err, PreferenceError::UnknownLanguage { .. }));
}

#[test]
fn corrupted_preference_file_degrades_to_defaults_on_load() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("prefs.json");
    std::fs::write(&path, "[1, 2, 3]").expect("write garbage");

    let mut store = PreferenceStore::load(FileStorage::new(&path));
    assert_eq!(store.theme(), ThemeMode::Light);
    assert!(matches!(
        store.set_theme(ThemeMode::Dark),
        Err(PreferenceError::Persistence { .. })
    ));
    assert_eq!(store.theme(), ThemeMode::Light);
}
