use std::sync::{Arc, Mutex};

use super::*;
use crate::util::preference_storage::{BrowserStorage, MemoryStorage};

fn recorder<S: PreferenceStorage>(store: &mut ThemeStore<S>) -> (SubscriptionId, Arc<Mutex<Vec<ThemeSnapshot>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |snap| sink.lock().unwrap().push(snap));
    (id, seen)
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_dark() {
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
}

#[test]
fn theme_mode_parses_only_known_strings() {
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("Dark".parse::<ThemeMode>(), Err(UnknownThemeMode("Dark".to_owned())));
    assert!("".parse::<ThemeMode>().is_err());
}

#[test]
fn theme_mode_display_matches_storage_form() {
    assert_eq!(ThemeMode::Light.to_string(), "light");
    assert_eq!(ThemeMode::Dark.as_str(), "dark");
}

#[test]
fn theme_mode_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::from_str::<ThemeMode>("\"dark\"").unwrap(), ThemeMode::Dark);
}

#[test]
fn theme_mode_toggled_round_trips() {
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_store_is_dark_and_not_ready() {
    let store = ThemeStore::new(MemoryStorage::new());
    assert_eq!(store.snapshot(), ThemeSnapshot { mode: ThemeMode::Dark, ready: false });
}

#[test]
fn initialize_with_empty_storage_defaults_to_dark() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    assert_eq!(store.initialize(), ThemeSnapshot { mode: ThemeMode::Dark, ready: true });
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn initialize_with_unavailable_storage_defaults_to_dark() {
    let mut store = ThemeStore::new(BrowserStorage);
    let snap = store.initialize();
    assert_eq!(snap.mode, ThemeMode::Dark);
    assert!(snap.ready);
}

#[test]
fn initialize_with_failing_reads_defaults_to_dark() {
    let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, "light");
    storage.fail_reads(true);
    let mut store = ThemeStore::new(storage);
    assert_eq!(store.initialize(), ThemeSnapshot { mode: ThemeMode::Dark, ready: true });
}

#[test]
fn initialize_reads_saved_light_preference() {
    let mut store = ThemeStore::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light"));
    assert_eq!(store.initialize().mode, ThemeMode::Light);
}

#[test]
fn initialize_treats_malformed_value_as_absent() {
    let mut store = ThemeStore::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "purple"));
    assert_eq!(store.initialize(), ThemeSnapshot { mode: ThemeMode::Dark, ready: true });
}

#[test]
fn initialize_only_reads_storage_once() {
    let storage = MemoryStorage::new();
    let mut store = ThemeStore::new(storage.clone());
    store.initialize();
    storage.write(THEME_STORAGE_KEY, "light").unwrap();
    assert_eq!(store.initialize().mode, ThemeMode::Dark);
}

#[test]
fn initialize_notifies_subscribers_once() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    let (_, seen) = recorder(&mut store);
    store.initialize();
    store.initialize();
    assert_eq!(*seen.lock().unwrap(), vec![ThemeSnapshot { mode: ThemeMode::Dark, ready: true }]);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStorage::new();
    let mut store = ThemeStore::new(storage.clone());
    store.initialize();
    assert_eq!(store.toggle(), ThemeMode::Light);
    assert_eq!(storage.peek(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(store.toggle(), ThemeMode::Dark);
    assert_eq!(storage.peek(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_survives_reload_from_same_storage() {
    let storage = MemoryStorage::new();
    let mut first = ThemeStore::new(storage.clone());
    first.initialize();
    first.toggle();

    let mut reloaded = ThemeStore::new(storage);
    assert_eq!(reloaded.initialize().mode, ThemeMode::Light);
}

#[test]
fn toggle_still_flips_when_write_fails() {
    let storage = MemoryStorage::new();
    storage.fail_writes(true);
    let mut store = ThemeStore::new(storage.clone());
    store.initialize();
    assert_eq!(store.toggle(), ThemeMode::Light);
    assert_eq!(store.mode(), ThemeMode::Light);
    assert_eq!(storage.peek(THEME_STORAGE_KEY), None);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn toggle_without_storage_is_session_only() {
    let mut store = ThemeStore::new(BrowserStorage);
    store.initialize();
    assert_eq!(store.toggle(), ThemeMode::Light);
}

#[test]
fn toggle_notifies_subscribers_synchronously() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.initialize();
    let (_, seen) = recorder(&mut store);
    store.toggle();
    assert_eq!(*seen.lock().unwrap(), vec![ThemeSnapshot { mode: ThemeMode::Light, ready: true }]);
}

// =============================================================
// on_external_change
// =============================================================

#[test]
fn external_change_applies_recognized_value() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.initialize();
    assert!(store.on_external_change(Some(THEME_STORAGE_KEY), Some("light")));
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn external_change_is_idempotent() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.initialize();
    let (_, seen) = recorder(&mut store);
    assert!(store.on_external_change(Some("theme"), Some("light")));
    assert!(!store.on_external_change(Some("theme"), Some("light")));
    assert_eq!(store.mode(), ThemeMode::Light);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn external_change_ignores_unrelated_key() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.initialize();
    store.toggle();
    assert!(!store.on_external_change(Some("unrelated"), Some("dark")));
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn external_change_ignores_malformed_missing_and_cleared() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.initialize();
    assert!(!store.on_external_change(Some("theme"), Some("purple")));
    assert!(!store.on_external_change(Some("theme"), None));
    assert!(!store.on_external_change(None, None));
    assert_eq!(store.mode(), ThemeMode::Dark);
}

#[test]
fn two_tabs_converge_through_shared_storage() {
    let origin = MemoryStorage::new();
    let mut tab_a = ThemeStore::new(origin.clone());
    let mut tab_b = ThemeStore::new(origin.clone());
    tab_a.initialize();
    tab_b.initialize();

    let next = tab_a.toggle();
    let stored = origin.peek(THEME_STORAGE_KEY);
    tab_b.on_external_change(Some(THEME_STORAGE_KEY), stored.as_deref());

    assert_eq!(tab_b.mode(), next);
}

// =============================================================
// subscriptions
// =============================================================

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.initialize();
    let (id, seen) = recorder(&mut store);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn subscription_ids_are_unique() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    let a = store.subscribe(|_| {});
    let b = store.subscribe(|_| {});
    assert_ne!(a, b);
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut a = ThemeStore::new(MemoryStorage::new());
    let mut b = ThemeStore::new(MemoryStorage::new());
    a.initialize();
    b.initialize();
    a.toggle();
    assert_eq!(a.mode(), ThemeMode::Light);
    assert_eq!(b.mode(), ThemeMode::Dark);
}

#[test]
fn debug_output_hides_storage_and_callbacks() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    store.subscribe(|_| {});
    let text = format!("{store:?}");
    assert!(text.contains("ThemeStore"));
    assert!(text.contains("subscribers: 1"));
}

#[test]
fn subscribers_run_in_registration_order() {
    let mut store = ThemeStore::new(MemoryStorage::new());
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["dom", "signal"] {
        let sink = Arc::clone(&order);
        store.subscribe(move |_| sink.lock().unwrap().push(tag));
    }

    store.initialize();

    assert_eq!(*order.lock().unwrap(), vec!["dom", "signal"]);
}
