use super::*;
use crate::state::theme::THEME_STORAGE_KEY;
use crate::util::preference_storage::MemoryStorage;

// =============================================================
// mirror_into
// =============================================================

#[test]
fn mirrored_signal_starts_not_ready() {
    Owner::new().with(|| {
        let snapshot = RwSignal::new(ThemeSnapshot::default());
        let mut store = ThemeStore::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light"));
        mirror_into(&mut store, snapshot);
        assert!(!snapshot.get_untracked().ready);
    });
}

#[test]
fn mirrored_signal_sees_ready_after_initialize() {
    Owner::new().with(|| {
        let snapshot = RwSignal::new(ThemeSnapshot::default());
        let mut store = ThemeStore::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light"));
        mirror_into(&mut store, snapshot);

        store.initialize();

        assert_eq!(snapshot.get_untracked(), ThemeSnapshot { mode: ThemeMode::Light, ready: true });
    });
}

#[test]
fn mirrored_signal_follows_toggle_and_external_change() {
    Owner::new().with(|| {
        let snapshot = RwSignal::new(ThemeSnapshot::default());
        let mut store = ThemeStore::new(MemoryStorage::new());
        mirror_into(&mut store, snapshot);
        store.initialize();

        store.toggle();
        assert_eq!(snapshot.get_untracked().mode, ThemeMode::Light);

        store.on_external_change(Some(THEME_STORAGE_KEY), Some("dark"));
        assert_eq!(snapshot.get_untracked().mode, ThemeMode::Dark);
    });
}

// =============================================================
// ThemeContext (no browser: effects are inert, storage unavailable)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn provided_context_waits_for_initialize() {
    Owner::new().with(|| {
        let ctx = ThemeContext::provide();
        assert!(!ctx.snapshot.get_untracked().ready);

        ctx.initialize();

        assert_eq!(ctx.snapshot.get_untracked(), ThemeSnapshot { mode: ThemeMode::Dark, ready: true });
        assert!(use_theme().snapshot.get_untracked().ready);
    });
}
