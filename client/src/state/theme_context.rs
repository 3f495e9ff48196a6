//! Leptos wiring for the shared [`ThemeStore`].
//!
//! `ThemeContext::provide` is called once in `App`. It owns the store, applies
//! every ready snapshot to `<html data-theme>` and then mirrors it into a
//! signal for views, defers `initialize` to the first client-side effect (so
//! SSR output and the first hydrated frame agree), and listens for storage
//! changes from other tabs until the app unmounts.

#[cfg(test)]
#[path = "theme_context_test.rs"]
mod theme_context_test;

use leptos::prelude::*;

use crate::state::theme::{SubscriptionId, ThemeMode, ThemeSnapshot, ThemeStore};
use crate::util::preference_storage::{BrowserStorage, PreferenceStorage};
use crate::util::theme_dom;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    snapshot: RwSignal<ThemeSnapshot>,
    store: StoredValue<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    /// Create the page-wide store and provide it as context.
    pub fn provide() -> Self {
        let snapshot = RwSignal::new(ThemeSnapshot::default());
        let mut store = ThemeStore::new(BrowserStorage);
        // `<html data-theme>` must be set before gated content renders.
        store.subscribe(|snap| {
            if snap.ready {
                theme_dom::apply(snap.mode);
            }
        });
        mirror_into(&mut store, snapshot);
        let ctx = Self { snapshot, store: StoredValue::new(store) };

        // Effects only run in the browser, after hydration.
        Effect::new(move |_| ctx.initialize());

        theme_dom::on_storage_change(move |key, value| {
            ctx.store.update_value(|s| {
                s.on_external_change(key.as_deref(), value.as_deref());
            });
        });

        provide_context(ctx);
        ctx
    }

    /// Read the persisted preference. Only the first call has an effect.
    pub fn initialize(&self) {
        self.store.update_value(|s| {
            s.initialize();
        });
    }

    /// Tracked read of the current snapshot.
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.snapshot.get()
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot.with(|s| s.ready)
    }

    pub fn is_dark(&self) -> bool {
        self.snapshot.with(ThemeSnapshot::is_dark)
    }

    /// Pick one of two values by mode, e.g. a CSS modifier class.
    pub fn pick<T>(&self, dark: T, light: T) -> T {
        if self.is_dark() { dark } else { light }
    }

    pub fn toggle(&self) -> Option<ThemeMode> {
        self.store.try_update_value(ThemeStore::toggle)
    }
}

/// Keep `snapshot` in step with every notification from `store`.
pub(crate) fn mirror_into<S: PreferenceStorage>(
    store: &mut ThemeStore<S>,
    snapshot: RwSignal<ThemeSnapshot>,
) -> SubscriptionId {
    store.subscribe(move |next| snapshot.set(next))
}

/// The theme provided by `App`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
