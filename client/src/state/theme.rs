//! Shared dark/light theme preference.
//!
//! DESIGN
//! ======
//! One `ThemeStore` per page context is the single source of truth for the
//! theme. Views never keep their own copy: they subscribe (through
//! `ThemeContext` in the Leptos tree, or directly in tests) and re-render
//! from the snapshot they are handed.
//!
//! The store has exactly two writers: `toggle`, driven by the user, and
//! `on_external_change`, driven by storage notifications from other tabs.
//! Both are idempotent with respect to re-applying the same value.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A backend that cannot be read or written
//! degrades the store to session-only state; failures are logged in debug
//! builds and never reach the caller.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::preference_storage::PreferenceStorage;

/// Storage key shared by every tab of the site.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visual variant selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted value that is neither `"dark"` nor `"light"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme mode {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownThemeMode(other.to_owned())),
        }
    }
}

/// What views consume: the mode, and whether it can be trusted yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    /// False until the persisted preference has been looked up. Views must
    /// not branch on `mode` before this is true.
    pub ready: bool,
}

impl ThemeSnapshot {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(ThemeSnapshot) + Send + Sync>;

/// Authoritative theme state for one page context.
pub struct ThemeStore<S> {
    storage: S,
    mode: ThemeMode,
    ready: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("ready", &self.ready)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// A not-yet-ready store defaulting to [`ThemeMode::Dark`].
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage, mode: ThemeMode::default(), ready: false, subscribers: Vec::new(), next_subscription: 0 }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot { mode: self.mode, ready: self.ready }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted preference and mark the store ready.
    ///
    /// Only the first call touches storage; later calls return the current
    /// snapshot. A missing, unreadable, or unrecognized value leaves the
    /// default mode in place.
    pub fn initialize(&mut self) -> ThemeSnapshot {
        if self.ready {
            return self.snapshot();
        }

        match self.storage.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) => self.mode = mode,
                Err(e) => leptos::logging::debug_warn!("theme: ignoring stored preference: {e}"),
            },
            Ok(None) => {}
            Err(e) => leptos::logging::debug_warn!("theme: preference not loaded: {e}"),
        }

        self.ready = true;
        self.notify();
        self.snapshot()
    }

    /// Flip the mode, persist it best-effort, and notify subscribers.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, self.mode.as_str()) {
            leptos::logging::debug_warn!("theme: preference not saved: {e}");
        }
        self.notify();
        self.mode
    }

    /// Apply a change committed by another page context.
    ///
    /// `key` is `None` when the other context cleared all of storage; `value`
    /// is `None` when the key was removed. Only a recognized value under
    /// [`THEME_STORAGE_KEY`] is applied. Returns whether the mode changed.
    pub fn on_external_change(&mut self, key: Option<&str>, value: Option<&str>) -> bool {
        if key != Some(THEME_STORAGE_KEY) {
            return false;
        }
        let Some(Ok(mode)) = value.map(str::parse::<ThemeMode>) else {
            return false;
        };
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.notify();
        true
    }

    /// Register a callback invoked synchronously after every change.
    pub fn subscribe(&mut self, callback: impl Fn(ThemeSnapshot) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, callback) in &self.subscribers {
            callback(snapshot);
        }
    }
}
