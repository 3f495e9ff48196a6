//! Local UI chrome state (mobile menu, work filter, scrolled nav).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the theme store so the nav
//! and page controls can evolve independently of persisted preferences.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::data::nav;
use crate::data::projects::Category;

/// UI state shared by the nav bar and pages, provided as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub nav_scrolled: bool,
    pub work_category: Category,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Route changed; menus never survive navigation.
    pub fn on_navigate(&mut self) {
        self.close_mobile_menu();
    }

    /// Update the nav style from the window scroll offset. Returns whether it
    /// flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = nav::is_scrolled(scroll_y);
        let changed = scrolled != self.nav_scrolled;
        self.nav_scrolled = scrolled;
        changed
    }

    pub fn select_category(&mut self, category: Category) {
        self.work_category = category;
    }
}
