//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and page sections, reading shared state
//! (`ThemeContext`, `RwSignal<UiState>`) from Leptos context providers.

pub mod about_sections;
pub mod footer;
pub mod hire_card;
pub mod latest_work;
pub mod mobile_menu;
pub mod nav_bar;
pub mod page_shell;
pub mod particles;
pub mod project_card;
pub mod promotional_stack;
pub mod theme_gate;
