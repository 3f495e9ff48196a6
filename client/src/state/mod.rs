//! Client-side state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` is the persisted, cross-tab preference store; `theme_context`
//! binds it to Leptos. `ui` and `contact` are plain structs held in
//! `RwSignal`s by the components that own them.

pub mod contact;
pub mod theme;
pub mod theme_context;
pub mod ui;
