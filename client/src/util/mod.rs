//! Browser and environment helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here behind the `hydrate` feature,
//! next to the pure helpers it wraps, so pages and components stay testable
//! under SSR and native `cargo test`.

pub mod pointer;
pub mod preference_storage;
pub mod scroll;
pub mod theme_dom;
