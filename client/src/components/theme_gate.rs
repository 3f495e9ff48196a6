//! Placeholder until the persisted theme has been read.

#[cfg(test)]
#[path = "theme_gate_test.rs"]
mod theme_gate_test;

use leptos::prelude::*;

use crate::state::theme_context::use_theme;

/// Render `children` only once the theme store is ready.
///
/// Anything that branches on dark/light goes inside a gate; the server and
/// the first hydrated frame see the neutral placeholder instead.
#[component]
pub fn ThemeGate(
    children: ChildrenFn,
    /// Text shown while waiting; empty renders a bare placeholder.
    #[prop(optional, into)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let placeholder = placeholder.unwrap_or("");
    view! {
        <Show
            when=move || theme.is_ready()
            fallback=move || view! { <span class="theme-gate" aria-busy="true">{placeholder}</span> }
        >
            {children()}
        </Show>
    }
}
