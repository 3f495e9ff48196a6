//! Fixed top navigation with theme toggle and mobile menu trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `PageShell` on every route. Reads the current path for the
//! active link, flips the theme through `ThemeContext`, and owns the
//! `nav_scrolled` / `mobile_menu_open` fields of `UiState`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::mobile_menu::MobileMenu;
use crate::components::theme_gate::ThemeGate;
use crate::data::nav::{NAV_ITEMS, is_active};
use crate::state::theme_context::use_theme;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let pathname = location.pathname;

    // Close the mobile menu whenever the route changes.
    Effect::new(move |prev: Option<String>| {
        let path = pathname.get();
        if prev.is_some_and(|p| p != path) {
            ui.update(UiState::on_navigate);
        }
        path
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let flipped = ui.try_update_untracked(|s| s.on_scroll(y)).unwrap_or(false);
            if flipped {
                ui.notify();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let nav_class = move || {
        if ui.with(|s| s.nav_scrolled) { "nav nav--scrolled" } else { "nav" }
    };

    view! {
        <nav class=nav_class>
            <div class="nav__inner">
                <a href="/" class="nav__logo">
                    <span class="nav__logo-mark" aria-hidden="true">"P"</span>
                    <span class="nav__logo-text">
                        <span class="nav__logo-title">"Portfolio"</span>
                        <span class="nav__logo-subtitle">"DEVELOPER"</span>
                    </span>
                </a>
                <div class="nav__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            let class = move || {
                                if is_active(&pathname.get(), href) { "nav__link nav__link--active" } else { "nav__link" }
                            };
                            view! { <a href=href class=class>{item.label}</a> }
                        })
                        .collect_view()}
                </div>
                <div class="nav__actions">
                    <ThemeToggle/>
                    <button
                        class="nav__menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || ui.with(|s| s.mobile_menu_open).to_string()
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </nav>
        <MobileMenu/>
    }
}

/// Sun/moon button. Gated so the icon never renders for the wrong mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button class="theme-toggle" aria-label="Toggle theme" on:click=move |_| {
            theme.toggle();
        }>
            <ThemeGate>
                <span class="theme-toggle__icon">{move || theme.pick("☀️", "🌙")}</span>
            </ThemeGate>
        </button>
    }
}
