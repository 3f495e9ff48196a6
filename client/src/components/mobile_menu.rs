//! Slide-over navigation for narrow viewports.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::ThemeToggle;
use crate::data::nav::{NAV_ITEMS, is_active};
use crate::state::ui::UiState;

#[component]
pub fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let open = move || ui.with(|s| s.mobile_menu_open);

    view! {
        <Show when=open>
            <div class="mobile-menu__backdrop" on:click=move |_| ui.update(UiState::close_mobile_menu)></div>
            <aside class="mobile-menu">
                <button
                    class="mobile-menu__close"
                    aria-label="Close menu"
                    on:click=move |_| ui.update(UiState::close_mobile_menu)
                >
                    "✕"
                </button>
                <nav class="mobile-menu__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            let class = move || {
                                if is_active(&pathname.get(), href) {
                                    "mobile-menu__link mobile-menu__link--active"
                                } else {
                                    "mobile-menu__link"
                                }
                            };
                            view! {
                                <a href=href class=class on:click=move |_| ui.update(UiState::close_mobile_menu)>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="mobile-menu__footer">
                    <span>"Theme"</span>
                    <ThemeToggle/>
                </div>
            </aside>
        </Show>
    }
}
