//! Chrome shared by every page: background layers, nav and footer.
//!
//! The whole page sits behind a `ThemeGate`: until the stored preference has
//! been read, server output and the first hydrated frame show only a neutral
//! loading placeholder.

#[cfg(test)]
#[path = "page_shell_test.rs"]
mod page_shell_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::particles::{FloatingParticles, NoiseOverlay, PointerGlow};
use crate::components::theme_gate::ThemeGate;

pub const LOADING_TEXT: &str = "Loading...";

#[component]
pub fn PageShell(
    /// Extra class on the outer wrapper, e.g. `page--contact`.
    #[prop(optional)]
    class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class=format!("page {class}")>
            <ThemeGate placeholder=LOADING_TEXT>
                <NavBar/>
                <PointerGlow/>
                <NoiseOverlay/>
                <FloatingParticles/>
                <div class="page__content">{children()}</div>
                <Footer/>
            </ThemeGate>
        </div>
    }
}
