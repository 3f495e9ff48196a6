//! Decorative background layers.

use leptos::prelude::*;

use crate::data::particles::PARTICLES;

/// Gradient wash that follows the pointer via `--mouse-x` / `--mouse-y`.
#[component]
pub fn PointerGlow() -> impl IntoView {
    crate::util::pointer::track_pointer_glow();
    view! { <div class="pointer-glow" aria-hidden="true"></div> }
}

#[component]
pub fn NoiseOverlay() -> impl IntoView {
    view! { <div class="noise-overlay" aria-hidden="true"></div> }
}

#[component]
pub fn FloatingParticles() -> impl IntoView {
    view! {
        <div class="particles" aria-hidden="true">
            {PARTICLES
                .iter()
                .map(|p| view! { <div class="particles__dot" style=p.style()></div> })
                .collect_view()}
        </div>
    }
}
