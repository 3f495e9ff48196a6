//! Landing page: hero, icon marquee, stacking case studies, hire banner.

use leptos::prelude::*;

use crate::components::hire_card::HireCard;
use crate::components::page_shell::PageShell;
use crate::components::promotional_stack::PromotionalStack;

const MARQUEE_ICONS: [&str; 3] = ["♥", "■", "W"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell class="page--home">
            <main class="hero">
                <div class="hero__avatar">
                    <div class="hero__avatar-face" aria-hidden="true">"👨‍💻"</div>
                    <span class="hero__badge">"✓ Verified Expert"</span>
                </div>
                <h1 class="hero__title">
                    <span class="hero__title-lead">"Designed for Designers to"</span>
                    <span class="hero__title-tail">" showcase their work"</span>
                </h1>
                <p class="hero__subtitle">
                    "Helping startups and brands craft expressive and engaging solutions for their software needs."
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href="/work">"Template"</a>
                    <a class="button button--secondary" href="/contact">"Connect"</a>
                </div>
            </main>
            <section class="marquee" aria-hidden="true">
                <div class="marquee__track">
                    {MARQUEE_ICONS
                        .iter()
                        .chain(MARQUEE_ICONS.iter())
                        .map(|icon| view! { <div class="marquee__icon">{*icon}</div> })
                        .collect_view()}
                </div>
            </section>
            <PromotionalStack/>
            <HireCard/>
        </PageShell>
    }
}
