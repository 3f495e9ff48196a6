//! Call-to-action banner over a scrolling image strip.

use leptos::prelude::*;

const SHOWCASE: [&str; 5] = [
    "https://images.unsplash.com/photo-1503264116251-35a269479413?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1506765515384-028b60a970df?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=600&fit=crop",
];

#[component]
pub fn HireCard() -> impl IntoView {
    // Doubled so the CSS marquee loops seamlessly.
    let strip = SHOWCASE
        .iter()
        .chain(SHOWCASE.iter())
        .enumerate()
        .map(|(i, src)| {
            view! {
                <div class="hire__tile">
                    <img src=*src alt=format!("showcase-{i}") loading="lazy"/>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="hire">
            <div class="hire__strip" aria-hidden="true">{strip}</div>
            <div class="hire__overlay"></div>
            <div class="hire__body">
                <h2 class="hire__title">"Upgrade your web application with Next JS"</h2>
                <a class="hire__cta" href="https://www.upwork.com">"Hire Me on Upwork"</a>
            </div>
        </section>
    }
}
