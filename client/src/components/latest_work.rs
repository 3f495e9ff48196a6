//! "Latest work" strip on the work page.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::data::projects::latest;

#[component]
pub fn LatestWork() -> impl IntoView {
    view! {
        <section class="latest-work">
            <h2 class="section-title">"Latest Work"</h2>
            <div class="latest-work__grid">
                {latest().into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </section>
    }
}
