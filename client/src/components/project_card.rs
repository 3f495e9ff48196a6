//! Single project tile used by the work grid and latest-work strip.

use leptos::prelude::*;

use crate::data::projects::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-card__image" aria-hidden="true">{project.image}</div>
            <div class="project-card__body">
                <span class="project-card__category">{project.category.label()}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <ul class="project-card__tech">
                    {project.technologies.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                </ul>
                <a class="project-card__link" href=project.link>"View Project →"</a>
            </div>
        </article>
    }
}
