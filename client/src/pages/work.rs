//! Work page: category filter over the project catalogue.

use leptos::prelude::*;

use crate::components::latest_work::LatestWork;
use crate::components::page_shell::PageShell;
use crate::components::project_card::ProjectCard;
use crate::data::projects::{Category, by_category};
use crate::state::ui::UiState;

#[component]
pub fn WorkPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let selected = Memo::new(move |_| ui.with(|s| s.work_category));

    let filters = move || {
        Category::FILTERS
            .iter()
            .map(|&category| {
                let class = move || {
                    if selected.get() == category { "filter__button filter__button--active" } else { "filter__button" }
                };
                view! {
                    <button class=class on:click=move |_| ui.update(|s| s.select_category(category))>
                        {category.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <PageShell class="page--work">
            <header class="page-header">
                <h1 class="page-header__title">"My Work"</h1>
                <p class="page-header__lead">
                    "A selection of projects across web, mobile and design systems."
                </p>
            </header>
            <div class="filter" role="toolbar">{filters()}</div>
            <div class="work-grid">
                <For
                    each=move || by_category(selected.get())
                    key=|project| project.id
                    children=|project| view! { <ProjectCard project=project/> }
                />
            </div>
            <LatestWork/>
        </PageShell>
    }
}
