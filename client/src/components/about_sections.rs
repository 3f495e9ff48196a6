//! Sections of the about page: résumé lists, skills, timeline, testimonials.

use leptos::prelude::*;

use crate::data::about::{Milestone, ResumeEntry, SKILLS, TESTIMONIALS, TIMELINE, Testimonial};

#[component]
pub fn ResumeSection(title: &'static str, entries: &'static [ResumeEntry]) -> impl IntoView {
    view! {
        <section class="resume">
            <h2 class="section-title">{title}</h2>
            <ol class="resume__list">
                {entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="resume__entry">
                                <h3 class="resume__title">{entry.title}</h3>
                                <p class="resume__place">{entry.place}</p>
                                <span class="resume__period">{entry.period}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="skills">
            <h2 class="section-title">"Skills"</h2>
            <ul class="skills__list">
                {SKILLS.iter().map(|s| view! { <li class="skills__item">{*s}</li> }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section class="timeline">
            <h2 class="section-title">"Journey"</h2>
            <ol class="timeline__list">
                {TIMELINE.iter().map(milestone_view).collect_view()}
            </ol>
        </section>
    }
}

fn milestone_view(m: &Milestone) -> impl IntoView {
    view! {
        <li class="timeline__item">
            <span class="timeline__year">{m.year}</span>
            <h3 class="timeline__title">{m.title}</h3>
            <p class="timeline__detail">{m.detail}</p>
        </li>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2 class="section-title">"What People Say"</h2>
            <div class="testimonials__grid">{TESTIMONIALS.iter().map(testimonial_view).collect_view()}</div>
        </section>
    }
}

fn testimonial_view(t: &Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial">
            <blockquote class="testimonial__quote">{t.quote}</blockquote>
            <figcaption class="testimonial__author">
                <strong>{t.name}</strong>
                <span>{t.role}</span>
            </figcaption>
        </figure>
    }
}
