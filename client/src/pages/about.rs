//! About page: bio, skills, résumé, timeline and testimonials.

use leptos::prelude::*;

use crate::components::about_sections::{ResumeSection, Skills, Testimonials, Timeline};
use crate::components::page_shell::PageShell;
use crate::data::about::{EDUCATION, EXPERIENCE};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell class="page--about">
            <header class="page-header">
                <h1 class="page-header__title">"About Me"</h1>
                <p class="page-header__lead">
                    "I'm a designer and frontend developer who turns product ideas into fast, "
                    "accessible interfaces. I care about the details that make software feel effortless."
                </p>
            </header>
            <Skills/>
            <div class="resume-grid">
                <ResumeSection title="Experience" entries=EXPERIENCE/>
                <ResumeSection title="Education" entries=EDUCATION/>
            </div>
            <Timeline/>
            <Testimonials/>
        </PageShell>
    }
}
