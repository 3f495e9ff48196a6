//! Contact page: message form plus contact details.
//!
//! Submissions are validated and logged in the browser console; nothing is
//! sent over the network.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::data::contact::{CHANNELS, SERVICES};
use crate::state::contact::{ContactDraft, ContactField, ContactFormError};

/// Outcome of the last submit attempt.
#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Sent(String),
    Invalid(ContactFormError),
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let status = RwSignal::new(Status::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with(ContactDraft::validate) {
            Ok(submission) => {
                match serde_json::to_string(&submission) {
                    Ok(json) => leptos::logging::log!("contact form submitted: {json}"),
                    Err(e) => leptos::logging::warn!("contact form submitted (unserializable: {e}): {submission:?}"),
                }
                status.set(Status::Sent(submission.name));
                draft.set(ContactDraft::default());
            }
            Err(e) => status.set(Status::Invalid(e)),
        }
    };

    let field_error = move |field: ContactField| {
        move || match status.get() {
            Status::Invalid(e) if e.field() == field => Some(e.to_string()),
            _ => None,
        }
    };

    let input = move |field: ContactField, kind: &'static str, placeholder: &'static str| {
        view! {
            <label class="form__field">
                <span class="form__label">{field.label()}</span>
                <input
                    class="form__input"
                    type=kind
                    name=field.label().to_lowercase()
                    placeholder=placeholder
                    prop:value=move || draft.with(|d| d.get(field).to_owned())
                    on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                />
                <span class="form__error">{field_error(field)}</span>
            </label>
        }
    };

    view! {
        <PageShell class="page--contact">
            <header class="page-header">
                <h1 class="page-header__title">"Let's Connect"</h1>
                <p class="page-header__lead">
                    "Ready to start your next project? I'd love to hear from you and discuss how we can work together."
                </p>
            </header>
            <div class="contact-grid">
                <section class="card">
                    <h2 class="card__title">"Send a Message"</h2>
                    <form class="form" on:submit=on_submit novalidate=true>
                        {input(ContactField::Name, "text", "Your name")}
                        {input(ContactField::Email, "email", "your.email@example.com")}
                        {input(ContactField::Subject, "text", "What's this about?")}
                        <label class="form__field">
                            <span class="form__label">{ContactField::Message.label()}</span>
                            <textarea
                                class="form__input form__input--multiline"
                                name="message"
                                rows="6"
                                placeholder="Tell me about your project..."
                                prop:value=move || draft.with(|d| d.message.clone())
                                on:input=move |ev| draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                            ></textarea>
                            <span class="form__error">{field_error(ContactField::Message)}</span>
                        </label>
                        <button class="button button--primary" type="submit">"Send Message"</button>
                        <Show when=move || matches!(status.get(), Status::Sent(_))>
                            <p class="form__confirmation">
                                {move || match status.get() {
                                    Status::Sent(name) => format!("Thanks, {name}! Your message is on its way."),
                                    _ => String::new(),
                                }}
                            </p>
                        </Show>
                    </form>
                </section>
                <aside class="card">
                    <h2 class="card__title">"Get in Touch"</h2>
                    <ul class="contact-info">
                        {CHANNELS
                            .iter()
                            .map(|c| {
                                view! {
                                    <li class="contact-info__item">
                                        <span class="contact-info__label">{c.label}</span>
                                        <a href=c.href>{c.value}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <h3 class="card__subtitle">"Services"</h3>
                    <ul class="services">
                        {SERVICES.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </ul>
                </aside>
            </div>
        </PageShell>
    }
}
