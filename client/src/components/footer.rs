//! Site footer.

use leptos::prelude::*;

use crate::data::contact::{COPYRIGHT, FOOTER_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__copy">{COPYRIGHT}</div>
                <nav class="footer__links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="footer__link">{link.label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
