#![cfg(all(feature = "ssr", not(feature = "hydrate")))]

use leptos::tachys::view::RenderHtml;

use super::*;
use crate::state::theme_context::ThemeContext;

#[test]
fn page_content_is_held_back_until_theme_is_ready() {
    let html = Owner::new().with(|| {
        ThemeContext::provide();
        view! {
            <PageShell class="page--home">
                <h1 class="hero__title">"Designed for Designers"</h1>
            </PageShell>
        }
        .to_html()
    });

    assert!(html.contains("page--home"), "{html}");
    assert!(html.contains(LOADING_TEXT), "{html}");
    for themed in ["hero__title", "nav", "footer", "particles", "theme-toggle"] {
        assert!(!html.contains(&format!("class=\"{themed}")), "{themed} rendered before ready: {html}");
    }
}
