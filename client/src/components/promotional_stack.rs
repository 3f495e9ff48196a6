//! Scroll-linked stacking case-study cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Home-page centrepiece. Each slide is a full-height card; as the reader
//! scrolls through the stack's region, later cards slide up over earlier
//! ones, leaving a strip of each covered card visible.
//!
//! DESIGN
//! ======
//! All geometry comes from `parallax::StackAnimator`. This component only
//! measures the region on `scroll` / `resize`, feeds the progress in, and
//! pumps animation frames until the springs settle. The loop stops itself
//! once settled and is restarted by the next scroll event; an alive flag
//! plus `on_cleanup` guarantees no frame callback touches disposed state.

#[cfg(test)]
#[path = "promotional_stack_test.rs"]
mod promotional_stack_test;

use leptos::prelude::*;
use parallax::{PanelFrame, StackAnimator, StackConfig};

use crate::data::slides::{SLIDES, Slide};

/// Inline style positioning one card.
pub fn panel_style(frame: &PanelFrame, panel_height: f64) -> String {
    format!(
        "height: {panel_height}px; z-index: {}; transform: translate3d(0, {:.2}px, 0);",
        frame.stack_order, frame.y
    )
}

/// Inline style reserving the scroll region.
pub fn region_style(region_height: f64) -> String {
    format!("height: {region_height}px;")
}

#[component]
pub fn PromotionalStack() -> impl IntoView {
    let config = StackConfig::default();
    let animator = match StackAnimator::new(config, SLIDES.len()) {
        Ok(animator) => animator,
        Err(e) => {
            leptos::logging::warn!("promotional stack disabled: {e}");
            return view! { <StaticSlides/> }.into_any();
        }
    };

    let panel_height = config.panel_height;
    // On viewports at least this tall there is nothing to scroll through, so
    // progress jumps between 0 and 1 and the springs do all the animating.
    let region_height = animator.layout().region_height();
    let frames = RwSignal::new(animator.frames());
    let animator = StoredValue::new(animator);
    let region = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    animate::wire(region, animator, frames);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = animator;
    }

    let cards = SLIDES
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let style = move || {
                frames.with(|all| all.get(index).map(|f| panel_style(f, panel_height)).unwrap_or_default())
            };
            view! {
                <div class="stack__panel" style=style>
                    <SlideCard slide=*slide/>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="stack" node_ref=region style=region_style(region_height)>
            {cards}
        </section>
    }
    .into_any()
}

/// Plain list fallback when the stack cannot be laid out.
#[component]
fn StaticSlides() -> impl IntoView {
    view! {
        <section class="stack stack--static">
            {SLIDES.iter().map(|slide| view! { <SlideCard slide=*slide/> }).collect_view()}
        </section>
    }
}

#[component]
fn SlideCard(slide: Slide) -> impl IntoView {
    let cta_class = if slide.cta_enabled { "slide__cta" } else { "slide__cta slide__cta--disabled" };
    view! {
        <article class="slide">
            <h3 class="slide__title">{slide.title}</h3>
            <p class="slide__summary">{slide.summary}</p>
            <dl class="slide__metrics">
                {slide
                    .metrics
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="slide__metric">
                                <dt>{m.label}</dt>
                                <dd>{m.value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <a href=slide.link class=cta_class aria-disabled=(!slide.cta_enabled).to_string()>
                {slide.cta}
            </a>
        </article>
    }
}

#[cfg(feature = "hydrate")]
mod animate {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use leptos::prelude::*;
    use parallax::{PanelFrame, StackAnimator};

    use crate::util::scroll::{self, FrameClock};

    /// Register scroll/resize listeners and the frame loop for this mount.
    pub(super) fn wire(
        region: NodeRef<leptos::html::Section>,
        animator: StoredValue<StackAnimator>,
        frames: RwSignal<Vec<PanelFrame>>,
    ) {
        let alive = Arc::new(AtomicBool::new(true));
        let clock = StoredValue::new(FrameClock::default());

        let measure = {
            let alive = alive.clone();
            move |snap: bool| {
                let Some(el) = region.get_untracked() else {
                    return;
                };
                let progress = scroll::region_progress(&el);
                animator.update_value(|a| {
                    a.set_progress(progress);
                    if snap {
                        a.snap();
                    }
                });
                if snap {
                    frames.set(animator.with_value(StackAnimator::frames));
                } else {
                    schedule(animator, frames, clock, alive.clone());
                }
            }
        };

        let on_mount = measure.clone();
        Effect::new(move |_| on_mount(true));

        let on_scroll = measure.clone();
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll(false));
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| measure(false));

        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            scroll_handle.remove();
            resize_handle.remove();
        });
    }

    /// Request one animation frame unless one is already pending.
    fn schedule(
        animator: StoredValue<StackAnimator>,
        frames: RwSignal<Vec<PanelFrame>>,
        clock: StoredValue<FrameClock>,
        alive: Arc<AtomicBool>,
    ) {
        if !clock.try_update_value(FrameClock::request).unwrap_or(false) {
            return;
        }
        let requested = scroll::request_frame({
            let alive = alive.clone();
            move |now_ms| {
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let dt = clock.try_update_value(|c| c.tick(now_ms)).unwrap_or_default();
                let Some(settled) = animator.try_update_value(|a| {
                    a.advance(dt);
                    a.is_settled()
                }) else {
                    return;
                };
                if let Some(next) = animator.try_with_value(StackAnimator::frames) {
                    frames.try_set(next);
                }
                if settled {
                    clock.try_update_value(FrameClock::pause);
                } else {
                    schedule(animator, frames, clock, alive);
                }
            }
        });
        if !requested {
            leptos::logging::debug_warn!("promotional stack: animation frame unavailable");
            clock.try_update_value(FrameClock::pause);
        }
    }
}
