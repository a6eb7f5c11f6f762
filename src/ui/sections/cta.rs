//! Call-to-action: the second pinned section, with a scrubbed entrance,
//! hold, and exit across its sticky span.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::CONTACT_URL;

#[component]
pub fn Cta() -> impl IntoView {
    let stage_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let square_k_ref = NodeRef::<html::Div>::new();
    let square_l_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
        Effect::new(move |_| {
            // Entrance over the first 30% of the span, exit over the last
            let timeline = ScrollTimeline::new()
                .with(
                    Tween::of(0)
                        .span(0.3)
                        .from(Pose::new().y(Len::vh(40.0)).opacity(0.0)),
                )
                .with(
                    Tween::of(1)
                        .span(0.3)
                        .from(Pose::new().x(Len::vw(-40.0)).rotate(-18.0).opacity(0.0)),
                )
                .with(
                    Tween::of(2)
                        .span(0.3)
                        .from(Pose::new().x(Len::vw(40.0)).rotate(18.0).opacity(0.0)),
                )
                .with(
                    Tween::of(0)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().y(Len::vh(-18.0)).opacity(0.0))
                        .ease(Ease::QuadIn),
                )
                .with(
                    Tween::of(1)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().x(Len::vw(-20.0)).opacity(0.2))
                        .ease(Ease::QuadIn),
                )
                .with(
                    Tween::of(2)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().x(Len::vw(20.0)).opacity(0.2))
                        .ease(Ease::QuadIn),
                );

            scroll.add(
                SectionFx::pinned(stage_ref.get_untracked(), 0.6)
                    .target(content_ref.get_untracked())
                    .target(square_k_ref.get_untracked())
                    .target(square_l_ref.get_untracked())
                    .timeline(timeline),
            );

            scroll.section_ready();
        });
    }

    view! {
        <div class="pin-stage cta-stage" node_ref=stage_ref>
            <section class="pinned-section cta">
                // Floating gradient blobs
                <div class="cta-blobs" aria-hidden="true">
                    <div class="cta-blob cta-blob-a"></div>
                    <div class="cta-blob cta-blob-b"></div>
                </div>

                // Decorative squares
                <div class="cta-square cta-square-k" node_ref=square_k_ref></div>
                <div class="cta-square cta-square-l" node_ref=square_l_ref></div>

                <div class="cta-content" node_ref=content_ref>
                    <h2 class="cta-title">
                        "Ready to ship your "
                        <span class="accent-text">"next project?"</span>
                    </h2>
                    <p class="cta-lede">
                        "Join thousands of students who plan smarter, stress less, and deliver on time."
                    </p>
                    <div class="cta-actions">
                        <a
                            href=CONTACT_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-primary btn-large"
                        >
                            "Get Started"
                            <Icon name=icons::ARROW_RIGHT class="icon" />
                        </a>
                    </div>
                    <p class="cta-caption">"No credit card required."</p>
                </div>
            </section>
        </div>
    }
}
