//! Testimonial cards with a staggered reveal.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "StudyFlow turned our chaotic group chat into a real plan. We actually finished our project two days early!",
        name: "A. Lin",
        role: "Design Major",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "We finished early because everyone knew what to do. No more \"I thought you were doing that\" moments.",
        name: "M. Ross",
        role: "Business Student",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "The best tool I've used for team projects. Simple enough for anyone to pick up, powerful enough to actually help.",
        name: "S. Patel",
        role: "Engineering Student",
        avatar: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=200&q=80",
        rating: 5,
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let cards_ref = NodeRef::<html::Div>::new();
    let card_refs: Vec<NodeRef<html::Div>> = TESTIMONIALS.iter().map(|_| NodeRef::new()).collect();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
        let card_refs = card_refs.clone();
        Effect::new(move |_| {
            scroll.add(
                SectionFx::reveal(header_ref.get_untracked(), 0.8)
                    .target(header_ref.get_untracked())
                    .timeline(ScrollTimeline::new().with(
                        Tween::of(0)
                            .span(0.6)
                            .from(Pose::new().y(Len::px(18.0)).opacity(0.0))
                            .ease(Ease::CubicOut),
                    )),
            );

            let cards = card_refs
                .iter()
                .fold(SectionFx::reveal(cards_ref.get_untracked(), 0.75), |fx, r| {
                    fx.target(r.get_untracked())
                });
            scroll.add(
                cards.timeline(ScrollTimeline::new().stagger(
                    0..card_refs.len(),
                    0.1,
                    Tween::of(0)
                        .span(0.6)
                        .from(Pose::new().y(Len::px(28.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )),
            );

            scroll.section_ready();
        });
    }

    view! {
        <section id="testimonials" class="section testimonials">
            // Background blob
            <div class="testimonials-blob" aria-hidden="true"></div>

            <div class="section-inner">
                <div class="section-header section-header-centered" node_ref=header_ref>
                    <span class="label-uppercase accent-text">"Testimonials"</span>
                    <h2 class="section-title">
                        "Loved by "
                        <span class="accent-text">"students"</span>
                    </h2>
                </div>

                <div class="testimonials-grid" node_ref=cards_ref>
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            let card_ref = card_refs[i];
                            view! {
                                <div class="testimonial-card" node_ref=card_ref>
                                    <div class="testimonial-stars">
                                        {(0..t.rating)
                                            .map(|_| {
                                                view! {
                                                    <Icon
                                                        name=icons::STAR
                                                        class="icon icon-filled accent-text"
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                                    <div class="testimonial-author">
                                        <div class="testimonial-avatar">
                                            <img src=t.avatar alt=t.name loading="lazy" />
                                        </div>
                                        <div>
                                            <p class="testimonial-name">{t.name}</p>
                                            <p class="testimonial-role">{t.role}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
