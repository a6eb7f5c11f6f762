//! Hero section: pinned viewport with a mount-time entrance and a
//! scroll-scrubbed exit.
//!
//! The wrapper is 230vh tall while the inner section sticks at 100vh, so
//! the sticky span gives the scrub timeline 130% of a viewport to play
//! over before the page moves on.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    let stage_ref = NodeRef::<html::Div>::new();
    let badge_ref = NodeRef::<html::Div>::new();
    let headline_ref = NodeRef::<html::H1>::new();
    let word_a_ref = NodeRef::<html::Span>::new();
    let word_b_ref = NodeRef::<html::Span>::new();
    let word_c_ref = NodeRef::<html::Span>::new();
    let word_refs = [word_a_ref, word_b_ref, word_c_ref];
    let subheadline_ref = NodeRef::<html::P>::new();
    let cta_ref = NodeRef::<html::Div>::new();
    let caption_ref = NodeRef::<html::P>::new();
    let visual_ref = NodeRef::<html::Div>::new();
    let square_a_ref = NodeRef::<html::Div>::new();
    let square_b_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
        Effect::new(move |_| {
            // Load animation, positions in seconds
            let mut intro = ScrollTimeline::new().with(
                Tween::of(0)
                    .span(0.6)
                    .from(Pose::new().scale(0.6).opacity(0.0))
                    .ease(Ease::BackOut),
            );
            for word in 0..word_refs.len() {
                intro = intro.with(
                    Tween::of(1 + word)
                        .at(0.3 + 0.1 * word as f64)
                        .span(0.5)
                        .from(Pose::new().y(Len::px(24.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                );
            }
            let intro = intro
                .with(
                    Tween::of(4)
                        .at(0.8)
                        .span(0.5)
                        .from(Pose::new().y(Len::px(16.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )
                .with(
                    Tween::of(5)
                        .at(1.0)
                        .span(0.5)
                        .from(Pose::new().y(Len::px(16.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )
                .with(
                    Tween::of(6)
                        .at(1.3)
                        .span(0.4)
                        .from(Pose::new().y(Len::px(12.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )
                .with(
                    Tween::of(7)
                        .span(0.9)
                        .from(Pose::new().x(Len::px(60.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )
                .with(
                    Tween::of(8)
                        .at(0.2)
                        .span(0.6)
                        .from(Pose::new().scale(0.6).rotate(-8.0).opacity(0.0))
                        .ease(Ease::BackOut),
                )
                .with(
                    Tween::of(9)
                        .at(0.35)
                        .span(0.6)
                        .from(Pose::new().scale(0.6).rotate(8.0).opacity(0.0))
                        .ease(Ease::BackOut),
                );

            scroll.play_intro(
                SectionFx::intro()
                    .target(badge_ref.get_untracked())
                    .target(word_refs[0].get_untracked())
                    .target(word_refs[1].get_untracked())
                    .target(word_refs[2].get_untracked())
                    .target(subheadline_ref.get_untracked())
                    .target(cta_ref.get_untracked())
                    .target(caption_ref.get_untracked())
                    .target(visual_ref.get_untracked())
                    .target(square_a_ref.get_untracked())
                    .target(square_b_ref.get_untracked())
                    .timeline(intro),
            );

            // Exit choreography over the pinned span: hold through 70%,
            // then everything leaves. Positions are span fractions.
            let exit = ScrollTimeline::new()
                .with(
                    Tween::of(0)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().x(Len::vw(-18.0)).opacity(0.0))
                        .ease(Ease::QuadIn)
                        .deferred(),
                )
                .with(
                    Tween::of(1)
                        .at(0.72)
                        .span(0.28)
                        .to(Pose::new().x(Len::vw(-14.0)).opacity(0.0))
                        .ease(Ease::QuadIn)
                        .deferred(),
                )
                .with(
                    Tween::of(2)
                        .at(0.74)
                        .span(0.26)
                        .to(Pose::new().x(Len::vw(-10.0)).opacity(0.0))
                        .ease(Ease::QuadIn)
                        .deferred(),
                )
                .with(
                    Tween::of(3)
                        .at(0.76)
                        .span(0.24)
                        .to(Pose::new().opacity(0.0))
                        .ease(Ease::QuadIn)
                        .deferred(),
                )
                .with(
                    Tween::of(4)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().x(Len::vw(10.0)).scale(0.96).opacity(0.0))
                        .ease(Ease::QuadIn)
                        .deferred(),
                )
                .with(
                    Tween::of(5)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().y(Len::vh(-20.0)).rotate(-12.0).opacity(0.2))
                        .ease(Ease::QuadIn)
                        .deferred(),
                )
                .with(
                    Tween::of(6)
                        .at(0.7)
                        .span(0.3)
                        .to(Pose::new().y(Len::vh(18.0)).rotate(12.0).opacity(0.2))
                        .ease(Ease::QuadIn)
                        .deferred(),
                );

            scroll.add(
                SectionFx::pinned(stage_ref.get_untracked(), 0.6)
                    .target(headline_ref.get_untracked())
                    .target(subheadline_ref.get_untracked())
                    .target(cta_ref.get_untracked())
                    .target(caption_ref.get_untracked())
                    .target(visual_ref.get_untracked())
                    .target(square_a_ref.get_untracked())
                    .target(square_b_ref.get_untracked())
                    .timeline(exit),
            );

            scroll.section_ready();
        });
    }

    view! {
        <div class="pin-stage hero-stage" node_ref=stage_ref>
            <section class="pinned-section hero">
                // Background gradient blobs
                <div class="hero-blobs" aria-hidden="true">
                    <div class="hero-blob hero-blob-a"></div>
                    <div class="hero-blob hero-blob-b"></div>
                </div>

                // Decorative squares
                <div class="hero-square hero-square-a" node_ref=square_a_ref></div>
                <div class="hero-square hero-square-b" node_ref=square_b_ref></div>

                <div class="hero-layout">
                    <div class="hero-copy">
                        <div class="hero-badge" node_ref=badge_ref>
                            <span class="hero-badge-dot"></span>
                            <span class="label-uppercase accent-text">"New: AI Assistant"</span>
                        </div>

                        <h1 class="hero-headline" node_ref=headline_ref>
                            <span class="hero-word" node_ref=word_a_ref>"Manage."</span>
                            " "
                            <span class="hero-word" node_ref=word_b_ref>"Collaborate."</span>
                            " "
                            <span class="hero-word accent-text" node_ref=word_c_ref>"Deliver."</span>
                        </h1>

                        <p class="hero-subheadline" node_ref=subheadline_ref>
                            "The student project platform that keeps your team aligned from first idea to final submission."
                        </p>

                        <div class="hero-cta" node_ref=cta_ref>
                            <button
                                class="btn-primary btn-large"
                                on:click=move |_| scroll_to_anchor("features")
                            >
                                "Get Started"
                                <Icon name=icons::ARROW_RIGHT class="icon" />
                            </button>
                            <button
                                class="hero-play-link"
                                on:click=move |_| scroll_to_anchor("how-it-works")
                            >
                                <span class="hero-play-circle">
                                    <Icon name=icons::PLAY class="icon-sm" />
                                </span>
                                <span>"See how it works"</span>
                            </button>
                        </div>

                        <p class="label-uppercase muted-text" node_ref=caption_ref>
                            "Built for coursework. Designed for teams."
                        </p>
                    </div>

                    <div class="hero-visual" node_ref=visual_ref>
                        <div class="hero-visual-frame">
                            <TaskBoardMockup />
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Static project-board mockup shown in the hero panel.
#[component]
fn TaskBoardMockup() -> impl IntoView {
    let columns: [(&str, &[(&str, &str)]); 3] = [
        (
            "To do",
            &[
                ("Survey questions", "Research"),
                ("Slide deck outline", "Deliverable"),
            ],
        ),
        (
            "In progress",
            &[
                ("Literature review", "Research"),
                ("Prototype v2", "Build"),
            ],
        ),
        ("Done", &[("Project charter", "Planning")]),
    ];

    view! {
        <div class="board-mockup">
            <div class="board-mockup-header">
                <span class="board-mockup-title">"Capstone Project"</span>
                <div class="board-mockup-avatars" aria-hidden="true">
                    <span class="board-avatar board-avatar-a">"A"</span>
                    <span class="board-avatar board-avatar-b">"M"</span>
                    <span class="board-avatar board-avatar-c">"S"</span>
                </div>
            </div>
            <div class="board-mockup-columns">
                {columns
                    .into_iter()
                    .map(|(name, tasks)| {
                        view! {
                            <div class="board-column">
                                <span class="board-column-name">{name}</span>
                                {tasks
                                    .iter()
                                    .map(|(title, tag)| {
                                        view! {
                                            <div class="board-task">
                                                <span class="board-task-title">{*title}</span>
                                                <span class="board-task-tag">{*tag}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
