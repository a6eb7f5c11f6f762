//! Features grid: header reveal plus staggered card reveals.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const FEATURES: [(&str, &str, &str); 6] = [
    (
        icons::LAYOUT,
        "Task Boards",
        "Organize work with drag-and-drop boards and clear priorities. Visualize your workflow from start to finish.",
    ),
    (
        icons::CALENDAR,
        "Deadlines & Reminders",
        "Never miss a due date with smart notifications. Get reminded at the right time, every time.",
    ),
    (
        icons::FOLDER,
        "File Hub",
        "Keep assets in one place, versioned and searchable. Find what you need in seconds.",
    ),
    (
        icons::MESSAGE_SQUARE,
        "Team Chat",
        "Discuss tasks without losing context. Every conversation is linked to the work.",
    ),
    (
        icons::FLAG,
        "Milestones",
        "Break big projects into achievable phases. Track progress and celebrate wins.",
    ),
    (
        icons::DOWNLOAD,
        "Exports",
        "Submit PDFs, slides, or docs in one click. Professional formatting, every time.",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let grid_ref = NodeRef::<html::Div>::new();
    let card_refs: Vec<NodeRef<html::Div>> = FEATURES.iter().map(|_| NodeRef::new()).collect();

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
                            .from(Pose::new().y(Len::px(24.0)).opacity(0.0))
                            .ease(Ease::CubicOut),
                    )),
            );

            let cards = card_refs
                .iter()
                .fold(SectionFx::reveal(grid_ref.get_untracked(), 0.75), |fx, r| {
                    fx.target(r.get_untracked())
                });
            scroll.add(
                cards.timeline(ScrollTimeline::new().stagger(
                    0..card_refs.len(),
                    0.08,
                    Tween::of(0)
                        .span(0.6)
                        .from(Pose::new().y(Len::px(40.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )),
            );

            scroll.section_ready();
        });
    }

    view! {
        <section id="features" class="section features">
            <div class="section-inner">
                <div class="section-header" node_ref=header_ref>
                    <h2 class="section-title">
                        "Everything you need to "
                        <span class="accent-text">"ship great work"</span>
                    </h2>
                    <p class="section-lede">
                        "Tasks, files, deadlines, and communication — organized in one place."
                    </p>
                </div>

                <div class="features-grid" node_ref=grid_ref>
                    {FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(i, (icon, title, description))| {
                            let card_ref = card_refs[i];
                            view! {
                                <div class="feature-card" node_ref=card_ref>
                                    <div class="feature-icon">
                                        <Icon name=icon class="icon-lg accent-text" />
                                    </div>
                                    <h3 class="feature-title">{title}</h3>
                                    <p class="feature-description">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
