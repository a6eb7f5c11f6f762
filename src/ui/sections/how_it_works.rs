//! How-it-works steps: alternating image/content rows, each with its own
//! reveal timeline.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct Step {
    number: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        icon: icons::USERS,
        title: "Work together without the mess.",
        description: "Assign owners, comment on tasks, and resolve feedback fast — so everyone knows what's next.",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&q=80",
    },
    Step {
        number: "02",
        icon: icons::GIT_BRANCH,
        title: "Built for how students actually work.",
        description: "From research to final review, keep every step organized — without endless threads or lost files.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&q=80",
    },
    Step {
        number: "03",
        icon: icons::BAR_CHART,
        title: "See progress at a glance.",
        description: "Track completion, spot blockers early, and present results with built-in analytics.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
    },
];

/// Element refs for one step row, in timeline target order.
#[derive(Clone, Copy)]
struct StepRefs {
    row: NodeRef<html::Div>,
    image: NodeRef<html::Div>,
    content: NodeRef<html::Div>,
    badge: NodeRef<html::Div>,
    square: NodeRef<html::Div>,
}

impl StepRefs {
    fn new() -> Self {
        Self {
            row: NodeRef::new(),
            image: NodeRef::new(),
            content: NodeRef::new(),
            badge: NodeRef::new(),
            square: NodeRef::new(),
        }
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let step_refs: Vec<StepRefs> = STEPS.iter().map(|_| StepRefs::new()).collect();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
        let step_refs = step_refs.clone();
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

            for (i, refs) in step_refs.iter().enumerate() {
                // Even rows slide the image in from the left, odd from the
                // right, with the content countering
                let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
                scroll.add(
                    SectionFx::reveal(refs.row.get_untracked(), 0.7)
                        .target(refs.image.get_untracked())
                        .target(refs.content.get_untracked())
                        .target(refs.badge.get_untracked())
                        .target(refs.square.get_untracked())
                        .timeline(
                            ScrollTimeline::new()
                                .with(
                                    Tween::of(0)
                                        .span(0.8)
                                        .from(
                                            Pose::new()
                                                .x(Len::px(-60.0 * direction))
                                                .opacity(0.0),
                                        )
                                        .ease(Ease::CubicOut),
                                )
                                .with(
                                    Tween::of(1)
                                        .at(0.1)
                                        .span(0.8)
                                        .from(
                                            Pose::new().x(Len::px(40.0 * direction)).opacity(0.0),
                                        )
                                        .ease(Ease::CubicOut),
                                )
                                .with(
                                    Tween::of(2)
                                        .at(0.2)
                                        .span(0.6)
                                        .from(Pose::new().rotate(360.0).scale(0.0).opacity(0.0))
                                        .ease(Ease::BackOut),
                                )
                                .with(
                                    Tween::of(3)
                                        .at(0.3)
                                        .span(0.5)
                                        .from(
                                            Pose::new()
                                                .scale(0.6)
                                                .rotate(-10.0 * direction)
                                                .opacity(0.0),
                                        )
                                        .ease(Ease::BackOut),
                                ),
                        ),
                );
            }

            scroll.section_ready();
        });
    }

    view! {
        <section id="how-it-works" class="section how-it-works">
            <div class="section-inner">
                <div class="section-header section-header-centered" node_ref=header_ref>
                    <span class="label-uppercase accent-text">"How It Works"</span>
                    <h2 class="section-title">
                        "Three steps to "
                        <span class="accent-text">"better projects"</span>
                    </h2>
                </div>

                <div class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            let refs = step_refs[i];
                            let reversed = i % 2 == 1;
                            view! {
                                <div
                                    class="step-row"
                                    class:step-row-reversed=reversed
                                    node_ref=refs.row
                                >
                                    <div class="step-image" node_ref=refs.image>
                                        <div class="step-image-frame">
                                            <img src=step.image alt=step.title loading="lazy" />
                                            <div class="step-image-fade" aria-hidden="true"></div>
                                        </div>
                                        <div
                                            class=format!("step-square step-square-{}", step.number)
                                            node_ref=refs.square
                                            aria-hidden="true"
                                        ></div>
                                    </div>
                                    <div class="step-content" node_ref=refs.content>
                                        <div class="step-badge" node_ref=refs.badge>
                                            <Icon name=step.icon class="icon-lg accent-text" />
                                        </div>
                                        <h3 class="step-title">{step.title}</h3>
                                        <p class="step-description">{step.description}</p>
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
