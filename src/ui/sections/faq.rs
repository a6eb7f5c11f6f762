//! FAQ accordion: single-open items, header and list reveals.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const FAQS: [(&str, &str); 5] = [
    (
        "Can I invite non-students (advisors/clients)?",
        "Absolutely. You can invite anyone to collaborate on your projects. They'll get view or comment access depending on the permissions you set.",
    ),
    (
        "What file types are supported?",
        "We support all common file types including PDFs, Word docs, PowerPoint presentations, images (JPG, PNG, SVG), and code files. Max file size is 100MB on Pro plans.",
    ),
    (
        "How do reminders work?",
        "Set due dates on any task and we'll remind you via email or push notification. You can customize reminder times (1 day before, 1 hour before, etc.) in your settings.",
    ),
    (
        "Can I export my project for submission?",
        "Yes! Export your entire project as a formatted PDF report, or export individual tasks and files. Perfect for submitting coursework to professors.",
    ),
    (
        "What happens when I graduate?",
        "Your projects stay with you! You can continue using StudyFlow with our graduate pricing, or export everything before you leave. We also offer alumni discounts.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let accordion_ref = NodeRef::<html::Div>::new();

    // Single-open accordion state shared by all items
    let open_item = RwSignal::new(None::<usize>);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
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

            scroll.add(
                SectionFx::reveal(accordion_ref.get_untracked(), 0.75)
                    .target(accordion_ref.get_untracked())
                    .timeline(ScrollTimeline::new().with(
                        Tween::of(0)
                            .span(0.6)
                            .from(Pose::new().y(Len::px(20.0)).opacity(0.0))
                            .ease(Ease::CubicOut),
                    )),
            );

            scroll.section_ready();
        });
    }

    view! {
        <section id="faq" class="section faq">
            <div class="section-inner section-inner-narrow">
                <div class="section-header section-header-centered" node_ref=header_ref>
                    <span class="label-uppercase accent-text">"FAQ"</span>
                    <h2 class="section-title">
                        "Questions? "
                        <span class="accent-text">"Answers."</span>
                    </h2>
                </div>

                <div class="faq-list" node_ref=accordion_ref>
                    {FAQS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (question, answer))| {
                            view! {
                                <FaqItem index=index question=question answer=answer open_item=open_item />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item; opening one closes whichever was open before.
#[component]
fn FaqItem(
    index: usize,
    question: &'static str,
    answer: &'static str,
    open_item: RwSignal<Option<usize>>,
) -> impl IntoView {
    let is_open = Memo::new(move |_| open_item.get() == Some(index));

    view! {
        <div class="faq-item" class:faq-item-open=move || is_open.get()>
            <button
                class="faq-question"
                on:click=move |_| {
                    open_item.update(|open| {
                        *open = if *open == Some(index) { None } else { Some(index) };
                    })
                }
                aria-expanded=move || is_open.get()
            >
                <span>{question}</span>
                <span class="faq-chevron" class:faq-chevron-open=move || is_open.get()>
                    <Icon name=icons::CHEVRON_DOWN class="icon" />
                </span>
            </button>
            <div class="faq-answer" class:faq-answer-open=move || is_open.get()>
                <p>{answer}</p>
            </div>
        </div>
    }
}
