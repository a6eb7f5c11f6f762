//! Pricing plans with a staggered card reveal.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::CONTACT_URL;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    highlighted: bool,
    badge: Option<&'static str>,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "Free",
        period: "",
        description: "Perfect for trying out StudyFlow",
        features: &[
            "3 projects",
            "Core task management",
            "7-day history",
            "Basic file storage",
            "Email notifications",
        ],
        cta: "Get Started",
        highlighted: false,
        badge: None,
    },
    Plan {
        name: "Pro",
        price: "$8",
        period: "/month",
        description: "For students who mean business",
        features: &[
            "Unlimited projects",
            "Full history",
            "Advanced exports",
            "Smart reminders",
            "Priority support",
            "Team collaboration",
        ],
        cta: "Start Free Trial",
        highlighted: true,
        badge: Some("Most Popular"),
    },
    Plan {
        name: "Team",
        price: "$14",
        period: "/seat",
        description: "For study groups and clubs",
        features: &[
            "Everything in Pro",
            "Shared workspaces",
            "Admin controls",
            "Analytics dashboard",
            "SSO integration",
            "Dedicated support",
        ],
        cta: "Contact Sales",
        highlighted: false,
        badge: None,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let cards_ref = NodeRef::<html::Div>::new();
    let card_refs: Vec<NodeRef<html::Div>> = PLANS.iter().map(|_| NodeRef::new()).collect();

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
                .fold(SectionFx::reveal(cards_ref.get_untracked(), 0.75), |fx, r| {
                    fx.target(r.get_untracked())
                });
            scroll.add(
                cards.timeline(ScrollTimeline::new().stagger(
                    0..card_refs.len(),
                    0.1,
                    Tween::of(0)
                        .span(0.6)
                        .from(Pose::new().y(Len::px(36.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )),
            );

            scroll.section_ready();
        });
    }

    view! {
        <section id="pricing" class="section pricing">
            <div class="section-inner">
                <div class="section-header section-header-centered" node_ref=header_ref>
                    <span class="label-uppercase accent-text">"Pricing"</span>
                    <h2 class="section-title">
                        "Simple "
                        <span class="accent-text">"pricing"</span>
                    </h2>
                    <p class="section-lede">"Start free, upgrade when you need more power."</p>
                </div>

                <div class="pricing-grid" node_ref=cards_ref>
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(i, plan)| {
                            let card_ref = card_refs[i];
                            view! {
                                <div
                                    class="pricing-card"
                                    class:pricing-card-highlighted=plan.highlighted
                                    node_ref=card_ref
                                >
                                    {plan
                                        .badge
                                        .map(|badge| {
                                            view! {
                                                <div class="pricing-badge">
                                                    <span>{badge}</span>
                                                </div>
                                            }
                                        })}

                                    <h3 class="pricing-name">{plan.name}</h3>
                                    <div class="pricing-price">
                                        <span class="pricing-amount">{plan.price}</span>
                                        <span class="pricing-period">{plan.period}</span>
                                    </div>
                                    <p class="pricing-description">{plan.description}</p>

                                    <a
                                        href=CONTACT_URL
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=if plan.highlighted {
                                            "btn-primary pricing-cta"
                                        } else {
                                            "btn-muted pricing-cta"
                                        }
                                    >
                                        {plan.cta}
                                    </a>

                                    <ul class="pricing-features">
                                        {plan
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <span class="pricing-check">
                                                            <Icon
                                                                name=icons::CHECK
                                                                class="icon-sm accent-text"
                                                            />
                                                        </span>
                                                        <span>{*feature}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
