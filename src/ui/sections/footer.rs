//! Footer with staggered link-column reveal.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const FOOTER_LINKS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "Pricing", "Testimonials", "FAQ"]),
    ("Resources", ["Blog", "Guides", "Templates", "Help Center"]),
    ("Legal", ["Privacy", "Terms", "Cookies", "Security"]),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    (icons::TWITTER, "Twitter"),
    (icons::INSTAGRAM, "Instagram"),
    (icons::LINKEDIN, "LinkedIn"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let brand_ref = NodeRef::<html::Div>::new();
    let column_refs: Vec<NodeRef<html::Div>> = FOOTER_LINKS.iter().map(|_| NodeRef::new()).collect();
    let bottom_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
        let column_refs = column_refs.clone();
        Effect::new(move |_| {
            let mut fx = SectionFx::reveal(footer_ref.get_untracked(), 0.9)
                .target(brand_ref.get_untracked());
            for column in &column_refs {
                fx = fx.target(column.get_untracked());
            }
            let fx = fx.target(bottom_ref.get_untracked());

            let targets = column_refs.len() + 2;
            scroll.add(
                fx.timeline(ScrollTimeline::new().stagger(
                    0..targets,
                    0.1,
                    Tween::of(0)
                        .span(0.5)
                        .from(Pose::new().y(Len::px(12.0)).opacity(0.0))
                        .ease(Ease::CubicOut),
                )),
            );

            scroll.section_ready();
        });
    }

    view! {
        <footer class="footer" node_ref=footer_ref>
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand" node_ref=brand_ref>
                        <a href="#" class="footer-logo">"StudyFlow"</a>
                        <p class="footer-tagline">"Manage. Collaborate. Deliver."</p>
                    </div>

                    {FOOTER_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, (category, links))| {
                            let column_ref = column_refs[i];
                            view! {
                                <div class="footer-column" node_ref=column_ref>
                                    <h4 class="label-uppercase">{*category}</h4>
                                    <ul>
                                        {links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href="#" class="footer-link">{*link}</a>
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

                <div class="footer-bottom" node_ref=bottom_ref>
                    <p class="footer-copyright">"© 2026 StudyFlow. All rights reserved."</p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(icon, label)| {
                                view! {
                                    <a href="#" aria-label=label class="footer-social-link">
                                        <Icon name=icon class="icon-sm" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
