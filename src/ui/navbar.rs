//! Fixed navigation bar.
//!
//! Knows the section anchors and the theme toggle, nothing about pinning
//! or snapping — its only interaction with the scroll layer is
//! [`scroll_to_anchor`].

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;
use crate::ui::theme::use_theme_context;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "features"),
    ("How It Works", "how-it-works"),
    ("Testimonials", "testimonials"),
    ("Pricing", "pricing"),
];

/// External "Get Started" destination; the page's only outbound call to
/// action.
pub const CONTACT_URL: &str =
    "https://wa.me/917041559836?text=Hi!%20I%20would%20like%20to%20estimate%20my%20project%20cost.";

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme_context();
    let (is_scrolled, set_is_scrolled) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    let logo_ref = NodeRef::<html::Div>::new();
    let links_ref = NodeRef::<html::Div>::new();
    let cta_ref = NodeRef::<html::Div>::new();

    // Toggle the backdrop once the page scrolls past the hero's first pixels
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let handler = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let scrolled = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0)
                    > 50.0;
                set_is_scrolled.set(scrolled);
            }) as Box<dyn FnMut(web_sys::Event)>);

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                handler.as_ref().unchecked_ref(),
                &options,
            );
            // The navbar lives for the whole page; keep the closure alive
            handler.forget();
        });
    }

    // Entrance animation
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Ease, Len, Pose, ScrollTimeline, Tween};
        use crate::ui::scroll::{SectionFx, use_scroll_context};

        let scroll = use_scroll_context();
        Effect::new(move |_| {
            scroll.play_intro(
                SectionFx::intro()
                    .target(logo_ref.get_untracked())
                    .target(links_ref.get_untracked())
                    .target(cta_ref.get_untracked())
                    .timeline(
                        ScrollTimeline::new()
                            .with(
                                Tween::of(0)
                                    .span(0.6)
                                    .from(Pose::new().y(Len::px(-20.0)).opacity(0.0))
                                    .ease(Ease::CubicOut),
                            )
                            .with(
                                Tween::of(1)
                                    .at(0.1)
                                    .span(0.5)
                                    .from(Pose::new().y(Len::px(-15.0)).opacity(0.0))
                                    .ease(Ease::CubicOut),
                            )
                            .with(
                                Tween::of(2)
                                    .at(0.3)
                                    .span(0.5)
                                    .from(Pose::new().y(Len::px(-15.0)).opacity(0.0))
                                    .ease(Ease::CubicOut),
                            ),
                    ),
            );
        });
    }

    let nav_to = move |anchor: &'static str| {
        move |_| {
            scroll_to_anchor(anchor);
            set_mobile_menu_open.set(false);
        }
    };

    view! {
        <nav class="navbar" class:navbar-scrolled=move || is_scrolled.get()>
            <div class="navbar-inner">
                <div class="navbar-logo" node_ref=logo_ref>
                    <a href="#" class="navbar-brand">"StudyFlow"</a>
                </div>

                // Desktop navigation
                <div class="navbar-links" node_ref=links_ref>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, anchor)| {
                            view! {
                                <button class="navbar-link" on:click=nav_to(anchor)>
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar-actions" node_ref=cta_ref>
                    <button
                        class="navbar-theme-toggle"
                        on:click=move |_| theme.toggle()
                        aria-label="Toggle theme"
                    >
                        {move || {
                            if theme.is_dark.get() {
                                view! { <Icon name=icons::SUN class="icon" /> }
                            } else {
                                view! { <Icon name=icons::MOON class="icon" /> }
                            }
                        }}
                    </button>

                    <a
                        href=CONTACT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-primary navbar-cta"
                    >
                        "Get Started"
                    </a>

                    <button
                        class="navbar-menu-toggle"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="icon" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="icon" /> }
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>

        // Mobile fullscreen menu
        <div class="mobile-menu" class:mobile-menu-open=move || mobile_menu_open.get()>
            <div class="mobile-menu-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, anchor)| {
                        view! {
                            <button class="mobile-menu-link" on:click=nav_to(anchor)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
                <button class="btn-primary mobile-menu-cta" on:click=nav_to("pricing")>
                    "Get Started"
                </button>
            </div>
        </div>
    }
}
