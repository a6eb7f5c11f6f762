//! Landing page composition.
//!
//! Provides the scroll choreography context scoped to this view, renders
//! the navbar and every marketing section, and carries the SEO meta tags.
//! Each section registers its own scroll effects; the expected-section
//! count below is what the snap coordinator waits for before installing
//! the global snap rule.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::navbar::Navbar;
use crate::ui::scroll::provide_scroll_context;
use crate::ui::sections::{Cta, Faq, Features, Footer, Hero, HowItWorks, Pricing, Testimonials};

/// Sections that report registration completion: hero, features,
/// how-it-works, testimonials, pricing, faq, cta, footer.
const SECTION_COUNT: usize = 8;

/// Landing page with scroll-driven choreography
#[component]
pub fn LandingPage() -> impl IntoView {
    let _scroll = provide_scroll_context(SECTION_COUNT);

    view! {
        <SeoMeta />

        <div class="page">
            // Film-grain overlay above everything
            <div class="grain-overlay" aria-hidden="true"></div>

            <Navbar />

            <main class="page-main">
                <Hero />
                <Features />
                <HowItWorks />
                <Testimonials />
                <Pricing />
                <Faq />
                <Cta />
                <Footer />
            </main>
        </div>
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="StudyFlow - Student Project Management" />

        <Meta
            name="description"
            content="The student project platform that keeps your team aligned from first idea to final submission. Task boards, deadlines, file hub, and team chat in one place."
        />
        <Meta
            name="keywords"
            content="student projects, project management, task boards, group work, coursework, collaboration, deadlines"
        />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://studyflow.app/" />
        <Meta property="og:title" content="StudyFlow - Manage. Collaborate. Deliver." />
        <Meta
            property="og:description"
            content="The student project platform that keeps your team aligned from first idea to final submission."
        />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="StudyFlow - Manage. Collaborate. Deliver." />
        <Meta
            property="twitter:description"
            content="Plan smarter, stress less, and deliver on time."
        />

        <Link rel="canonical" href="https://studyflow.app/" />

        // Display font for headlines
        <Link rel="preconnect" href="https://fonts.googleapis.com" />
        <Link
            rel="stylesheet"
            href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap"
        />
    }
}
