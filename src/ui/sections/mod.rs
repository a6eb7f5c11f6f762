//! Landing page sections, one module per section.

pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod pricing;
pub mod testimonials;

pub use cta::Cta;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
