pub mod icon;
pub mod landing;
pub mod navbar;
pub mod scroll;
pub mod sections;
pub mod theme;

pub use icon::{Icon, icons};
pub use landing::LandingPage;
pub use navbar::Navbar;
pub use theme::{ThemeMode, provide_theme_context, use_theme_context};
