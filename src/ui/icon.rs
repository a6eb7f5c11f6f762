use leptos::prelude::*;

/// Inline SVG icon, stroked with the current text color. Filled variants
/// (the rating stars) opt in through an `icon-filled` class.
#[component]
pub fn Icon(
    /// Icon name from the `icons` module
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon_path(name) />
        </svg>
    }
}

fn icon_path(name: &'static str) -> &'static str {
    match name {
        "arrow-right" => "M5 12h14M12 5l7 7-7 7",
        "play" => "m6 3 14 9-14 9V3z",
        "sun" => "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
        "moon" => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z",
        "menu" => "M4 6h16M4 12h16M4 18h16",
        "x" => "M18 6 6 18M6 6l12 12",
        "chevron-down" => "m6 9 6 6 6-6",
        "check" => "M20 6 9 17l-5-5",
        "star" => "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        "layout" => "M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5ZM3 9h18M9 21V9",
        "calendar" => "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
        "folder" => "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z",
        "message-square" => "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
        "flag" => "M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1zM4 22v-7",
        "download" => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
        "users" => "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
        "git-branch" => "M6 3v12M6 15a3 3 0 1 0 0 6 3 3 0 0 0 0-6M18 3a3 3 0 1 0 0 6 3 3 0 0 0 0-6M18 9a9 9 0 0 1-9 9",
        "bar-chart" => "M12 20V10M18 20V4M6 20v-4",
        "twitter" => "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        "instagram" => "M17 2H7a5 5 0 0 0-5 5v10a5 5 0 0 0 5 5h10a5 5 0 0 0 5-5V7a5 5 0 0 0-5-5ZM16 11.37a4 4 0 1 1-7.91 1.26 4 4 0 0 1 7.91-1.26ZM17.5 6.5h.01",
        "linkedin" => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4V8h4v1.5A6 6 0 0 1 16 8ZM6 9H2v12h4zM4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const PLAY: &str = "play";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHECK: &str = "check";
    pub const STAR: &str = "star";
    pub const LAYOUT: &str = "layout";
    pub const CALENDAR: &str = "calendar";
    pub const FOLDER: &str = "folder";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const FLAG: &str = "flag";
    pub const DOWNLOAD: &str = "download";
    pub const USERS: &str = "users";
    pub const GIT_BRANCH: &str = "git-branch";
    pub const BAR_CHART: &str = "bar-chart";
    pub const TWITTER: &str = "twitter";
    pub const INSTAGRAM: &str = "instagram";
    pub const LINKEDIN: &str = "linkedin";
}
