//
// Copyright (c) 2026 Nathan Fiedler
//
pub mod greeting;
pub mod motion;

pub use greeting::Greeting;

///
/// Identifier of a glyph shown on the page. The presentation layer decides
/// how each one is drawn.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Icon {
    Home,
    User,
    Settings,
    Menu,
    Close,
    Sparkles,
    Heart,
    Star,
    Coffee,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::User => "user",
            Icon::Settings => "settings",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Sparkles => "sparkles",
            Icon::Heart => "heart",
            Icon::Star => "star",
            Icon::Coffee => "coffee",
        }
    }
}

/// A navigation destination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: Icon,
    /// Target path of the destination.
    pub href: &'static str,
}

/// Destinations offered by the navigation bar, in display order.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Home",
        icon: Icon::Home,
        href: "/",
    },
    NavItem {
        label: "About",
        icon: Icon::User,
        href: "/about",
    },
    NavItem {
        label: "Settings",
        icon: Icon::Settings,
        href: "/settings",
    },
];

/// A card describing one aspect of the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Sparkles,
        title: "Glassmorphic Design",
        description: "Beautiful frosted glass effects",
    },
    Feature {
        icon: Icon::Heart,
        title: "Personalized",
        description: "Made specially for Ismail",
    },
    Feature {
        icon: Icon::Star,
        title: "Interactive",
        description: "Smooth animations and transitions",
    },
];
