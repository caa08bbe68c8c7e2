//
// Copyright (c) 2026 Nathan Fiedler
//
use crate::domain::entities::Icon;
use leptos::prelude::*;

/// Font Awesome classes that draw the given icon.
pub fn icon_class(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "fa-solid fa-house",
        Icon::User => "fa-solid fa-user",
        Icon::Settings => "fa-solid fa-gear",
        Icon::Menu => "fa-solid fa-bars",
        Icon::Close => "fa-solid fa-xmark",
        Icon::Sparkles => "fa-solid fa-wand-magic-sparkles",
        Icon::Heart => "fa-solid fa-heart",
        Icon::Star => "fa-solid fa-star",
        Icon::Coffee => "fa-solid fa-mug-hot",
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    let classes = if class.is_empty() {
        icon_class(icon).to_owned()
    } else {
        format!("{} {}", icon_class(icon), class)
    };
    view! { <i class=classes data-icon=icon.name() aria-hidden="true"></i> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_class() {
        assert_eq!(icon_class(Icon::Home), "fa-solid fa-house");
        assert_eq!(icon_class(Icon::Close), "fa-solid fa-xmark");
        assert_eq!(icon_class(Icon::Coffee), "fa-solid fa-mug-hot");
    }
}
