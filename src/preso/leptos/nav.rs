//
// Copyright (c) 2026 Nathan Fiedler
//
use super::icon::Glyph;
use crate::domain::entities::motion::{MOBILE_LINK, MOBILE_PANEL, NAV_ENTER, NAV_LINK_ENTER};
use crate::domain::entities::{Icon, NAV_ITEMS};
use crate::domain::managers::menu::MenuToggle;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::on_click_outside;

#[component]
pub fn NavBar() -> impl IntoView {
    let menu = RwSignal::new(MenuToggle::new());
    let nav_ref: NodeRef<Div> = NodeRef::new();
    let _ = on_click_outside(nav_ref, move |_| menu.update(|m| m.close()));

    let desktop_links = NAV_ITEMS
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let delay = NAV_LINK_ENTER.transition.stagger_delay(index);
            view! {
                <a
                    class="nav-link hover-lift tap-shrink"
                    href=item.href
                    style=NAV_LINK_ENTER.delayed(delay).to_css()
                >
                    <Glyph icon=item.icon />
                    <span>{item.label}</span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .into_iter()
        .enumerate()
        .map(move |(index, item)| {
            let timing = MOBILE_LINK.delay(MOBILE_LINK.stagger_delay(index));
            view! {
                <a
                    class="nav-mobile-link hover-nudge"
                    href=item.href
                    style=timing.to_css("all")
                    on:click=move |_| menu.update(|m| m.close())
                >
                    <Glyph icon=item.icon />
                    <span>{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav
            class="nav-shell"
            role="navigation"
            aria-label="main navigation"
            style=NAV_ENTER.to_css()
        >
            <div class="container" node_ref=nav_ref>
                <div class="glass-panel">
                    <div class="nav-inner">
                        <div class="nav-row">
                            <a class="nav-brand hover-grow" href="/">
                                Glassmorphism
                            </a>
                            <div class="nav-desktop">{desktop_links}</div>
                            <button
                                class="nav-burger hover-grow tap-shrink"
                                aria-label="menu"
                                aria-expanded=move || menu.get().is_open().to_string()
                                on:click=move |_| menu.update(|m| m.toggle())
                            >
                                {move || {
                                    let icon = if menu.get().is_open() {
                                        Icon::Close
                                    } else {
                                        Icon::Menu
                                    };
                                    view! { <Glyph icon=icon class="icon-lg" /> }
                                }}
                            </button>
                        </div>
                        <div
                            class="nav-mobile"
                            class:is-open=move || menu.get().is_open()
                            style=MOBILE_PANEL.to_css("all")
                        >
                            <div class="nav-mobile-list">{mobile_links}</div>
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
