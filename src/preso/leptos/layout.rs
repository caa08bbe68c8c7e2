//
// Copyright (c) 2026 Nathan Fiedler
//
use super::nav::NavBar;
use crate::domain::entities::motion::{BLOB, FOOTER_ENTER, FOOTER_TEXT};
use leptos::prelude::*;

/// Page chrome shared by every route: backdrop, navigation, and footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="backdrop">
            <div class="blob-field">
                <div class="blob blob-purple" style=BLOB.to_css()></div>
                <div class="blob blob-blue" style=BLOB.delayed(2.0).to_css()></div>
                <div class="blob blob-indigo" style=BLOB.delayed(4.0).to_css()></div>
            </div>
            <NavBar />
            <main class="page-main">{children()}</main>
            <footer class="page-footer" style=FOOTER_ENTER.to_css()>
                <div class="container">
                    <div class="glass-panel glass-faint">
                        <p class="footer-text" style=FOOTER_TEXT.to_css()>
                            "© 2024 Glassmorphism Hello Ismail. Crafted with ❤️ and modern web technologies."
                        </p>
                    </div>
                </div>
            </footer>
        </div>
    }
}
