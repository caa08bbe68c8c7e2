//
// Copyright (c) 2026 Nathan Fiedler
//
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

mod home;
mod icon;
mod layout;
mod nav;

use layout::Layout;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/glassmorphism.css" />
        <Stylesheet href="/assets/fontawesome/css/all.min.css" />
        <Title text="Hello Ismail" />
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("") view=home::HomePage />
            </Routes>
        </Router>
    }
}

/// 404 - Not Found
#[component]
fn NotFound() -> impl IntoView {
    // The status code can only be set during the initial server-side render;
    // client-side navigation to a missing page leaves it untouched.
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Layout>
            <section class="not-found">
                <div class="glass-card">
                    <h1 class="not-found-title">Page not found</h1>
                    <p class="not-found-text">Try using the navigation options above.</p>
                </div>
            </section>
        </Layout>
    }
}
