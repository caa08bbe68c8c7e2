//
// Copyright (c) 2026 Nathan Fiedler
//
use super::icon::Glyph;
use super::layout::Layout;
use crate::domain::entities::motion::{
    CONTAINER_ENTER, FLOATING, HOVER_SPRING, ITEM_ENTER, PULSE, SHIMMER, WIGGLE,
};
use crate::domain::entities::{Greeting, Icon, FEATURES};
use crate::domain::managers::clock::{format_time, ClockController};
use crate::domain::managers::timer::{BrowserScheduler, LocalTime, TimeSource};
use chrono::prelude::*;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::rc::Rc;

// Entrance style of the index-th child of the content container.
fn item_style(index: usize) -> String {
    ITEM_ENTER
        .delayed(CONTAINER_ENTER.transition.stagger_delay(index))
        .to_css()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let current_time: RwSignal<DateTime<Local>> = RwSignal::new(LocalTime.now());
    let greeting: RwSignal<Option<Greeting>> = RwSignal::new(None);

    // effects only run in the browser, so the timer never starts on the server
    Effect::new(move |_| {
        let mut controller = ClockController::new(Rc::new(LocalTime), Rc::new(BrowserScheduler));
        let settled = controller.start(move |now| current_time.set(now));
        greeting.set(Some(settled));
        current_time.set(controller.current_time());
        let controller = SendWrapper::new(controller);
        on_cleanup(move || {
            let mut controller = controller.take();
            controller.stop();
        });
    });

    let features = FEATURES
        .into_iter()
        .map(|feature| {
            view! {
                <div class="feature-card hover-rise" style=HOVER_SPRING.to_css("transform")>
                    <div class="glass-card card-feature">
                        <Glyph icon=feature.icon class="icon-lg text-blue feature-icon" />
                        <h3 class="feature-title">{feature.title}</h3>
                        <p class="feature-desc">{feature.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Layout>
            <div class="home">
                <div class="float-field">
                    <div class="float-shape float-purple" style=FLOATING.to_css()></div>
                    <div class="float-shape float-blue" style=FLOATING.delayed(1.0).to_css()></div>
                    <div class="float-shape float-green" style=FLOATING.delayed(2.0).to_css()></div>
                </div>
                <div class="home-content">
                    <div class="home-stack" style=CONTAINER_ENTER.to_css()>
                        <div style=item_style(0)>
                            <div class="glass-card card-hero">
                                <div class="badge-row" style=WIGGLE.to_css()>
                                    <Glyph icon=Icon::Sparkles class="icon-xl text-yellow" />
                                    <span class="badge">
                                        {move || greeting.get().map(|g| g.as_str()).unwrap_or_default()}
                                    </span>
                                    <Glyph icon=Icon::Sparkles class="icon-xl text-yellow" />
                                </div>
                                <h1 class="hero-title" style=PULSE.to_css()>
                                    "Hello Ismail"
                                </h1>
                                <div class="welcome-row" style=SHIMMER.to_css()>
                                    <Glyph icon=Icon::Heart class="icon-md text-red" />
                                    <p class="welcome-text">"Welcome to your glassmorphic world"</p>
                                    <Glyph icon=Icon::Heart class="icon-md text-red" />
                                </div>
                            </div>
                        </div>
                        <div style=item_style(1)>
                            <div class="glass-card card-time">
                                <Glyph icon=Icon::Coffee class="icon-sm text-amber" />
                                <p class="time-text">{move || format_time(&current_time.get())}</p>
                                <Glyph icon=Icon::Star class="icon-sm text-yellow" />
                            </div>
                        </div>
                        <div class="button-row" style=item_style(2)>
                            <button class="btn btn-primary hover-grow tap-shrink">
                                <Glyph icon=Icon::Sparkles class="btn-icon" />
                                "Explore Magic"
                            </button>
                            <button class="btn btn-outline hover-grow tap-shrink">
                                <Glyph icon=Icon::Star class="btn-icon" />
                                "Discover More"
                            </button>
                        </div>
                        <div class="feature-grid" style=item_style(3)>
                            {features}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_style_staggered() {
        assert_eq!(item_style(0), "animation: rise-in 0.6s ease-out 0s 1 backwards;");
        assert_eq!(item_style(3), "animation: rise-in 0.6s ease-out 0.6s 1 backwards;");
    }
}
