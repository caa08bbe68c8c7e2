//
// Copyright (c) 2026 Nathan Fiedler
//

//! Immutable animation settings that the presentation layer turns into CSS.
//!
//! A shared preset is never modified in place; per-instance variations are
//! produced with [`Transition::merge`] or [`Animation::delayed`].

/// Timing function applied to an animation or transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Overshooting curve standing in for a physical spring.
    Spring { stiffness: u32 },
}

impl Easing {
    /// Return the CSS timing function for this easing.
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".into(),
            Easing::EaseIn => "ease-in".into(),
            Easing::EaseOut => "ease-out".into(),
            Easing::EaseInOut => "ease-in-out".into(),
            Easing::Spring { stiffness } => {
                // stiffer springs overshoot more
                let overshoot = 1.0 + (*stiffness).min(1000) as f64 / 500.0;
                format!("cubic-bezier(0.34, {}, 0.64, 1)", round_millis(overshoot))
            }
        }
    }
}

/// How many times an animation runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Repeat {
    Once,
    Forever,
}

///
/// Timing of an animation: how long it runs, when it begins, its easing, how
/// often it repeats, and the delay between successive children.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Length of one iteration in seconds.
    pub duration: f64,
    /// Seconds to wait before starting.
    pub delay: f64,
    pub ease: Easing,
    pub repeat: Repeat,
    /// Seconds between the start of each child animation.
    pub stagger_children: f64,
}

///
/// Selective replacement of `Transition` fields. Fields set to `None` keep
/// the value of the base transition.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionOverride {
    pub duration: Option<f64>,
    pub delay: Option<f64>,
    pub ease: Option<Easing>,
    pub repeat: Option<Repeat>,
}

impl TransitionOverride {
    /// Override that changes only the delay.
    pub fn delay(secs: f64) -> Self {
        Self {
            delay: Some(secs),
            ..Default::default()
        }
    }
}

impl Transition {
    /// Construct a single, undelayed, ease-out transition of the given length.
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Easing::EaseOut,
            repeat: Repeat::Once,
            stagger_children: 0.0,
        }
    }

    pub const fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    pub const fn stagger(mut self, stagger_children: f64) -> Self {
        self.stagger_children = stagger_children;
        self
    }

    /// Produce a new transition with the fields of `overrides` applied.
    pub fn merge(&self, overrides: &TransitionOverride) -> Self {
        Self {
            duration: overrides.duration.unwrap_or(self.duration),
            delay: overrides.delay.unwrap_or(self.delay),
            ease: overrides.ease.unwrap_or(self.ease),
            repeat: overrides.repeat.unwrap_or(self.repeat),
            stagger_children: self.stagger_children,
        }
    }

    /// Delay in seconds of the child at the given position.
    pub fn stagger_delay(&self, index: usize) -> f64 {
        self.delay + self.stagger_children * index as f64
    }

    /// Render a CSS `transition` declaration for the named property.
    pub fn to_css(&self, property: &str) -> String {
        format!(
            "transition: {} {}s {} {}s;",
            property,
            round_millis(self.duration),
            self.ease.css(),
            round_millis(self.delay)
        )
    }
}

/// Named keyframe sequences defined in the stylesheet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Keyframes {
    /// Drift vertically from -10px to 10px and back.
    Float,
    /// Rotate 0, 5, -5, 0 degrees.
    Wiggle,
    /// Scale 1, 1.02, 1.
    Pulse,
    /// Opacity 0.7, 1, 0.7.
    Shimmer,
    /// Fade in while rising 50px.
    FadeUp,
    /// Fade in while rising 30px.
    RiseIn,
    /// Fade in while dropping 100px from above.
    SlideDown,
    /// Fade in while rising 100px from below.
    SlideUp,
    FadeIn,
    /// Fade in while dropping 20px.
    DropIn,
    /// Wander and resize the large background blobs.
    Blob,
}

impl Keyframes {
    pub fn name(&self) -> &'static str {
        match self {
            Keyframes::Float => "float",
            Keyframes::Wiggle => "wiggle",
            Keyframes::Pulse => "pulse-scale",
            Keyframes::Shimmer => "shimmer",
            Keyframes::FadeUp => "fade-up",
            Keyframes::RiseIn => "rise-in",
            Keyframes::SlideDown => "slide-down",
            Keyframes::SlideUp => "slide-up",
            Keyframes::FadeIn => "fade-in",
            Keyframes::DropIn => "drop-in",
            Keyframes::Blob => "blob",
        }
    }
}

/// A keyframe sequence together with its timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub keyframes: Keyframes,
    pub transition: Transition,
}

impl Animation {
    pub const fn new(keyframes: Keyframes, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    /// Return a copy with the given transition fields replaced.
    pub fn with_override(&self, overrides: &TransitionOverride) -> Self {
        Self {
            keyframes: self.keyframes,
            transition: self.transition.merge(overrides),
        }
    }

    /// Return a copy that starts after the given number of seconds.
    pub fn delayed(&self, secs: f64) -> Self {
        self.with_override(&TransitionOverride::delay(secs))
    }

    /// Render a CSS `animation` declaration.
    pub fn to_css(&self) -> String {
        let count = match self.transition.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        };
        format!(
            "animation: {} {}s {} {}s {} backwards;",
            self.keyframes.name(),
            round_millis(self.transition.duration),
            self.transition.ease.css(),
            round_millis(self.transition.delay),
            count
        )
    }
}

// Drop floating point noise below a millisecond (e.g. 0.30000000000000004).
fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

/// Vertical bobbing shared by the floating background shapes.
pub const FLOATING: Animation = Animation::new(
    Keyframes::Float,
    Transition::new(3.0).ease(Easing::EaseInOut).repeat_forever(),
);

/// Gentle rocking of the sparkles around the greeting badge.
pub const WIGGLE: Animation = Animation::new(
    Keyframes::Wiggle,
    Transition::new(2.0).ease(Easing::EaseInOut).repeat_forever(),
);

/// Breathing effect on the main heading.
pub const PULSE: Animation = Animation::new(
    Keyframes::Pulse,
    Transition::new(2.0).ease(Easing::EaseInOut).repeat_forever(),
);

/// Fading in and out of the welcome line.
pub const SHIMMER: Animation = Animation::new(
    Keyframes::Shimmer,
    Transition::new(2.0).ease(Easing::EaseInOut).repeat_forever(),
);

/// Entrance of the page content container; children follow 0.2s apart.
pub const CONTAINER_ENTER: Animation =
    Animation::new(Keyframes::FadeUp, Transition::new(0.8).stagger(0.2));

/// Entrance of each child of the content container.
pub const ITEM_ENTER: Animation = Animation::new(Keyframes::RiseIn, Transition::new(0.6));

pub const NAV_ENTER: Animation = Animation::new(Keyframes::SlideDown, Transition::new(0.8));

pub const FOOTER_ENTER: Animation =
    Animation::new(Keyframes::SlideUp, Transition::new(0.8).delay(0.2));

pub const FOOTER_TEXT: Animation =
    Animation::new(Keyframes::FadeIn, Transition::new(0.3).delay(0.5));

/// Entrance of the desktop navigation links, 0.1s apart.
pub const NAV_LINK_ENTER: Animation =
    Animation::new(Keyframes::DropIn, Transition::new(0.3).stagger(0.1));

/// Large blurred shapes behind the layout, offset by 2s each.
pub const BLOB: Animation = Animation::new(
    Keyframes::Blob,
    Transition::new(7.0).ease(Easing::EaseInOut).repeat_forever(),
);

/// Expanding and collapsing of the mobile navigation panel.
pub const MOBILE_PANEL: Transition = Transition::new(0.3).ease(Easing::EaseInOut);

/// Appearance of the mobile navigation links, 0.1s apart.
pub const MOBILE_LINK: Transition = Transition::new(0.3).stagger(0.1);

/// Lift of the feature cards on hover.
pub const HOVER_SPRING: Transition =
    Transition::new(0.3).ease(Easing::Spring { stiffness: 300 });
