//
// Copyright (c) 2026 Nathan Fiedler
//

//! The `clock` module keeps the displayed time current and settles the
//! greeting for the lifetime of a page view.

use super::timer::{IntervalHandle, Scheduler, TimeSource};
use crate::domain::entities::Greeting;
use chrono::prelude::*;
use log::{debug, trace, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Milliseconds between updates of the displayed time.
pub const TICK_INTERVAL_MS: u32 = 1_000;

///
/// Format the time the way it is shown on the page, e.g. `2:05:09 PM`.
///
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

///
/// Drives the live clock of a page view.
///
/// The greeting is chosen once, when the controller starts, and is not
/// revisited as the time moves on, even across noon or 18:00. The repeating
/// timer is owned by the controller and is released by `stop()` or when the
/// controller is dropped.
///
pub struct ClockController {
    time_source: Rc<dyn TimeSource>,
    scheduler: Rc<dyn Scheduler>,
    current: Rc<RefCell<DateTime<Local>>>,
    greeting: Option<Greeting>,
    handle: Option<IntervalHandle>,
}

impl ClockController {
    /// Construct a stopped controller reading the given clock.
    pub fn new(time_source: Rc<dyn TimeSource>, scheduler: Rc<dyn Scheduler>) -> Self {
        let now = time_source.now();
        Self {
            time_source,
            scheduler,
            current: Rc::new(RefCell::new(now)),
            greeting: None,
            handle: None,
        }
    }

    ///
    /// Settle the greeting from the present hour and begin replacing the
    /// current time once per second, passing each new value to `on_tick`.
    ///
    /// Starting a controller that is already running changes nothing and
    /// returns the greeting chosen the first time.
    ///
    pub fn start<F>(&mut self, mut on_tick: F) -> Greeting
    where
        F: FnMut(DateTime<Local>) + 'static,
    {
        if let Some(greeting) = self.greeting.filter(|_| self.handle.is_some()) {
            warn!("clock already running, ignoring start");
            return greeting;
        }
        let now = self.time_source.now();
        *self.current.borrow_mut() = now;
        let greeting = *self
            .greeting
            .get_or_insert_with(|| Greeting::for_hour(now.hour()));
        let time_source = self.time_source.clone();
        let current = self.current.clone();
        let tick = move || {
            let now = time_source.now();
            trace!("clock tick at {}", now);
            *current.borrow_mut() = now;
            on_tick(now);
        };
        self.handle = Some(self.scheduler.every(TICK_INTERVAL_MS, Box::new(tick)));
        debug!("clock started with greeting {:?}", greeting);
        greeting
    }

    /// Cancel the repeating update, if it is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            debug!("clock stopped");
        }
    }

    /// The greeting settled by `start()`, if it has been called.
    pub fn greeting(&self) -> Option<Greeting> {
        self.greeting
    }

    /// The most recently recorded time.
    pub fn current_time(&self) -> DateTime<Local> {
        *self.current.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for ClockController {
    fn drop(&mut self) {
        self.stop();
    }
}
