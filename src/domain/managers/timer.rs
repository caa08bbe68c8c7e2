//
// Copyright (c) 2026 Nathan Fiedler
//

//! The `timer` module provides the clock and the repeating timers that the
//! page controllers run on, with one implementation backed by the browser
//! and another driven by simulated time.

use chrono::prelude::*;
use gloo::timers::callback::Interval;
use log::trace;
#[cfg(test)]
use mockall::automock;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

///
/// Source of the current wall-clock time.
///
#[cfg_attr(test, automock)]
pub trait TimeSource {
    /// Return the present local time.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

///
/// Ownership of a running repeating timer. The timer stops when the handle
/// is cancelled or dropped, whichever happens first.
///
pub struct IntervalHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl IntervalHandle {
    /// Wrap the routine that stops the underlying timer.
    pub fn new<F: FnOnce() + 'static>(release: F) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Stop the timer now.
    pub fn cancel(mut self) {
        self.release_timer();
    }

    fn release_timer(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.release_timer();
    }
}

///
/// Starts repeating timers.
///
pub trait Scheduler {
    /// Invoke `callback` every `period_ms` milliseconds until the returned
    /// handle is released. The first call happens one period from now.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> IntervalHandle;
}

/// Uses `setInterval` from the browser window; no drift correction.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> IntervalHandle {
        let interval = Interval::new(period_ms, move || callback());
        // dropping the gloo interval clears it
        IntervalHandle::new(move || drop(interval))
    }
}

struct SimulatedTimer {
    id: u64,
    period_ms: u64,
    next_fire_ms: u64,
    // taken out while the callback runs
    callback: Option<Box<dyn FnMut()>>,
}

struct SimulatedInner {
    origin: DateTime<Local>,
    elapsed_ms: u64,
    timers: Vec<SimulatedTimer>,
    next_id: u64,
}

///
/// Clock and scheduler whose time only moves when `advance()` is called.
/// Clones share the same simulated time and timers.
///
#[derive(Clone)]
pub struct SimulatedClock {
    inner: Rc<RefCell<SimulatedInner>>,
}

impl SimulatedClock {
    /// Construct a clock that reads `origin` until it is advanced.
    pub fn new(origin: DateTime<Local>) -> Self {
        let inner = SimulatedInner {
            origin,
            elapsed_ms: 0,
            timers: Vec::new(),
            next_id: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Milliseconds of simulated time since construction.
    pub fn elapsed_ms(&self) -> u64 {
        self.inner.borrow().elapsed_ms
    }

    /// Number of timers that have not been released.
    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    ///
    /// Move simulated time forward, firing every timer that comes due along
    /// the way in chronological order. While a callback runs, `now()` reads
    /// the instant at which that timer was due.
    ///
    pub fn advance(&self, millis: u64) {
        let target = self.inner.borrow().elapsed_ms + millis;
        loop {
            let due = {
                let inner = self.inner.borrow();
                inner
                    .timers
                    .iter()
                    .filter(|t| t.next_fire_ms <= target)
                    .min_by_key(|t| (t.next_fire_ms, t.id))
                    .map(|t| t.id)
            };
            let Some(id) = due else {
                break;
            };
            let callback = {
                let mut inner = self.inner.borrow_mut();
                let mut fire_at = None;
                let mut callback = None;
                if let Some(timer) = inner.timers.iter_mut().find(|t| t.id == id) {
                    fire_at = Some(timer.next_fire_ms);
                    timer.next_fire_ms += timer.period_ms;
                    callback = timer.callback.take();
                }
                if let Some(at) = fire_at {
                    inner.elapsed_ms = at;
                }
                callback
            };
            if let Some(mut callback) = callback {
                trace!("simulated timer {} fired", id);
                callback();
                // put it back unless the timer was released by the callback
                let mut inner = self.inner.borrow_mut();
                if let Some(timer) = inner.timers.iter_mut().find(|t| t.id == id) {
                    timer.callback = Some(callback);
                }
            }
        }
        self.inner.borrow_mut().elapsed_ms = target;
    }
}

impl TimeSource for SimulatedClock {
    fn now(&self) -> DateTime<Local> {
        let inner = self.inner.borrow();
        inner.origin + chrono::Duration::milliseconds(inner.elapsed_ms as i64)
    }
}

impl Scheduler for SimulatedClock {
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> IntervalHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        // a zero period would never let time move forward
        let period_ms = u64::from(period_ms.max(1));
        let next_fire_ms = inner.elapsed_ms + period_ms;
        inner.timers.push(SimulatedTimer {
            id,
            period_ms,
            next_fire_ms,
            callback: Some(callback),
        });
        let weak: Weak<RefCell<SimulatedInner>> = Rc::downgrade(&self.inner);
        IntervalHandle::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().timers.retain(|t| t.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn origin() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_simulated_now_advances() {
        let clock = SimulatedClock::new(origin());
        assert_eq!(clock.now(), origin());
        clock.advance(1500);
        assert_eq!(clock.elapsed_ms(), 1500);
        assert_eq!(clock.now(), origin() + chrono::Duration::milliseconds(1500));
    }

    #[test]
    fn test_simulated_timer_fires_each_period() {
        // arrange
        let clock = SimulatedClock::new(origin());
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let _handle = clock.every(1000, Box::new(move || counter.set(counter.get() + 1)));
        // act
        clock.advance(999);
        assert_eq!(count.get(), 0);
        clock.advance(1);
        assert_eq!(count.get(), 1);
        clock.advance(3500);
        // assert
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_simulated_now_during_callback() {
        let clock = SimulatedClock::new(origin());
        let seen: Rc<RefCell<Vec<DateTime<Local>>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_cb = seen.clone();
        let reader = clock.clone();
        let _handle = clock.every(1000, Box::new(move || seen_cb.borrow_mut().push(reader.now())));
        clock.advance(2500);
        let expected = vec![
            origin() + chrono::Duration::seconds(1),
            origin() + chrono::Duration::seconds(2),
        ];
        assert_eq!(*seen.borrow(), expected);
        assert_eq!(clock.now(), origin() + chrono::Duration::milliseconds(2500));
    }

    #[test]
    fn test_cancel_releases_timer() {
        let clock = SimulatedClock::new(origin());
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let handle = clock.every(1000, Box::new(move || counter.set(counter.get() + 1)));
        clock.advance(1000);
        assert_eq!(clock.active_timers(), 1);
        handle.cancel();
        assert_eq!(clock.active_timers(), 0);
        clock.advance(5000);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_releases_timer() {
        let clock = SimulatedClock::new(origin());
        {
            let _handle = clock.every(1000, Box::new(|| {}));
            assert_eq!(clock.active_timers(), 1);
        }
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn test_timers_fire_in_order() {
        let clock = SimulatedClock::new(origin());
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let slow_log = log.clone();
        let fast_log = log.clone();
        let _slow = clock.every(300, Box::new(move || slow_log.borrow_mut().push("slow")));
        let _fast = clock.every(200, Box::new(move || fast_log.borrow_mut().push("fast")));
        clock.advance(600);
        // at 600 both are due; the earlier registration goes first
        assert_eq!(*log.borrow(), vec!["fast", "slow", "fast", "slow", "fast"]);
    }

    #[test]
    fn test_mock_time_source() {
        let mut mock = MockTimeSource::new();
        mock.expect_now().times(1).returning(origin);
        assert_eq!(mock.now().hour(), 9);
    }
}
