//
// Copyright (c) 2026 Nathan Fiedler
//
use chrono::prelude::*;
use glassmorphism::domain::entities::Greeting;
use glassmorphism::domain::managers::clock::{format_time, ClockController};
use glassmorphism::domain::managers::menu::{MenuState, MenuToggle};
use glassmorphism::domain::managers::timer::SimulatedClock;
use std::cell::RefCell;
use std::rc::Rc;

fn morning() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 14, 9, 0, 0)
        .single()
        .expect("unambiguous local time")
}

//
// Mount the page at nine in the morning and let the clock run into the
// afternoon; the displayed time keeps up while the greeting stays put.
//
#[test]
fn test_greeting_fixed_while_time_moves_on() {
    // arrange
    let clock = SimulatedClock::new(morning());
    let mut controller = ClockController::new(Rc::new(clock.clone()), Rc::new(clock.clone()));
    let displayed: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let display = displayed.clone();
    // act
    let greeting = controller.start(move |now| display.borrow_mut().push(format_time(&now)));
    assert_eq!(greeting, Greeting::Morning);
    clock.advance(5 * 3_600_000);
    // assert
    assert_eq!(controller.current_time().hour(), 14);
    assert_eq!(controller.greeting(), Some(Greeting::Morning));
    let displayed = displayed.borrow();
    assert_eq!(displayed.len(), 5 * 3_600);
    assert_eq!(displayed[0], "9:00:01 AM");
    assert_eq!(displayed[displayed.len() - 1], "2:00:00 PM");
}

//
// Five simulated seconds produce exactly five updates, each carrying the
// simulated time of its tick.
//
#[test]
fn test_five_seconds_five_updates() {
    let clock = SimulatedClock::new(morning());
    let mut controller = ClockController::new(Rc::new(clock.clone()), Rc::new(clock.clone()));
    let ticks: Rc<RefCell<Vec<(u64, DateTime<Local>)>>> = Rc::new(RefCell::new(Vec::new()));
    let recorder = ticks.clone();
    let observer = clock.clone();
    controller.start(move |now| recorder.borrow_mut().push((observer.elapsed_ms(), now)));
    clock.advance(5000);
    let ticks = ticks.borrow();
    assert_eq!(ticks.len(), 5);
    for (idx, (elapsed, now)) in ticks.iter().enumerate() {
        let expected_ms = (idx as u64 + 1) * 1000;
        assert_eq!(*elapsed, expected_ms, "index: {}", idx);
        assert_eq!(
            *now,
            morning() + chrono::Duration::milliseconds(expected_ms as i64),
            "index: {}",
            idx
        );
    }
}

//
// Tearing down the view releases the timer on every path out of scope.
//
#[test]
fn test_unmount_releases_timer() {
    let clock = SimulatedClock::new(morning());
    let mut controller = ClockController::new(Rc::new(clock.clone()), Rc::new(clock.clone()));
    controller.start(|_| {});
    assert_eq!(clock.active_timers(), 1);
    drop(controller);
    assert_eq!(clock.active_timers(), 0);
    // time may keep moving without anything firing
    clock.advance(10_000);
    assert_eq!(clock.active_timers(), 0);
}

#[test]
fn test_menu_toggle_toggle_close() {
    let mut menu = MenuToggle::new();
    assert_eq!(menu.state(), MenuState::Closed);
    menu.toggle();
    assert_eq!(menu.state(), MenuState::Open);
    menu.toggle();
    menu.close();
    assert_eq!(menu.state(), MenuState::Closed);
    // choosing a destination from the open panel dismisses it
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}
