//
// Copyright (c) 2026 Nathan Fiedler
//
use log::debug;

/// Visibility of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

///
/// Tracks whether the mobile navigation panel is expanded. Starts closed;
/// `toggle()` flips it and `close()` always leaves it closed.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MenuToggle {
    state: MenuState,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        debug!("menu toggled to {:?}", self.state);
    }

    /// Collapse the panel, as when a destination has been chosen.
    pub fn close(&mut self) {
        if self.state == MenuState::Open {
            debug!("menu closed");
        }
        self.state = MenuState::Closed;
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MenuToggle::new();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Open);
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_close_from_either_state() {
        let mut menu = MenuToggle::new();
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_toggle_close() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        menu.toggle();
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
    }
}
