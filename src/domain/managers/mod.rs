//
// Copyright (c) 2026 Nathan Fiedler
//
pub mod clock;
pub mod menu;
pub mod timer;
