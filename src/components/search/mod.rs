// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Search input field.
//!
//! This module manages the query text box at the top of the screen, wrapping
//! a `tui-input` component with focus state. Submitting hands the raw buffer
//! to the application; the field keeps its text so the query stays visible
//! while results load.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    focused: bool,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            focused: false,
        }
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focused
    }
}
