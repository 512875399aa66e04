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

//! Input handling for the search field.
//!
//! While the field is focused it consumes all key events: Enter submits the
//! buffer as a query event, Esc blurs, and everything else is delegated to
//! the managed input component.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{actions::events::AppEvent, components::SearchBar};

impl SearchBar {
    /// Routes a terminal event to the search field.
    ///
    /// Returns `true` when the event was consumed. Submission sends the raw,
    /// untrimmed buffer; the emptiness check downstream is defined on the
    /// raw value.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        if !self.is_focused() {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Esc => {
                self.blur();
                Ok(true)
            }

            KeyCode::Enter => {
                let raw = self.input.value().to_string();
                event_tx.send(AppEvent::SubmitQuery(raw))?;
                self.blur();
                Ok(true)
            }

            _ => {
                self.input.handle_event(event);
                Ok(true)
            }
        }
    }
}
