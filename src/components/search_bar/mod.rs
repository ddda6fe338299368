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

//! Search input logic and state management.
//!
//! The search bar wraps a text input component. `/` gives it focus, `Enter`
//! submits the trimmed text as a new query and `Esc` leaves without
//! submitting. Submitting an empty query goes back to the latest photos.

mod render;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchBarOutcome {
    /// The event was not meant for the search bar.
    Ignored,
    Handled,
    Submitted(String),
}

#[derive(Default)]
pub(crate) struct SearchBar {
    active: bool,
    input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> SearchBarOutcome {
        let Event::Key(key_event) = event else {
            return SearchBarOutcome::Ignored;
        };

        if !self.active {
            return match key_event.code {
                KeyCode::Char('/') => {
                    self.active = true;
                    SearchBarOutcome::Handled
                }
                _ => SearchBarOutcome::Ignored,
            };
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                SearchBarOutcome::Handled
            }

            KeyCode::Enter => {
                self.active = false;
                SearchBarOutcome::Submitted(self.input.value().trim().to_string())
            }

            _ => {
                // Delegate all other key events to the managed input component
                self.input.handle_event(event);
                SearchBarOutcome::Handled
            }
        }
    }
}
