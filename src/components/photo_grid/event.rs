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

//! Input handling for the photo grid.
//!
//! This module maps raw terminal keyboard events to grid navigation and to
//! the actions the rest of the application reacts to.

use crossterm::event::{Event, KeyCode};

use crate::components::photo_grid::{GridAction, PhotoGrid};

impl PhotoGrid<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<GridAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let before = self.state.selected;

        // Internal events
        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => self.goto_right(),
            KeyCode::Char('h') | KeyCode::Left => self.goto_left(),
            KeyCode::Char('j') | KeyCode::Down => self.goto_down(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_up(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),
            _ => {}
        }

        if self.state.selected != before && self.in_last_row() {
            return Some(GridAction::ReachedEnd);
        }

        // External events that result in a grid action
        let selected = self.state.selected.filter(|&i| i < self.photos.len())?;
        match key_event.code {
            KeyCode::Enter | KeyCode::Char('o') => Some(GridAction::Open(selected)),
            KeyCode::Char('i') => Some(GridAction::Inspect(selected)),
            _ => None,
        }
    }
}
