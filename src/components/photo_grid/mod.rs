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

//! Interactive photo grid widget and state management.
//!
//! This module lays photos out as tiles in rows, the way a web gallery wraps
//! images across the page. It separates persistent state
//! ([`PhotoGridState`]) from the transient widget view ([`PhotoGrid`]), which
//! borrows the photos it shows for the duration of one event or one frame.
//!
//! Moving the selection into the last row reports [`GridAction::ReachedEnd`],
//! which is what drives loading of the next page.

mod event;
mod render;

use crate::model::Photo;

const DEFAULT_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridAction {
    Open(usize),
    Inspect(usize),
    ReachedEnd,
}

#[derive(Debug)]
pub(crate) struct PhotoGridState {
    selected: Option<usize>,
    /// Columns that fit the last rendered area.
    columns: usize,
    /// First visible row.
    offset: usize,
}

impl Default for PhotoGridState {
    fn default() -> Self {
        Self {
            selected: None,
            columns: DEFAULT_COLUMNS,
            offset: 0,
        }
    }
}

impl PhotoGridState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the first photo of a fresh result list.
    pub(crate) fn reset(&mut self, len: usize) {
        self.selected = if len > 0 { Some(0) } else { None };
        self.offset = 0;
    }

    pub(crate) fn as_widget<'a>(&'a mut self, photos: &'a [Photo], loading: bool) -> PhotoGrid<'a> {
        PhotoGrid {
            photos,
            loading,
            state: self,
        }
    }
}

pub(crate) struct PhotoGrid<'a> {
    photos: &'a [Photo],
    loading: bool,
    state: &'a mut PhotoGridState,
}

impl PhotoGrid<'_> {
    fn select(&mut self, index: usize) {
        self.state.selected = Some(index);
    }

    fn row_of(&self, index: usize) -> usize {
        index / self.state.columns
    }

    fn in_last_row(&self) -> bool {
        match (self.state.selected, self.photos.len()) {
            (Some(index), len) if len > 0 => self.row_of(index) == self.row_of(len - 1),
            _ => false,
        }
    }

    /// Applies `step` to the current selection, or selects the first photo if
    /// nothing is selected yet.
    fn move_selection(&mut self, step: impl FnOnce(usize, usize, usize) -> usize) {
        let len = self.photos.len();
        if len == 0 {
            return;
        }
        let index = match self.state.selected {
            Some(index) => step(index.min(len - 1), len, self.state.columns),
            None => 0,
        };
        self.select(index);
    }

    fn goto_right(&mut self) {
        self.move_selection(|i, len, _| if i + 1 < len { i + 1 } else { i });
    }

    fn goto_left(&mut self) {
        self.move_selection(|i, _, _| i.saturating_sub(1));
    }

    fn goto_down(&mut self) {
        self.move_selection(|i, len, columns| {
            if i + columns < len {
                i + columns
            } else if i / columns < (len - 1) / columns {
                // the row below is partial and has no tile in this column
                len - 1
            } else {
                i
            }
        });
    }

    fn goto_up(&mut self) {
        self.move_selection(|i, _, columns| i.checked_sub(columns).unwrap_or(i));
    }

    fn goto_first(&mut self) {
        self.move_selection(|_, _, _| 0);
    }

    fn goto_last(&mut self) {
        self.move_selection(|_, len, _| len - 1);
    }
}
