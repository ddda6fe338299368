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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event to provide a reactive user interface.

mod credential;
pub(crate) mod icons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{App, gallery::GalleryStatus, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Without an access key nothing but the credential notice is shown. Otherwise
/// the screen is split into the search bar, the photo grid and a status line,
/// with the detail popup drawn over everything when it is open.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    if app.gallery.status() == GalleryStatus::CredentialRequired {
        credential::draw_credential_required(f, area, &app.theme);
        return;
    }

    let [search_area, grid_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    app.search_bar.draw(f, search_area, &app.theme);

    let loading = app.gallery.in_flight() > 0;
    app.photo_grid
        .as_widget(app.gallery.results(), loading)
        .draw(f, grid_area, &app.theme);

    status::draw_status(f, status_area, app);

    if let Some(detail) = app.photo_detail.as_mut() {
        detail.draw(f, area, &app.theme);
    }
}
