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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App,
    components::{GridAction, SearchBarOutcome},
    events::AppEvent,
    gallery::GalleryStatus,
};

/// Routes keyboard input to whichever part of the UI owns it.
///
/// Components get first refusal in order of focus: the detail popup, then
/// the search bar, then the photo grid. Keys none of them want are global.
/// Without an access key only quitting is possible.
///
/// # Errors
///
/// Returns an error if an event cannot be queued.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.gallery.status() == GalleryStatus::CredentialRequired {
        return process_global_key_event(app, key);
    }

    let event = Event::Key(key);

    if let Some(detail) = app.photo_detail.as_mut() {
        if !detail.handle_event(&event) {
            app.photo_detail = None;
        }
        return Ok(());
    }

    match app.search_bar.handle_event(&event) {
        SearchBarOutcome::Submitted(query) => {
            app.event_tx.send(AppEvent::SubmitSearch(query))?;
            return Ok(());
        }
        SearchBarOutcome::Handled => return Ok(()),
        SearchBarOutcome::Ignored => {}
    }

    let loading = app.gallery.in_flight() > 0;
    let action = app
        .photo_grid
        .as_widget(app.gallery.results(), loading)
        .process_event(&event);

    match action {
        Some(GridAction::ReachedEnd) => app.event_tx.send(AppEvent::LoadMore)?,
        Some(GridAction::Open(index)) => app.event_tx.send(AppEvent::OpenPhoto(index))?,
        Some(GridAction::Inspect(index)) => app.event_tx.send(AppEvent::InspectPhoto(index))?,
        None => process_global_key_event(app, key)?,
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Reload the current query from the first page
        KeyCode::Char('r') if app.gallery.status() == GalleryStatus::Ready => {
            let query = app.gallery.query_text().to_string();
            app.event_tx.send(AppEvent::SubmitSearch(query))?;
        }

        _ => {}
    }

    Ok(())
}
