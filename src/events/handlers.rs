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
use tracing::warn;

use crate::{
    App,
    components::PhotoDetail,
    error::GalleryError,
    model::{Photo, search::MergeOutcome, search::PageRequest},
    tasks::AppTask,
};

pub(super) fn handle_submit_search(app: &mut App, query: String) {
    app.notice = None;
    app.gallery.set_query(query);
    if let Err(e) = app.gallery.submit_search(&app.task_tx) {
        app.notice = Some(e.to_string());
    }
}

pub(super) fn handle_load_more(app: &mut App) {
    if let Err(e) = app.gallery.request_next_page(&app.task_tx) {
        app.notice = Some(e.to_string());
    }
}

pub(super) fn handle_page_loaded(app: &mut App, request: PageRequest, photos: Vec<Photo>) {
    let outcome = app.gallery.apply_page(&request, Ok(photos));
    if outcome == Some(MergeOutcome::Replaced) {
        app.photo_grid.reset(app.gallery.results().len());
    }
}

pub(super) fn handle_page_failed(app: &mut App, request: PageRequest, error: GalleryError) {
    app.gallery.apply_page(&request, Err(error));
}

pub(super) fn handle_open_photo(app: &mut App, index: usize) -> Result<()> {
    if let Some(photo) = app.gallery.results().get(index) {
        app.task_tx
            .send(AppTask::OpenInBrowser(photo.links.html.clone()))?;
    }

    Ok(())
}

pub(super) fn handle_inspect_photo(app: &mut App, index: usize) {
    let Some(photo) = app.gallery.results().get(index) else {
        return;
    };

    match PhotoDetail::new(photo, app.registry) {
        Ok(detail) => app.photo_detail = Some(detail),
        Err(e) => {
            warn!(error = %e, id = %photo.id, "photo could not be encoded");
            app.notice = Some(e.to_string());
        }
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.notice = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.tick = app.tick.wrapping_add(1);
}
