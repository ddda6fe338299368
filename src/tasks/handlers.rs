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

use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{
    api::RequestDescriptor, error::GalleryError, events::AppEvent, model::search::PageRequest,
    tasks::TaskContext,
};

pub(super) fn fetch_page(
    ctx: &TaskContext,
    request: PageRequest,
    descriptor: RequestDescriptor,
) -> Result<()> {
    let client = ctx.client.clone();
    let event_tx = ctx.event_tx.clone();
    let unstarted = request.clone();

    let spawned = thread::Builder::new()
        .name(format!("fetch-page-{}", request.page))
        .spawn(move || {
            let event = match client.fetch_page(&descriptor) {
                Ok(photos) => AppEvent::PageLoaded { request, photos },
                Err(error) => AppEvent::PageFailed { request, error },
            };
            // The receiver only goes away when the application is exiting
            let _ = event_tx.send(event);
        });

    if let Err(e) = spawned {
        warn!(error = %e, "failed to start page fetch");
        ctx.event_tx.send(AppEvent::PageFailed {
            request: unstarted,
            error: GalleryError::WorkerStopped,
        })?;
    }

    Ok(())
}

pub(super) fn open_in_browser(_ctx: &TaskContext, url: &str) -> Result<()> {
    debug!(url, "opening in browser");
    open::that_detached(url).with_context(|| format!("Failed to open {url}"))?;

    Ok(())
}
