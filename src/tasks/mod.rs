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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! HTTP requests and launching the system browser, from the main UI thread.
//! It provides a dedicated worker loop that receives [`AppTask`] requests and
//! broadcasts the results back to the application via [`AppEvent`]s. Page
//! fetches run on their own thread each, so a slow page never holds up the
//! first page of a newer search.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::error;

use crate::{
    api::{RequestDescriptor, UnsplashClient},
    events::AppEvent,
    error::GalleryError,
    gallery::PageFetcher,
    model::search::PageRequest,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchPage {
        request: PageRequest,
        descriptor: RequestDescriptor,
    },

    OpenInBrowser(String),
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the HTTP client and enters a blocking loop, listening for
/// incoming [`AppTask`]s until every sender has been dropped.
///
/// # Arguments
///
/// * `client` - The client used for every page fetch.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    client: UnsplashClient,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                client: &client,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!(error = %format!("{e:#}"), "task failed");
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    client: &'a UnsplashClient,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchPage {
            request,
            descriptor,
        } => handlers::fetch_page(ctx, request, descriptor),

        AppTask::OpenInBrowser(url) => handlers::open_in_browser(ctx, &url),
    }
}

impl PageFetcher for Sender<AppTask> {
    fn fetch(
        &self,
        request: PageRequest,
        descriptor: RequestDescriptor,
    ) -> Result<(), GalleryError> {
        self.send(AppTask::FetchPage {
            request,
            descriptor,
        })
        .map_err(|_| GalleryError::WorkerStopped)
    }
}
