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

//! # Unsplash Gallery TUI.
//!
//! A terminal photo gallery for the Unsplash API.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all gallery
//!   state and renders the UI.
//! * A **Background Worker** performs HTTP requests and other blocking work
//!   via task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod api;
mod components;
mod config;
mod error;
mod events;
mod gallery;
mod model;
mod render;
mod schema;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    api::UnsplashClient,
    components::{PhotoDetail, PhotoGridState, SearchBar},
    config::{AccessKey, AppConfig},
    error::GalleryError,
    events::{AppEvent, process_events},
    gallery::{Gallery, GalleryStatus},
    schema::SchemaRegistry,
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub registry: &'static SchemaRegistry,
    pub gallery: Gallery,

    pub search_bar: SearchBar,
    pub photo_grid: PhotoGridState,
    pub photo_detail: Option<PhotoDetail>,

    /// A problem outside the gallery itself, e.g. a browser that would not
    /// open.
    pub notice: Option<String>,
    pub tick: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(
        config: AppConfig,
        access_key: Result<AccessKey, GalleryError>,
        task_tx: Sender<AppTask>,
    ) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let registry = SchemaRegistry::photo(config.extra_keys());
        let gallery = Gallery::new(&config, access_key).context("Invalid configuration")?;

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            registry,
            gallery,
            search_bar: SearchBar::new(),
            photo_grid: PhotoGridState::new(),
            photo_detail: None,
            notice: None,
            tick: 0,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration and the access key, sets up logging and the
/// communication channels, manages the terminal lifecycle, and returns an
/// error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let log_dir = config::config_dir().unwrap_or_else(std::env::temp_dir);
    let _log_guard = util::logging::init_logger(&log_dir, &config.log_filter)?;

    info!(version = env!("CARGO_PKG_VERSION"), api_url = %config.api_url, "starting");

    let access_key = config::access_key_from_env();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app =
        App::new(config, access_key, task_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        warn!(error = %format!("{e:#}"), "exiting with error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&mut stdout, &Theme::to_hex(app.theme.background_colour))
        .context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// With an access key available, the latest photos are requested straight
/// away. It then hands control to [`process_events`] to manage the UI and
/// state updates.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created, or if the event
/// processing loop encounters an unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks.
    let client = UnsplashClient::new(app.registry).context("Failed to create HTTP client")?;
    tasks::spawn_task_worker(client, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind == event::KeyEventKind::Press && tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial trigger to populate the gallery with the latest photos
    if app.gallery.status() == GalleryStatus::Ready {
        app.event_tx.send(AppEvent::SubmitSearch(String::new()))?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
