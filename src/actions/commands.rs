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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking
//! network requests from the main UI thread. It provides a dedicated worker
//! loop that executes [`AppCommand`] requests against the image API and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! The single worker thread also serializes page fetches: two rapid
//! load-more requests can never race each other on the wire.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{actions::events::AppEvent, api::ImageApi, config::AppConfig};

#[derive(Debug)]
pub(crate) enum AppCommand {
    FetchPage { term: String, page: u64 },
    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// The worker owns the HTTP client and enters a blocking loop, listening for
/// incoming [`AppCommand`]s until the channel closes.
///
/// # Arguments
///
/// * `config` - The application configuration (endpoint and key).
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let api = ImageApi::new(config);

    thread::spawn(move || {
        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&api, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Executes a single command and sends the result back through the
/// application event channel.
fn handle_command(
    api: &ImageApi,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::FetchPage { term, page } => {
            tracing::debug!(term = %term, page = page, "fetching result page");
            match api.fetch_page(&term, page) {
                Ok(result) => event_tx.send(AppEvent::PageLoaded(result))?,
                Err(e) => event_tx.send(AppEvent::FetchFailed(e))?,
            }
        }

        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}
