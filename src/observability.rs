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

//! Tracing initialization.
//!
//! Log output goes to a local file rather than stdout or stderr, since both
//! are owned by the terminal UI while the application runs. The filter is
//! taken from `RUST_LOG` when set.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "pixseek.log";

/// Installs the global tracing subscriber, writing to [`LOG_FILE`].
///
/// Logging is optional: if the log file cannot be created, or a subscriber is
/// already installed, this function returns without effect.
pub(crate) fn init_tracing() {
    let Ok(file) = std::fs::File::create(LOG_FILE) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pixseek=info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
