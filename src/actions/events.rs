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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (page fetches), and the UI rendering pipeline. The pagination decisions
//! (reset on submit, advance on load-more, terminate on exhaustion) live in
//! the event arms here, with the pure state transitions delegated to
//! [`SearchSession`].
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers commands to the background fetch worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    api::ApiError,
    components::GalleryAction,
    model::{
        ResultPage,
        session::{PageOutcome, SearchSession},
    },
    notify::{Notice, NoticePosition},
    render::draw,
};

/// Blank rows kept under the gallery once pagination ends, so the footer
/// does not jump when the load-more affordance disappears.
const EXHAUSTED_TRAILING_ROWS: u16 = 4;

/// How many cards the viewport advances when a follow-up page lands.
const FOLLOW_UP_SCROLL_CARDS: usize = 2;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// The search field was submitted with this raw, untrimmed text.
    SubmitQuery(String),
    /// The load-more affordance was activated.
    LoadMore,

    PageLoaded(ResultPage),
    FetchFailed(ApiError),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::SubmitQuery(raw) => on_submit(app, raw)?,
            AppEvent::LoadMore => on_load_more(app)?,

            AppEvent::PageLoaded(page) => on_page_loaded(app, page),
            AppEvent::FetchFailed(error) => on_fetch_failed(app, &error),

            AppEvent::Tick => app.notices.tick(),

            AppEvent::Error(message) => {
                tracing::error!(error = %message, "worker error");
            }

            _ => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Routing order matters: an open lightbox captures everything, then a
/// focused search field, then the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.lightbox.is_open() {
        process_lightbox_key_event(app, key);
        return Ok(());
    }

    let event = Event::Key(key);
    if app.search_bar.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_lightbox_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.lightbox.close(),
        KeyCode::Char('n') | KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => {
            app.lightbox.next();
        }
        KeyCode::Char('p') | KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => {
            app.lightbox.previous();
        }
        _ => {}
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('/') => app.search_bar.focus(),

        _ => {
            let event = Event::Key(key);
            if let Some(action) = app.gallery_view.process_event(&event, &app.gallery) {
                match action {
                    GalleryAction::LoadMore => app.event_tx.send(AppEvent::LoadMore)?,
                    GalleryAction::Inspect(index) => app.lightbox.open_at(index),
                }
            }
        }
    }

    Ok(())
}

/// Handles a submitted query.
///
/// Emptiness is decided on the raw value; trimming happens only at dispatch.
/// A non-empty submit always starts over: page counter back to 1, gallery
/// cleared, load-more hidden.
fn on_submit(app: &mut App, raw: String) -> Result<()> {
    if app.in_flight {
        return Ok(());
    }

    if raw.is_empty() {
        reset_results(app);
        app.session.begin(raw);
        app.notices.post(Notice::info("Please, fill in the search field!"));
        return Ok(());
    }

    reset_results(app);
    app.session.begin(raw);
    dispatch_fetch(app)
}

/// Handles the load-more affordance: fetch the next page for the stored
/// query without resetting anything.
fn on_load_more(app: &mut App) -> Result<()> {
    if app.in_flight || app.session.is_halted() {
        return Ok(());
    }
    dispatch_fetch(app)
}

fn dispatch_fetch(app: &mut App) -> Result<()> {
    app.in_flight = true;
    app.command_tx.send(AppCommand::FetchPage {
        term: app.session.term(),
        page: app.session.page_index(),
    })?;
    Ok(())
}

fn reset_results(app: &mut App) {
    app.gallery.reset();
    app.gallery_view.reset();
    app.lightbox.reset();
}

fn on_page_loaded(app: &mut App, page: ResultPage) {
    app.in_flight = false;

    match app.session.apply_page(&page) {
        PageOutcome::NoMatches => {
            app.notices.post(Notice::failure(
                "Sorry, there are no images matching your search query. Please try again.",
            ));
        }

        PageOutcome::Appended { scroll } => {
            let total_hits = page.total_hits;
            app.gallery.append(page.hits);
            app.gallery.show_load_more();
            app.notices
                .post(Notice::success(format!("Hooray! We found {total_hits} images.")));
            if scroll {
                app.gallery_view.scroll_by_cards(FOLLOW_UP_SCROLL_CARDS);
            }
            app.lightbox.refresh(&app.gallery);
        }

        PageOutcome::Exhausted => end_of_results(app),
    }
}

fn on_fetch_failed(app: &mut App, error: &ApiError) {
    app.in_flight = false;

    tracing::warn!(error = %error, "image fetch failed");

    if apply_fetch_failure(&mut app.session, error) {
        end_of_results(app);
    }
    // Other failures intentionally surface nothing to the user; the log line
    // above is the only trace.
}

/// Terminates pagination for the current session on the view side.
fn end_of_results(app: &mut App) {
    app.notices.post(Notice::failure_at(
        "We're sorry, but you've reached the end of search results.",
        NoticePosition::Bottom,
    ));
    app.gallery.hide_load_more();
    app.gallery.set_trailing_margin(EXHAUSTED_TRAILING_ROWS);
}

/// Returns `true` when the failure terminates pagination. The service
/// reports paging past the last result as HTTP 400.
fn apply_fetch_failure(session: &mut SearchSession, error: &ApiError) -> bool {
    if error.status() == Some(400) {
        session.halt();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc::{self, Receiver};

    use crate::{
        config::AppConfig,
        model::ImageRecord,
        notify::NoticeKind,
    };

    fn test_app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (App::new(AppConfig::default(), command_tx), command_rx)
    }

    fn record(tags: &str) -> ImageRecord {
        ImageRecord {
            preview_url: format!("https://img.example/{tags}-preview.jpg"),
            full_res_url: format!("https://img.example/{tags}.jpg"),
            tags: tags.to_string(),
            likes: 0,
            views: 0,
            comments: 0,
            downloads: 0,
        }
    }

    fn page_of(count: usize, total: u64, total_hits: u64) -> ResultPage {
        ResultPage {
            total,
            total_hits,
            hits: (0..count).map(|i| record(&format!("hit {i}"))).collect(),
        }
    }

    #[test]
    fn test_http_400_halts_the_session() {
        let mut session = SearchSession::new();
        session.begin("cats".to_string());

        let error = ApiError::Status {
            status: 400,
            message: "Bad Request".to_string(),
        };
        assert!(apply_fetch_failure(&mut session, &error));
        assert!(session.is_halted());
    }

    #[test]
    fn test_other_failures_leave_session_unchanged() {
        let mut session = SearchSession::new();
        session.begin("cats".to_string());

        let server_error = ApiError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(!apply_fetch_failure(&mut session, &server_error));

        let transport = ApiError::Transport("connection refused".to_string());
        assert!(!apply_fetch_failure(&mut session, &transport));

        assert!(!session.is_halted());
    }

    #[test]
    fn test_submit_clears_results_and_fetches_page_one() {
        let (mut app, command_rx) = test_app();
        app.gallery.append(vec![record("stale")]);
        app.gallery.show_load_more();

        on_submit(&mut app, "  cats ".to_string()).unwrap();

        assert!(app.gallery.is_empty());
        assert!(!app.gallery.load_more_visible());
        assert!(app.in_flight);

        match command_rx.try_recv().unwrap() {
            AppCommand::FetchPage { term, page } => {
                assert_eq!(term, "cats");
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_empty_submit_notifies_without_fetching() {
        let (mut app, command_rx) = test_app();
        app.gallery.append(vec![record("stale")]);

        on_submit(&mut app, String::new()).unwrap();

        assert!(app.gallery.is_empty());
        assert!(!app.in_flight);
        assert!(command_rx.try_recv().is_err());
        assert_eq!(app.notices.current().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn test_loaded_page_appends_and_shows_load_more() {
        let (mut app, command_rx) = test_app();
        on_submit(&mut app, "cats".to_string()).unwrap();
        command_rx.try_recv().unwrap();

        on_page_loaded(&mut app, page_of(40, 120, 120));

        assert_eq!(app.gallery.len(), 40);
        assert!(app.gallery.load_more_visible());
        assert_eq!(app.session.page_index(), 2);
        assert!(!app.in_flight);
        assert_eq!(app.notices.current().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn test_no_matches_leaves_gallery_empty() {
        let (mut app, command_rx) = test_app();
        on_submit(&mut app, "xyzzy".to_string()).unwrap();
        command_rx.try_recv().unwrap();

        on_page_loaded(&mut app, page_of(0, 0, 0));

        assert!(app.gallery.is_empty());
        assert_eq!(app.session.page_index(), 1);
        assert_eq!(app.notices.current().unwrap().kind, NoticeKind::Failure);
    }

    #[test]
    fn test_exhaustion_hides_load_more_and_blocks_fetches() {
        let (mut app, command_rx) = test_app();
        on_submit(&mut app, "cats".to_string()).unwrap();
        command_rx.try_recv().unwrap();

        // Pages 1..=3 of 120 hits, then the load-more past the end.
        for _ in 0..3 {
            on_page_loaded(&mut app, page_of(40, 120, 120));
            on_load_more(&mut app).unwrap();
            command_rx.try_recv().unwrap();
        }
        on_page_loaded(&mut app, page_of(40, 120, 120));

        assert!(!app.gallery.load_more_visible());
        assert!(app.gallery.trailing_margin() > 0);
        assert_eq!(app.gallery.len(), 120);

        on_load_more(&mut app).unwrap();
        assert!(command_rx.try_recv().is_err());

        let notice = app.notices.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.position, NoticePosition::Bottom);
    }

    #[test]
    fn test_fetch_failed_400_terminates_like_exhaustion() {
        let (mut app, command_rx) = test_app();
        on_submit(&mut app, "cats".to_string()).unwrap();
        command_rx.try_recv().unwrap();
        on_page_loaded(&mut app, page_of(40, 120, 120));

        on_fetch_failed(
            &mut app,
            &ApiError::Status {
                status: 400,
                message: "Bad Request".to_string(),
            },
        );

        assert!(!app.gallery.load_more_visible());
        assert!(app.session.is_halted());

        on_load_more(&mut app).unwrap();
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn test_other_fetch_failures_are_silent() {
        let (mut app, command_rx) = test_app();
        on_submit(&mut app, "cats".to_string()).unwrap();
        command_rx.try_recv().unwrap();
        on_page_loaded(&mut app, page_of(40, 120, 120));
        let shown = app.gallery.len();
        // Let the success notice lapse so a new one would be visible.
        for _ in 0..60 {
            app.notices.tick();
        }

        on_fetch_failed(&mut app, &ApiError::Transport("timed out".to_string()));

        assert!(app.notices.current().is_none());
        assert_eq!(app.gallery.len(), shown);
        assert!(app.gallery.load_more_visible());
        assert!(!app.session.is_halted());
    }

    #[test]
    fn test_dispatch_is_suppressed_while_in_flight() {
        let (mut app, command_rx) = test_app();
        on_submit(&mut app, "cats".to_string()).unwrap();
        command_rx.try_recv().unwrap();

        // The first request has not resolved yet.
        on_load_more(&mut app).unwrap();
        on_submit(&mut app, "dogs".to_string()).unwrap();
        assert!(command_rx.try_recv().is_err());
    }
}
