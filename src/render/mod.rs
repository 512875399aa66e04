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
//! every processed event. Overlays stack last: the notice toast above the
//! main layout, the lightbox above everything.

mod notice;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Renders the user interface to the terminal frame.
///
/// The screen splits into the search field, the gallery, and a one-line
/// footer with key hints and fetch status.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like table scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_bar.draw(f, outer[0], &app.theme);
    app.gallery_view.draw(f, outer[1], &app.gallery, &app.theme);
    draw_footer(f, outer[2], app);

    if let Some(notice) = app.notices.current() {
        notice::draw_notice(f, area, notice, &app.theme);
    }

    app.lightbox.draw(f, area, &app.theme);
}

fn draw_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints = Line::from(vec![
        Span::raw(" / search   j/k move   \u{23ce} view   m more   q quit"),
        Span::raw(if app.in_flight { "   searching\u{2026}" } else { "" }),
    ])
    .style(Style::default().fg(app.theme.border_colour));

    let count = Paragraph::new(Line::from(format!("{} images ", app.gallery.len())))
        .right_aligned()
        .style(Style::default().fg(app.theme.border_colour));

    f.render_widget(Paragraph::new(hints), area);
    f.render_widget(count, area);
}
