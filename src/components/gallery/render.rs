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

//! UI rendering logic for the gallery.
//!
//! Each result record becomes a two-line photo card: a tags line over a
//! dimmed preview link, with the engagement counters in columns alongside.
//! The load-more affordance and the trailing margin render beneath the card
//! table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{
    components::GalleryView, model::gallery::Gallery, theme::Theme, util::format::format_count,
};

impl GalleryView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, gallery: &Gallery, theme: &Theme) {
        let load_more_height = if gallery.load_more_visible() { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(load_more_height),
                Constraint::Length(gallery.trailing_margin()),
            ])
            .split(area);

        if gallery.is_empty() {
            let hint = Paragraph::new("Press / and type a query to search for images.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.border_colour));
            f.render_widget(hint, chunks[0]);
        } else {
            self.draw_cards(f, chunks[0], gallery, theme);
        }

        if gallery.load_more_visible() {
            let affordance = Paragraph::new("— Load more (m) —")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.accent_colour));
            f.render_widget(affordance, chunks[1]);
        }
    }

    fn draw_cards(&mut self, f: &mut Frame, area: Rect, gallery: &Gallery, theme: &Theme) {
        let rows = gallery.records().iter().map(|item| {
            let card = Text::from(vec![
                Line::from(item.tags.as_str()).style(Style::default().fg(theme.card_tags_fg)),
                Line::from(item.preview_url.as_str())
                    .style(Style::default().fg(theme.card_url_fg)),
            ]);

            let stats_style = Style::default().fg(theme.card_stats_fg);
            Row::new(vec![
                Cell::from(card),
                Cell::from(
                    Line::from(format_count(item.likes))
                        .style(stats_style)
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(format_count(item.views))
                        .style(stats_style)
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(format_count(item.comments))
                        .style(stats_style)
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(format_count(item.downloads))
                        .style(stats_style)
                        .alignment(Alignment::Right),
                ),
            ])
            .height(2)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Photo"),
                Cell::from(Line::from("Likes").alignment(Alignment::Right)),
                Cell::from(Line::from("Views").alignment(Alignment::Right)),
                Cell::from(Line::from("Comments").alignment(Alignment::Right)),
                Cell::from(Line::from("Downloads").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
