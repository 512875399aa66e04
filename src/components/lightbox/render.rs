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

//! Rendering for the lightbox overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{components::Lightbox, theme::Theme, util::format::format_count};

impl Lightbox {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.is_open() {
            return;
        }
        let Some(record) = self.current() else {
            return;
        };

        let popup = centred_rect(area, area.width.saturating_sub(8).min(90), 11);
        f.render_widget(Clear, popup);

        let (position, total) = self.position();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Image {position}/{total} "))
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));

        let stats = Line::from(vec![
            Span::raw("Likes "),
            Span::styled(format_count(record.likes), Style::default().bold()),
            Span::raw("   Views "),
            Span::styled(format_count(record.views), Style::default().bold()),
            Span::raw("   Comments "),
            Span::styled(format_count(record.comments), Style::default().bold()),
            Span::raw("   Downloads "),
            Span::styled(format_count(record.downloads), Style::default().bold()),
        ])
        .style(Style::default().fg(theme.card_stats_fg));

        let body = vec![
            Line::from(record.tags.as_str())
                .style(Style::default().fg(theme.card_tags_fg).bold()),
            Line::from(""),
            Line::from(record.full_res_url.as_str())
                .style(Style::default().fg(theme.accent_colour)),
            Line::from(record.preview_url.as_str())
                .style(Style::default().fg(theme.card_url_fg)),
            Line::from(""),
            stats,
            Line::from(""),
            Line::from("n/p next/previous   Esc close")
                .style(Style::default().fg(theme.border_colour))
                .alignment(Alignment::Center),
        ];

        let paragraph = Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, popup);
    }
}

fn centred_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
