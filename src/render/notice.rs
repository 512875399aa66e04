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

//! Toast overlay rendering.
//!
//! Draws the current notice as a small bordered box floating over the main
//! layout, centred or pinned near the bottom according to its position hint.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    notify::{Notice, NoticeKind, NoticePosition},
    theme::Theme,
};

pub(crate) fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let fg = match notice.kind {
        NoticeKind::Info => theme.notice_info_fg,
        NoticeKind::Success => theme.notice_success_fg,
        NoticeKind::Failure => theme.notice_failure_fg,
    };

    let width = (notice.text.len() as u16 + 4).min(area.width);
    let height = 3;

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = match notice.position {
        NoticePosition::Centre => area.y + area.height.saturating_sub(height) / 2,
        NoticePosition::Bottom => area.y + area.height.saturating_sub(height + 2),
    };
    let popup = Rect::new(x, y, width, height.min(area.height));

    f.render_widget(Clear, popup);

    let toast = Paragraph::new(notice.text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fg)),
        );
    f.render_widget(toast, popup);
}
