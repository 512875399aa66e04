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

//! Rendering for the search field.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

impl SearchBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.is_focused() {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style);
        let inner = block.inner(area);

        // Keep the cursor in view when the query outgrows the field.
        let scroll = self.input.visual_scroll(inner.width.saturating_sub(1) as usize);

        let field = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(field, area);

        if self.is_focused() {
            let cursor_x = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position(Position::new(inner.x + cursor_x, inner.y));
        }
    }
}
