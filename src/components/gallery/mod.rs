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

//! Interactive gallery view and card navigation.
//!
//! This module keeps the view-side state of the photo card table (cursor
//! position and scroll offset) separate from the gallery content model,
//! which is owned by the application and passed in per event or frame.

mod event;
mod render;

use ratatui::widgets::TableState;

/// Actions the gallery view asks the application to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GalleryAction {
    /// Open the lightbox on the card at this index.
    Inspect(usize),
    /// Fetch the next page of results.
    LoadMore,
}

pub(crate) struct GalleryView {
    pub(crate) table_state: TableState,
}

impl GalleryView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// Drops cursor and scroll state, ready for a new search.
    pub(crate) fn reset(&mut self) {
        self.table_state = TableState::new();
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Moves the viewport down by `cards` rows without touching the cursor.
    ///
    /// Used when a follow-up page lands, nudging the freshly appended cards
    /// into view the way the original widget scrolled the page.
    pub(crate) fn scroll_by_cards(&mut self, cards: usize) {
        *self.table_state.offset_mut() += cards;
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        self.table_state.select_first();
    }

    fn goto_last(&mut self) {
        self.table_state.select_last();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut view = GalleryView::new();
        view.goto_next(3);
        assert_eq!(view.selected(), Some(0));
        view.goto_next(3);
        view.goto_next(3);
        view.goto_next(3);
        assert_eq!(view.selected(), Some(0));

        view.goto_previous(3);
        assert_eq!(view.selected(), Some(2));
    }

    #[test]
    fn test_navigation_ignores_empty_gallery() {
        let mut view = GalleryView::new();
        view.goto_next(0);
        view.goto_previous(0);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_scroll_by_cards_advances_offset() {
        let mut view = GalleryView::new();
        view.scroll_by_cards(2);
        view.scroll_by_cards(2);
        assert_eq!(view.table_state.offset(), 4);
    }

    #[test]
    fn test_reset_drops_cursor_and_offset() {
        let mut view = GalleryView::new();
        view.goto_next(5);
        view.scroll_by_cards(2);

        view.reset();
        assert_eq!(view.selected(), None);
        assert_eq!(view.table_state.offset(), 0);
    }
}
