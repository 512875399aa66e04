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

//! Input handling for the gallery view.
//!
//! Maps raw keyboard events to card navigation and, for keys the view cannot
//! satisfy on its own, to a [`GalleryAction`] for the application to execute.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{GalleryAction, GalleryView},
    model::gallery::Gallery,
};

impl GalleryView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        gallery: &Gallery,
    ) -> Option<GalleryAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next(gallery.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous(gallery.len());
                None
            }
            KeyCode::Char('g') => {
                self.goto_first();
                None
            }
            KeyCode::Char('G') => {
                self.goto_last();
                None
            }

            // The load-more affordance only reacts while it is shown.
            KeyCode::Char('m') if gallery.load_more_visible() => Some(GalleryAction::LoadMore),

            KeyCode::Enter => self.selected().map(GalleryAction::Inspect),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn gallery_with(cards: usize, load_more: bool) -> Gallery {
        let mut gallery = Gallery::new();
        let hits = (0..cards)
            .map(|i| crate::model::ImageRecord {
                preview_url: format!("https://img.example/{i}-preview.jpg"),
                full_res_url: format!("https://img.example/{i}.jpg"),
                tags: format!("card {i}"),
                likes: 0,
                views: 0,
                comments: 0,
                downloads: 0,
            })
            .collect();
        gallery.append(hits);
        if load_more {
            gallery.show_load_more();
        }
        gallery
    }

    #[test]
    fn test_load_more_requires_visible_affordance() {
        let mut view = GalleryView::new();

        let hidden = gallery_with(3, false);
        assert_eq!(view.process_event(&key(KeyCode::Char('m')), &hidden), None);

        let shown = gallery_with(3, true);
        assert_eq!(
            view.process_event(&key(KeyCode::Char('m')), &shown),
            Some(GalleryAction::LoadMore)
        );
    }

    #[test]
    fn test_enter_inspects_selected_card() {
        let mut view = GalleryView::new();
        let gallery = gallery_with(3, false);

        assert_eq!(view.process_event(&key(KeyCode::Enter), &gallery), None);

        view.process_event(&key(KeyCode::Char('j')), &gallery);
        view.process_event(&key(KeyCode::Char('j')), &gallery);
        assert_eq!(
            view.process_event(&key(KeyCode::Enter), &gallery),
            Some(GalleryAction::Inspect(1))
        );
    }
}
