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

//! Lightbox overlay.
//!
//! This module implements the full-resolution view of a single card: a modal
//! overlay bound to the gallery's records. The binding is explicit.
//! [`Lightbox::refresh`] must be called after every append so cards from new
//! pages become viewable.

mod render;

use crate::model::{ImageRecord, gallery::Gallery};

pub(crate) struct Lightbox {
    entries: Vec<ImageRecord>,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![],
            index: 0,
            open: false,
        }
    }

    /// Rebinds the overlay to the gallery's current records.
    pub(crate) fn refresh(&mut self, gallery: &Gallery) {
        self.entries = gallery.records().to_vec();
        if self.index >= self.entries.len() {
            self.index = self.entries.len().saturating_sub(1);
        }
    }

    /// Drops all entries and closes the overlay.
    pub(crate) fn reset(&mut self) {
        self.entries.clear();
        self.index = 0;
        self.open = false;
    }

    /// Opens the overlay on the entry at `index`; out-of-range indices are
    /// ignored.
    pub(crate) fn open_at(&mut self, index: usize) {
        if index < self.entries.len() {
            self.index = index;
            self.open = true;
        }
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.entries.len();
    }

    pub(crate) fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.entries.len() - 1
        } else {
            self.index - 1
        };
    }

    pub(crate) fn current(&self) -> Option<&ImageRecord> {
        self.entries.get(self.index)
    }

    fn position(&self) -> (usize, usize) {
        (self.index + 1, self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_with(cards: usize) -> Gallery {
        let mut gallery = Gallery::new();
        let hits = (0..cards)
            .map(|i| ImageRecord {
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
        gallery
    }

    #[test]
    fn test_open_requires_refresh_first() {
        let mut lightbox = Lightbox::new();
        lightbox.open_at(0);
        assert!(!lightbox.is_open());

        lightbox.refresh(&gallery_with(2));
        lightbox.open_at(0);
        assert!(lightbox.is_open());
    }

    #[test]
    fn test_refresh_picks_up_appended_cards() {
        let mut lightbox = Lightbox::new();
        lightbox.refresh(&gallery_with(2));

        lightbox.open_at(3);
        assert!(!lightbox.is_open());

        lightbox.refresh(&gallery_with(5));
        lightbox.open_at(3);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current().unwrap().tags, "card 3");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut lightbox = Lightbox::new();
        lightbox.refresh(&gallery_with(3));
        lightbox.open_at(2);

        lightbox.next();
        assert_eq!(lightbox.current().unwrap().tags, "card 0");
        lightbox.previous();
        assert_eq!(lightbox.current().unwrap().tags, "card 2");
    }

    #[test]
    fn test_reset_closes_and_clears() {
        let mut lightbox = Lightbox::new();
        lightbox.refresh(&gallery_with(3));
        lightbox.open_at(1);

        lightbox.reset();
        assert!(!lightbox.is_open());
        assert!(lightbox.current().is_none());
    }
}
