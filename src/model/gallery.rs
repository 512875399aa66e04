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

//! Gallery content management.
//!
//! This module holds the records accumulated across result pages, the
//! visibility of the load-more affordance, and the trailing margin reserved
//! under the gallery once pagination ends.

use crate::model::ImageRecord;

pub(crate) struct Gallery {
    records: Vec<ImageRecord>,
    load_more_visible: bool,
    trailing_margin: u16,
}

impl Gallery {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![],
            load_more_visible: false,
            trailing_margin: 0,
        }
    }

    pub(crate) fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a page of records to the end of the gallery, preserving the
    /// order they arrived in.
    pub(crate) fn append(&mut self, hits: Vec<ImageRecord>) {
        self.records.extend(hits);
    }

    /// Clears all content and layout adjustments, ready for a new search.
    pub(crate) fn reset(&mut self) {
        self.records.clear();
        self.load_more_visible = false;
        self.trailing_margin = 0;
    }

    pub(crate) fn show_load_more(&mut self) {
        self.load_more_visible = true;
    }

    pub(crate) fn hide_load_more(&mut self) {
        self.load_more_visible = false;
    }

    pub(crate) fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub(crate) fn set_trailing_margin(&mut self, rows: u16) {
        self.trailing_margin = rows;
    }

    pub(crate) fn trailing_margin(&self) -> u16 {
        self.trailing_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tags: &str) -> ImageRecord {
        ImageRecord {
            preview_url: format!("https://img.example/{tags}-preview.jpg"),
            full_res_url: format!("https://img.example/{tags}.jpg"),
            tags: tags.to_string(),
            likes: 1,
            views: 2,
            comments: 3,
            downloads: 4,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut gallery = Gallery::new();
        gallery.append(vec![record("a"), record("b")]);
        gallery.append(vec![record("c")]);

        let tags: Vec<&str> = gallery.records().iter().map(|r| r.tags.as_str()).collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
        assert_eq!(gallery.len(), 3);
    }

    #[test]
    fn test_reset_clears_content_and_layout() {
        let mut gallery = Gallery::new();
        gallery.append(vec![record("a")]);
        gallery.show_load_more();
        gallery.set_trailing_margin(4);

        gallery.reset();
        assert!(gallery.is_empty());
        assert!(!gallery.load_more_visible());
        assert_eq!(gallery.trailing_margin(), 0);
    }

    #[test]
    fn test_load_more_visibility_toggles() {
        let mut gallery = Gallery::new();
        assert!(!gallery.load_more_visible());
        gallery.show_load_more();
        assert!(gallery.load_more_visible());
        gallery.hide_load_more();
        assert!(!gallery.load_more_visible());
    }
}
