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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: image
//! records as returned by the remote search API, the pages they arrive in,
//! and the state that tracks an ongoing search.

pub(crate) mod gallery;
pub(crate) mod session;

use serde::Deserialize;

/// One image result, deserialized verbatim from the API response.
///
/// Field names follow the remote API's JSON; unknown response fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageRecord {
    #[serde(rename = "webformatURL")]
    pub(crate) preview_url: String,
    #[serde(rename = "largeImageURL")]
    pub(crate) full_res_url: String,
    pub(crate) tags: String,
    pub(crate) likes: u64,
    pub(crate) views: u64,
    pub(crate) comments: u64,
    pub(crate) downloads: u64,
}

/// One page of search results. Transient: read once per fetch, never
/// retained. The records move into the gallery, the counters are consumed
/// by the session.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResultPage {
    pub(crate) total: u64,
    #[serde(rename = "totalHits")]
    pub(crate) total_hits: u64,
    pub(crate) hits: Vec<ImageRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_page_deserializes_api_response() {
        // Trimmed-down real response shape, including fields we do not map.
        let payload = r#"{
            "total": 4692,
            "totalHits": 500,
            "hits": [
                {
                    "id": 195893,
                    "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                    "type": "photo",
                    "tags": "blossom, bloom, flower",
                    "previewURL": "https://cdn.pixabay.com/photo/preview.jpg",
                    "webformatURL": "https://pixabay.com/get/webformat.jpg",
                    "largeImageURL": "https://pixabay.com/get/large.jpg",
                    "views": 7671,
                    "downloads": 6439,
                    "comments": 38,
                    "likes": 94,
                    "user": "Josch13"
                }
            ]
        }"#;

        let page: ResultPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.total, 4692);
        assert_eq!(page.total_hits, 500);
        assert_eq!(page.hits.len(), 1);

        let record = &page.hits[0];
        assert_eq!(record.tags, "blossom, bloom, flower");
        assert_eq!(record.preview_url, "https://pixabay.com/get/webformat.jpg");
        assert_eq!(record.full_res_url, "https://pixabay.com/get/large.jpg");
        assert_eq!(record.likes, 94);
        assert_eq!(record.views, 7671);
        assert_eq!(record.comments, 38);
        assert_eq!(record.downloads, 6439);
    }
}
