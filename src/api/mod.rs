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

//! Remote image search API access.
//!
//! This module issues the per-page search requests against the configured
//! endpoint and decodes the JSON responses into [`ResultPage`] values. One
//! GET per page, no retries, no caching; requests run on the command worker
//! thread, never on the UI thread.

use thiserror::Error;

use crate::{
    config::AppConfig,
    model::{ResultPage, session::PAGE_SIZE},
};

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("search request rejected with HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed search response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status carried by the error, when the server answered at all.
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => Self::Status {
                status,
                message: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

/// Client for the remote image search service.
pub(crate) struct ImageApi {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl ImageApi {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            agent: ureq::agent(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetches one page of results for a search term.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] when the server answers with a non-success
    /// status (the service reports pagination past the end as HTTP 400),
    /// [`ApiError::Transport`] when the request never completes, and
    /// [`ApiError::Decode`] when the payload does not match the expected
    /// shape.
    pub(crate) fn fetch_page(&self, term: &str, page: u64) -> Result<ResultPage, ApiError> {
        let url = self.page_url(term, page);
        let response = self.agent.get(&url).call()?;
        response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // The service expects every parameter on every request; only `page` and
    // `q` vary between calls.
    fn page_url(&self, term: &str, page: u64) -> String {
        format!(
            "{}?key={}&image_type=photo&orientation=horizontal&safesearch=true&per_page={}&page={}&q={}",
            self.base_url,
            self.api_key,
            PAGE_SIZE,
            page,
            urlencoding::encode(term),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_api() -> ImageApi {
        ImageApi::new(&AppConfig {
            version: 1,
            api_key: "testkey".to_string(),
            base_url: "https://images.example/api/".to_string(),
        })
    }

    #[test]
    fn test_page_url_carries_all_parameters() {
        let url = test_api().page_url("cats", 3);
        assert_eq!(
            url,
            "https://images.example/api/?key=testkey&image_type=photo&orientation=horizontal\
             &safesearch=true&per_page=40&page=3&q=cats"
        );
    }

    #[test]
    fn test_page_url_encodes_search_term() {
        let url = test_api().page_url("cute cats & dogs", 1);
        assert!(url.ends_with("&q=cute%20cats%20%26%20dogs"));
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            status: 400,
            message: "Bad Request".to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(ApiError::Transport("timed out".to_string()).status(), None);
    }
}
