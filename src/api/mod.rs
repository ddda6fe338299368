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

//! Unsplash API access.
//!
//! Requests are plain `GET`s authenticated with the `client_id` query
//! parameter. The client is blocking and is only ever used from the background
//! task worker.

pub(crate) mod request;
pub(crate) mod response;

pub(crate) use request::{RequestDescriptor, build_request_descriptor, parse_base_url};

use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::{error::GalleryError, model::Photo, schema::SchemaRegistry};

const API_VERSION: &str = "v1";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub(crate) struct UnsplashClient {
    http: Client,
    registry: &'static SchemaRegistry,
}

impl UnsplashClient {
    pub(crate) fn new(registry: &'static SchemaRegistry) -> Result<Self, GalleryError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { http, registry })
    }

    /// Fetches one page and decodes every photo on it.
    ///
    /// A non-success status is an error even if the body is valid JSON.
    #[instrument(skip_all, fields(request = %descriptor))]
    pub(crate) fn fetch_page(&self, descriptor: &RequestDescriptor) -> Result<Vec<Photo>, GalleryError> {
        let response = self
            .http
            .get(descriptor.url.clone())
            .header("Accept-Version", API_VERSION)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                status,
                url: descriptor.to_string(),
            });
        }

        let body = response.text()?;
        let photos = response::decode_page(&body, self.registry)?;

        debug!(status = status.as_u16(), photos = photos.len(), "page fetched");

        Ok(photos)
    }
}
