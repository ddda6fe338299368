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

//! Gallery failures.

use thiserror::Error;

use crate::schema::SchemaError;

pub(crate) const DEVELOPERS_URL: &str = "https://unsplash.com/developers";

#[derive(Debug, Error)]
pub(crate) enum GalleryError {
    #[error(
        "an Unsplash access key is required: set UNSPLASH_ACCESS_KEY (register an application at https://unsplash.com/developers)"
    )]
    CredentialRequired,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered, but not with success. `url` has its credential
    /// masked.
    #[error("request to {url} failed with {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("unexpected response: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid API address: {0}")]
    Url(#[from] url::ParseError),

    #[error("background worker has stopped")]
    WorkerStopped,
}

impl From<reqwest::Error> for GalleryError {
    /// Strips the request URL, which carries the access key, before the error
    /// can be displayed or logged.
    fn from(err: reqwest::Error) -> Self {
        GalleryError::Network(err.without_url())
    }
}

impl GalleryError {
    /// Failures that the user must fix outside the application; retrying will
    /// not help.
    pub(crate) fn is_configuration(&self) -> bool {
        matches!(self, GalleryError::CredentialRequired | GalleryError::Url(_))
    }
}
