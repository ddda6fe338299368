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

//! Application configuration.
//!
//! This module manages the application configuration file and the access
//! credential. The credential is never written to the configuration file, it
//! is only ever read from the environment.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::GalleryError, model::search::PaginationPolicy, schema::ExtraKeys};

const CONFIG_NAME: &str = "unsplash-gallery";

pub(crate) const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_url: String,
    /// Stop requesting further pages once a page comes back empty.
    pub stop_on_empty_page: bool,
    /// Reject payloads carrying keys the photo records do not declare.
    pub strict_schema: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: "https://api.unsplash.com/".to_string(),
            stop_on_empty_page: true,
            strict_schema: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn pagination(&self) -> PaginationPolicy {
        if self.stop_on_empty_page {
            PaginationPolicy::StopOnEmptyPage
        } else {
            PaginationPolicy::Endless
        }
    }

    pub(crate) fn extra_keys(&self) -> ExtraKeys {
        if self.strict_schema {
            ExtraKeys::Reject
        } else {
            ExtraKeys::Accept
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// The directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}

/// An Unsplash application access key.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct AccessKey(String);

impl AccessKey {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

pub(crate) fn access_key_from_env() -> Result<AccessKey, GalleryError> {
    access_key_from(|name| std::env::var(name).ok())
}

/// Reads the access key through `lookup`; a missing or blank value is the same
/// as no credential at all.
fn access_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<AccessKey, GalleryError> {
    match lookup(ACCESS_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => Ok(AccessKey::new(key.trim())),
        _ => Err(GalleryError::CredentialRequired),
    }
}
