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
//! This module defines the photo records received from the image API. They
//! are plain values: created only by validating an API payload (see
//! [`crate::schema::convert`]), never mutated afterwards, and owned by
//! whatever list holds them.
//!
//! Every record keeps the keys it does not declare in an `extra` map so that
//! encoding a record reproduces the payload it came from.

#[cfg(test)]
pub(crate) mod fixtures;
pub(crate) mod search;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};

/// A point in time as the API wrote it.
///
/// `2024-02-11T09:14:02Z` and `2024-02-11T09:14:02+00:00` are the same
/// instant, but a record is encoded with the exact text it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Timestamp {
    instant: DateTime<FixedOffset>,
    text: String,
}

impl Timestamp {
    pub(crate) fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            instant: DateTime::parse_from_rfc3339(text)?,
            text: text.to_string(),
        })
    }

    pub(crate) fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Timestamp::parse(&text).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Photo {
    pub(crate) id: String,
    pub(crate) created_at: Timestamp,
    pub(crate) updated_at: Timestamp,
    pub(crate) promoted_at: Option<Timestamp>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) color: String,
    pub(crate) blur_hash: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) alt_description: Option<String>,
    pub(crate) urls: Urls,
    pub(crate) links: PhotoLinks,
    pub(crate) categories: Vec<Value>,
    pub(crate) likes: u64,
    pub(crate) liked_by_user: bool,
    pub(crate) current_user_collections: Vec<Value>,
    pub(crate) sponsorship: Option<Sponsorship>,
    pub(crate) user: User,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl Photo {
    /// The best available caption for the photo.
    pub(crate) fn caption(&self) -> &str {
        self.alt_description
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("Untitled")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Urls {
    pub(crate) raw: String,
    pub(crate) full: String,
    pub(crate) regular: String,
    pub(crate) small: String,
    pub(crate) thumb: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PhotoLinks {
    #[serde(rename = "self")]
    pub(crate) api: String,
    pub(crate) html: String,
    pub(crate) download: String,
    pub(crate) download_location: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Sponsorship {
    pub(crate) impression_urls: Vec<String>,
    pub(crate) tagline: String,
    pub(crate) tagline_url: String,
    pub(crate) sponsor: User,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

/// The uploader of a photo, or the sponsor of a promoted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) updated_at: Timestamp,
    pub(crate) username: String,
    pub(crate) name: String,
    pub(crate) first_name: String,
    pub(crate) last_name: Option<String>,
    pub(crate) twitter_username: Option<String>,
    pub(crate) portfolio_url: Option<String>,
    pub(crate) bio: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) links: UserLinks,
    pub(crate) profile_image: ProfileImage,
    pub(crate) instagram_username: Option<String>,
    pub(crate) total_collections: u64,
    pub(crate) total_likes: u64,
    pub(crate) total_photos: u64,
    pub(crate) accepted_tos: bool,
    pub(crate) for_hire: bool,
    pub(crate) social: Social,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserLinks {
    #[serde(rename = "self")]
    pub(crate) api: String,
    pub(crate) html: String,
    pub(crate) photos: String,
    pub(crate) likes: String,
    pub(crate) portfolio: String,
    pub(crate) following: String,
    pub(crate) followers: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProfileImage {
    pub(crate) small: String,
    pub(crate) medium: String,
    pub(crate) large: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Social {
    pub(crate) instagram_username: Option<String>,
    pub(crate) portfolio_url: Option<String>,
    pub(crate) twitter_username: Option<String>,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}
