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

//! Named record schemas for the photo API.
//!
//! Records refer to each other by name through [`Schema::Ref`], so the table
//! can describe the user record once and use it both for the photo's author
//! and for a sponsorship's sponsor.
//!
//! By default undeclared keys are accepted and passed through (`additional`
//! is [`Schema::Any`]): the live API adds fields over time and a new field
//! must not take the whole gallery down. The strict table rejects them with
//! [`Schema::Never`].

use std::{collections::HashMap, sync::LazyLock};

use crate::schema::{Field, RecordSchema, Schema, SchemaError};

pub(crate) const PHOTO: &str = "Photo";
const PHOTO_LINKS: &str = "PhotoLinks";
const SPONSORSHIP: &str = "Sponsorship";
const USER: &str = "User";
const USER_LINKS: &str = "UserLinks";
const PROFILE_IMAGE: &str = "ProfileImage";
const SOCIAL: &str = "Social";
const URLS: &str = "Urls";

static LENIENT: LazyLock<SchemaRegistry> =
    LazyLock::new(|| SchemaRegistry::photo_api(ExtraKeys::Accept));
static STRICT: LazyLock<SchemaRegistry> =
    LazyLock::new(|| SchemaRegistry::photo_api(ExtraKeys::Reject));

/// What a record does with keys it does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ExtraKeys {
    #[default]
    Accept,
    Reject,
}

impl ExtraKeys {
    fn schema(self) -> Schema {
        match self {
            ExtraKeys::Accept => Schema::Any,
            ExtraKeys::Reject => Schema::Never,
        }
    }
}

/// Name to record table used to resolve [`Schema::Ref`].
#[derive(Debug, Default)]
pub(crate) struct SchemaRegistry {
    records: HashMap<&'static str, RecordSchema>,
}

impl SchemaRegistry {
    /// The shared registry describing photo API payloads, built on first use.
    pub(crate) fn photo(extra_keys: ExtraKeys) -> &'static SchemaRegistry {
        match extra_keys {
            ExtraKeys::Accept => &LENIENT,
            ExtraKeys::Reject => &STRICT,
        }
    }

    pub(crate) fn register(&mut self, name: &'static str, record: RecordSchema) {
        self.records.insert(name, record);
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<&RecordSchema, SchemaError> {
        self.records
            .get(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
    }

    fn photo_api(extra_keys: ExtraKeys) -> Self {
        let mut registry = Self::default();
        let record = |fields: Vec<Field>| RecordSchema::new(fields, extra_keys.schema());
        let strings = |names: &[&'static str]| {
            record(
                names
                    .iter()
                    .map(|name| Field::new(*name, Schema::String))
                    .collect(),
            )
        };

        registry.register(
            PHOTO,
            record(vec![
                Field::new("id", Schema::String),
                Field::new("created_at", Schema::Date),
                Field::new("updated_at", Schema::Date),
                Field::new("promoted_at", Schema::nullable(Schema::Date)),
                Field::new("width", Schema::Number),
                Field::new("height", Schema::Number),
                Field::new("color", Schema::String),
                Field::new("blur_hash", Schema::nullable(Schema::String)),
                Field::new("description", Schema::nullable(Schema::String)),
                Field::new("alt_description", Schema::nullable(Schema::String)),
                Field::new("urls", Schema::Ref(URLS)),
                Field::new("links", Schema::Ref(PHOTO_LINKS)),
                Field::new("categories", Schema::array(Schema::Any)),
                Field::new("likes", Schema::Number),
                Field::new("liked_by_user", Schema::Boolean),
                Field::new("current_user_collections", Schema::array(Schema::Any)),
                Field::new("sponsorship", Schema::nullable(Schema::Ref(SPONSORSHIP))),
                Field::new("user", Schema::Ref(USER)),
            ]),
        );

        registry.register(
            PHOTO_LINKS,
            strings(&["self", "html", "download", "download_location"]),
        );

        registry.register(
            SPONSORSHIP,
            record(vec![
                Field::new("impression_urls", Schema::array(Schema::String)),
                Field::new("tagline", Schema::String),
                Field::new("tagline_url", Schema::String),
                Field::new("sponsor", Schema::Ref(USER)),
            ]),
        );

        registry.register(
            USER,
            record(vec![
                Field::new("id", Schema::String),
                Field::new("updated_at", Schema::Date),
                Field::new("username", Schema::String),
                Field::new("name", Schema::String),
                Field::new("first_name", Schema::String),
                Field::new("last_name", Schema::nullable(Schema::String)),
                Field::new("twitter_username", Schema::nullable(Schema::String)),
                Field::new("portfolio_url", Schema::nullable(Schema::String)),
                Field::new("bio", Schema::nullable(Schema::String)),
                Field::new("location", Schema::nullable(Schema::String)),
                Field::new("links", Schema::Ref(USER_LINKS)),
                Field::new("profile_image", Schema::Ref(PROFILE_IMAGE)),
                Field::new("instagram_username", Schema::nullable(Schema::String)),
                Field::new("total_collections", Schema::Number),
                Field::new("total_likes", Schema::Number),
                Field::new("total_photos", Schema::Number),
                Field::new("accepted_tos", Schema::Boolean),
                Field::new("for_hire", Schema::Boolean),
                Field::new("social", Schema::Ref(SOCIAL)),
            ]),
        );

        registry.register(
            USER_LINKS,
            strings(&[
                "self",
                "html",
                "photos",
                "likes",
                "portfolio",
                "following",
                "followers",
            ]),
        );

        registry.register(PROFILE_IMAGE, strings(&["small", "medium", "large"]));

        registry.register(
            SOCIAL,
            record(vec![
                Field::new("instagram_username", Schema::nullable(Schema::String)),
                Field::new("portfolio_url", Schema::nullable(Schema::String)),
                Field::new("twitter_username", Schema::nullable(Schema::String)),
            ]),
        );

        registry.register(URLS, strings(&["raw", "full", "regular", "small", "thumb"]));

        registry
    }
}
