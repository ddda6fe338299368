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

//! Typed conversions between JSON and [`Photo`].
//!
//! Validation runs first, so by the time `serde` maps a value onto the typed
//! record its shape is already known to be right. The only failure left for
//! `serde` is a number that does not fit its integer field, which is reported
//! as [`SchemaError::Conversion`] rather than clamped.

use serde_json::Value;

use crate::{
    model::Photo,
    schema::{PHOTO, SchemaError, SchemaRegistry, cast, uncast},
};

impl Photo {
    /// Decodes one element of an API response.
    pub(crate) fn from_value(value: &Value, registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let validated = cast(value, PHOTO, registry)?;
        serde_json::from_value(validated).map_err(SchemaError::Conversion)
    }

    /// Encodes the photo back into API JSON.
    pub(crate) fn to_value(&self, registry: &SchemaRegistry) -> Result<Value, SchemaError> {
        let internal = serde_json::to_value(self).map_err(SchemaError::Conversion)?;
        uncast(&internal, PHOTO, registry)
    }
}

/// Decodes every element of a response page; one bad element fails the page.
pub(crate) fn photos_from_values(
    values: &[Value],
    registry: &SchemaRegistry,
) -> Result<Vec<Photo>, SchemaError> {
    values
        .iter()
        .map(|value| Photo::from_value(value, registry))
        .collect()
}

pub(crate) fn photo_from_json(text: &str, registry: &SchemaRegistry) -> Result<Photo, SchemaError> {
    let value: Value = serde_json::from_str(text).map_err(SchemaError::Syntax)?;
    Photo::from_value(&value, registry)
}

pub(crate) fn photo_to_json(photo: &Photo, registry: &SchemaRegistry) -> Result<String, SchemaError> {
    let value = photo.to_value(registry)?;
    serde_json::to_string_pretty(&value).map_err(SchemaError::Conversion)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{model::fixtures, schema::ExtraKeys};

    fn lenient() -> &'static SchemaRegistry {
        SchemaRegistry::photo(ExtraKeys::Accept)
    }

    #[test]
    fn well_formed_photo_round_trips() {
        let json = fixtures::photo_json("Dwu85P9SOIk");

        let photo = Photo::from_value(&json, lenient()).unwrap();
        assert_eq!(photo.id, "Dwu85P9SOIk");
        assert_eq!(photo.width, 5245);
        assert_eq!(photo.promoted_at, None);
        assert_eq!(photo.user.last_name, None);
        assert_eq!(photo.links.html, "https://unsplash.com/photos/Dwu85P9SOIk");
        assert_eq!(photo.extra["slug"], json!("harbour-at-dawn-Dwu85P9SOIk"));

        assert_eq!(photo.to_value(lenient()).unwrap(), json);
    }

    #[test]
    fn utc_dates_round_trip_unchanged() {
        let mut json = fixtures::photo_json("z");
        json["updated_at"] = json!("2024-02-11T09:14:02Z");
        json["promoted_at"] = json!("2024-02-12T00:00:00.125Z");

        let photo = Photo::from_value(&json, lenient()).unwrap();

        assert_eq!(photo.to_value(lenient()).unwrap(), json);
    }

    #[test]
    fn sponsored_photo_round_trips() {
        let json = fixtures::sponsored_photo_json("sp0n");

        let photo = Photo::from_value(&json, lenient()).unwrap();
        let sponsorship = photo.sponsorship.as_ref().unwrap();
        assert_eq!(sponsorship.sponsor.username, "brand");

        assert_eq!(photo.to_value(lenient()).unwrap(), json);
    }

    #[test]
    fn missing_urls_is_named() {
        let mut json = fixtures::photo_json("a");
        json.as_object_mut().unwrap().remove("urls");

        let err = Photo::from_value(&json, lenient()).unwrap_err();
        assert_eq!(err.key(), Some("urls"));
        assert!(err.to_string().contains("\"urls\""), "{err}");
    }

    #[test]
    fn numeric_date_is_rejected() {
        let mut json = fixtures::photo_json("a");
        json["updated_at"] = json!(12345);

        let err = Photo::from_value(&json, lenient()).unwrap_err();
        assert_eq!(err.key(), Some("updated_at"));
    }

    #[test]
    fn nested_user_fields_are_checked() {
        let mut json = fixtures::photo_json("a");
        json["user"]["links"]["html"] = json!(null);

        let err = Photo::from_value(&json, lenient()).unwrap_err();
        assert_eq!(err.path(), Some("user.links.html"));
    }

    #[test]
    fn strict_registry_rejects_undeclared_keys() {
        let json = fixtures::photo_json("a");
        let err = Photo::from_value(&json, SchemaRegistry::photo(ExtraKeys::Reject)).unwrap_err();
        assert_eq!(err.key(), Some("slug"));
    }

    #[test]
    fn fractional_dimension_fails_conversion() {
        let mut json = fixtures::photo_json("a");
        json["width"] = json!(10.5);

        let err = Photo::from_value(&json, lenient()).unwrap_err();
        assert!(matches!(err, SchemaError::Conversion(_)), "{err}");
    }

    #[test]
    fn one_bad_element_fails_the_page() {
        let mut bad = fixtures::photo_json("b");
        bad["liked_by_user"] = json!("no");

        let page = vec![fixtures::photo_json("a"), bad];
        assert!(photos_from_values(&page, lenient()).is_err());

        let page = vec![fixtures::photo_json("a"), fixtures::photo_json("c")];
        let photos = photos_from_values(&page, lenient()).unwrap();
        assert_eq!(photos.len(), 2);
    }

    #[test]
    fn pretty_json_is_wire_json() {
        let photo = fixtures::photo("a");
        let text = photo_to_json(&photo, lenient()).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, fixtures::photo_json("a"));

        assert_eq!(photo_from_json(&text, lenient()).unwrap(), photo);
    }

    #[test]
    fn text_that_is_not_json_is_a_syntax_error() {
        let err = photo_from_json("{\"id\":", lenient()).unwrap_err();
        assert!(matches!(err, SchemaError::Syntax(_)));
    }
}
