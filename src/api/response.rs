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

//! Response envelopes.
//!
//! The latest listing answers with a bare array of photos, search answers
//! with an object whose `results` array holds them. Both are reduced to the
//! element array before any photo is decoded.

use serde_json::Value;

use crate::{
    model::Photo,
    schema::{SchemaError, SchemaRegistry, convert},
};

pub(crate) fn extract_results(payload: Value) -> Result<Vec<Value>, SchemaError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut object) => match object.remove("results") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(SchemaError::UnexpectedEnvelope),
        },
        _ => Err(SchemaError::UnexpectedEnvelope),
    }
}

/// Parses and validates a response body into photos.
pub(crate) fn decode_page(body: &str, registry: &SchemaRegistry) -> Result<Vec<Photo>, SchemaError> {
    let payload: Value = serde_json::from_str(body).map_err(SchemaError::Syntax)?;
    let items = extract_results(payload)?;
    convert::photos_from_values(&items, registry)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{model::fixtures, schema::ExtraKeys};

    #[test]
    fn bare_arrays_and_result_objects_are_uniform() {
        let items = vec![json!(1), json!(2)];

        assert_eq!(extract_results(json!(items.clone())).unwrap(), items);
        assert_eq!(
            extract_results(json!({ "total": 2, "total_pages": 1, "results": items.clone() }))
                .unwrap(),
            items
        );
    }

    #[test]
    fn other_envelopes_are_rejected() {
        for payload in [
            json!({ "errors": ["OAuth error: The access token is invalid"] }),
            json!({ "results": "none" }),
            json!("photos"),
            json!(null),
        ] {
            assert!(matches!(
                extract_results(payload),
                Err(SchemaError::UnexpectedEnvelope)
            ));
        }
    }

    #[test]
    fn search_bodies_decode_to_photos() {
        let body = json!({
            "total": 2,
            "total_pages": 1,
            "results": [fixtures::photo_json("a"), fixtures::photo_json("b")],
        })
        .to_string();

        let photos = decode_page(&body, SchemaRegistry::photo(ExtraKeys::Accept)).unwrap();
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn malformed_bodies_are_syntax_errors() {
        let err = decode_page("<html>", SchemaRegistry::photo(ExtraKeys::Accept)).unwrap_err();
        assert!(matches!(err, SchemaError::Syntax(_)));
    }
}
