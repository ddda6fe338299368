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

//! Runtime validation of API payloads.
//!
//! Untyped JSON received from the photo API is checked against a table of
//! named schemas before it is allowed to become a typed [`Photo`] record.
//! Validation never coerces or drops data: a value either matches its schema
//! exactly or the whole conversion fails with a [`SchemaError`] describing
//! the expected shape, the offending value and where it was found.
//!
//! # Organization
//!
//! * [`Schema`]: The closed set of schema variants.
//! * [`registry`]: Named record definitions for the photo API.
//! * [`transform`]: The validating walk, in both decode and encode direction.
//! * [`convert`]: Typed entry points to and from [`Photo`].
//!
//! [`Photo`]: crate::model::Photo

pub(crate) mod convert;
pub(crate) mod registry;
pub(crate) mod transform;

use std::fmt;

use serde_json::Value;
use thiserror::Error;

pub(crate) use registry::{ExtraKeys, PHOTO, SchemaRegistry};
pub(crate) use transform::{cast, uncast};

/// Longest rendering of an offending value included in an error message.
const MAX_FOUND_LEN: usize = 80;

/// A schema that a JSON value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Schema {
    /// Accepts any value, including an absent one.
    Any,
    /// Rejects every value.
    Never,
    /// Exactly `null`.
    Null,
    String,
    Number,
    Boolean,
    /// A string holding a calendar date and time.
    Date,
    Array(Box<Schema>),
    /// One of a fixed set of string literals.
    Enum(&'static [&'static str]),
    /// The first alternative that accepts the value wins.
    Union(Vec<Schema>),
    Record(RecordSchema),
    /// A named record, looked up in the [`SchemaRegistry`].
    Ref(&'static str),
}

impl Schema {
    pub(crate) fn array(items: Schema) -> Self {
        Schema::Array(Box::new(items))
    }

    pub(crate) fn nullable(schema: Schema) -> Self {
        Schema::Union(vec![Schema::Null, schema])
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Any => f.write_str("any"),
            Schema::Never => f.write_str("nothing"),
            Schema::Null => f.write_str("null"),
            Schema::String => f.write_str("string"),
            Schema::Number => f.write_str("number"),
            Schema::Boolean => f.write_str("boolean"),
            Schema::Date => f.write_str("date"),
            Schema::Array(items) => write!(f, "array of {items}"),
            Schema::Enum(cases) => {
                let cases: Vec<String> = cases.iter().map(|c| format!("{c:?}")).collect();
                write!(f, "one of [{}]", cases.join(", "))
            }
            Schema::Union(alternatives) => {
                let alternatives: Vec<String> = alternatives.iter().map(|a| a.to_string()).collect();
                write!(f, "any of [{}]", alternatives.join(", "))
            }
            Schema::Record(_) => f.write_str("object"),
            Schema::Ref(name) => f.write_str(name),
        }
    }
}

/// A single declared field of a record.
///
/// The wire name is what appears in API JSON, the internal name is what the
/// typed model serializes as. For the photo API both are identical, but the
/// walk honours the distinction in each direction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Field {
    pub(crate) wire: &'static str,
    pub(crate) internal: &'static str,
    pub(crate) schema: Schema,
}

impl Field {
    pub(crate) fn new(name: &'static str, schema: Schema) -> Self {
        Self {
            wire: name,
            internal: name,
            schema,
        }
    }
}

/// Declared fields plus the schema applied to every undeclared key.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordSchema {
    pub(crate) fields: Vec<Field>,
    pub(crate) additional: Box<Schema>,
}

impl RecordSchema {
    pub(crate) fn new(fields: Vec<Field>, additional: Schema) -> Self {
        Self {
            fields,
            additional: Box::new(additional),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SchemaError {
    #[error("invalid value for key \"{key}\" at `{path}`: expected {expected} but got {found}")]
    InvalidField {
        key: String,
        path: String,
        expected: String,
        found: String,
    },

    #[error("invalid value {found}: expected {expected}")]
    InvalidValue { expected: String, found: String },

    #[error("no schema registered for type \"{0}\"")]
    UnknownType(String),

    #[error("response is neither a photo array nor an object with a `results` array")]
    UnexpectedEnvelope,

    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("validated value does not fit the typed record: {0}")]
    Conversion(#[source] serde_json::Error),
}

impl SchemaError {
    pub(crate) fn invalid(
        expected: &Schema,
        found: Option<&Value>,
        key: Option<&str>,
        path: &str,
    ) -> Self {
        let expected = expected.to_string();
        let found = describe(found);
        match key {
            Some(key) => SchemaError::InvalidField {
                key: key.to_string(),
                path: path.to_string(),
                expected,
                found,
            },
            None => SchemaError::InvalidValue { expected, found },
        }
    }

    /// The innermost record key the failure was found under, if any.
    pub(crate) fn key(&self) -> Option<&str> {
        match self {
            SchemaError::InvalidField { key, .. } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn path(&self) -> Option<&str> {
        match self {
            SchemaError::InvalidField { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Renders an offending value for an error message; absent values read as
/// `undefined`.
fn describe(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "undefined".to_string();
    };

    let rendered = value.to_string();
    if rendered.chars().count() <= MAX_FOUND_LEN {
        return rendered;
    }

    let truncated: String = rendered.chars().take(MAX_FOUND_LEN).collect();
    format!("{truncated}...")
}
