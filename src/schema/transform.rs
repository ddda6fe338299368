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

//! The validating walk over a JSON value.
//!
//! The same walk runs in both directions: [`cast`] decodes wire JSON into the
//! internal field naming, [`uncast`] encodes internal JSON back to wire
//! naming. Both validate every value they visit and stop at the first
//! mismatch.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::schema::{Field, RecordSchema, Schema, SchemaError, SchemaRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Decode,
    Encode,
}

impl Direction {
    /// Returns the (source, target) key names of a field.
    fn names(self, field: &Field) -> (&'static str, &'static str) {
        match self {
            Direction::Decode => (field.wire, field.internal),
            Direction::Encode => (field.internal, field.wire),
        }
    }
}

/// Validates wire JSON against the named record and renames its fields to
/// their internal names.
pub(crate) fn cast(
    value: &Value,
    type_name: &'static str,
    registry: &SchemaRegistry,
) -> Result<Value, SchemaError> {
    Walk::new(registry, Direction::Decode).root(value, type_name)
}

/// Validates internal JSON against the named record and renames its fields to
/// their wire names.
pub(crate) fn uncast(
    value: &Value,
    type_name: &'static str,
    registry: &SchemaRegistry,
) -> Result<Value, SchemaError> {
    Walk::new(registry, Direction::Encode).root(value, type_name)
}

struct Walk<'r> {
    registry: &'r SchemaRegistry,
    direction: Direction,
}

impl<'r> Walk<'r> {
    fn new(registry: &'r SchemaRegistry, direction: Direction) -> Self {
        Self {
            registry,
            direction,
        }
    }

    fn root(&self, value: &Value, type_name: &'static str) -> Result<Value, SchemaError> {
        let schema = Schema::Ref(type_name);
        let output = self.transform(Some(value), &schema, None, "")?;

        // A present value never transforms into an absent one.
        Ok(output.unwrap_or(Value::Null))
    }

    /// Transforms a possibly absent value.
    ///
    /// `None` stands for a missing record field. Only [`Schema::Any`] accepts
    /// it, in which case the field stays absent in the output.
    fn transform(
        &self,
        value: Option<&Value>,
        schema: &Schema,
        key: Option<&str>,
        path: &str,
    ) -> Result<Option<Value>, SchemaError> {
        let invalid = || SchemaError::invalid(schema, value, key, path);

        match schema {
            Schema::Any => return Ok(value.cloned()),
            Schema::Never => return Err(invalid()),
            Schema::Ref(name) => {
                let record = self.registry.resolve(name)?;
                return self.transform_record(record, schema, value, key, path);
            }
            Schema::Record(record) => return self.transform_record(record, schema, value, key, path),
            Schema::Union(alternatives) => {
                for alternative in alternatives {
                    if let Ok(output) = self.transform(value, alternative, key, path) {
                        return Ok(output);
                    }
                }
                return Err(invalid());
            }
            _ => {}
        }

        let Some(present) = value else {
            return Err(invalid());
        };

        let output = match schema {
            Schema::Null if present.is_null() => Value::Null,
            Schema::String if present.is_string() => present.clone(),
            Schema::Number if present.is_number() => present.clone(),
            Schema::Boolean if present.is_boolean() => present.clone(),
            Schema::Date => transform_date(present).map(Value::String).ok_or_else(invalid)?,
            Schema::Enum(cases) => match present {
                Value::String(text) if cases.iter().any(|case| case == text) => present.clone(),
                _ => return Err(invalid()),
            },
            Schema::Array(items) => {
                let Value::Array(elements) = present else {
                    return Err(invalid());
                };

                let mut output = Vec::with_capacity(elements.len());
                for (index, element) in elements.iter().enumerate() {
                    let element_path = format!("{path}[{index}]");
                    let element = self.transform(Some(element), items, key, &element_path)?;
                    output.push(element.unwrap_or(Value::Null));
                }
                Value::Array(output)
            }
            _ => return Err(invalid()),
        };

        Ok(Some(output))
    }

    fn transform_record(
        &self,
        record: &RecordSchema,
        schema: &Schema,
        value: Option<&Value>,
        key: Option<&str>,
        path: &str,
    ) -> Result<Option<Value>, SchemaError> {
        let Some(Value::Object(input)) = value else {
            return Err(SchemaError::invalid(schema, value, key, path));
        };

        let mut output = Map::with_capacity(input.len());

        for field in &record.fields {
            let (source, target) = self.direction.names(field);
            let field_path = child_path(path, source);
            let transformed =
                self.transform(input.get(source), &field.schema, Some(source), &field_path)?;
            if let Some(transformed) = transformed {
                output.insert(target.to_string(), transformed);
            }
        }

        for (name, extra) in input {
            let declared = record
                .fields
                .iter()
                .any(|field| self.direction.names(field).0 == name.as_str());
            if declared {
                continue;
            }

            let field_path = child_path(path, name);
            let transformed =
                self.transform(Some(extra), &record.additional, Some(name), &field_path)?;
            if let Some(transformed) = transformed {
                output.insert(name.clone(), transformed);
            }
        }

        Ok(Some(Value::Object(output)))
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Validates a date string, normalising naive forms to RFC 3339 in UTC.
///
/// Numbers are rejected outright: a bare number would otherwise be read as a
/// timestamp and silently produce a date.
fn transform_date(value: &Value) -> Option<String> {
    let Value::String(text) = value else {
        return None;
    };

    if DateTime::parse_from_rfc3339(text).is_ok() {
        return Some(text.clone());
    }

    parse_naive(text).map(|naive| naive.and_utc().to_rfc3339())
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
