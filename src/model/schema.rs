//! Declarative field schemas.
//!
//! Every model carries a `&'static [Field]` describing its wire names, the
//! JSON kind of each value and whether the field is required. Raw bodies
//! are checked against the schema before serde runs so that a failing
//! response reports *all* of its problems at once instead of the first one
//! serde happens to trip on.

use serde_json::{Map, Value};

use super::de::{float_from_value, int_from_value};
use crate::datetime::timestamp_from_value;
use crate::error::{FieldError, FieldErrorKind};

/// Whether a field has to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absent or `null` is an error.
    Required,
    /// Absent or `null` becomes `None`.
    Optional,
    /// Absent or `null` becomes the model's default value.
    Defaulted,
}

/// Accepted JSON shape of a field value.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Str,
    /// Integer number or integer string.
    Int,
    /// Number or numeric string.
    Float,
    Bool,
    /// Anything [`crate::datetime::timestamp_from_value`] accepts.
    Timestamp,
    /// A string or a list of strings.
    StringOrList,
    Strings,
    Object,
    Nested(&'static [Field]),
    Many(&'static [Field]),
    Any,
}

impl Kind {
    fn describe(self) -> &'static str {
        match self {
            Kind::Str => "string",
            Kind::Int => "integer",
            Kind::Float => "number",
            Kind::Bool => "bool",
            Kind::Timestamp => "timestamp",
            Kind::StringOrList => "string or list of strings",
            Kind::Strings => "list of strings",
            Kind::Object | Kind::Nested(_) => "object",
            Kind::Many(_) => "list of objects",
            Kind::Any => "any value",
        }
    }
}

/// One entry of a model schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Rust-side (snake_case) name, also accepted on input.
    pub name: &'static str,
    /// Upstream wire name.
    pub wire: &'static str,
    pub kind: Kind,
    pub presence: Presence,
}

impl Field {
    pub const fn required(name: &'static str, wire: &'static str, kind: Kind) -> Self {
        Self {
            name,
            wire,
            kind,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, wire: &'static str, kind: Kind) -> Self {
        Self {
            name,
            wire,
            kind,
            presence: Presence::Optional,
        }
    }

    pub const fn defaulted(name: &'static str, wire: &'static str, kind: Kind) -> Self {
        Self {
            name,
            wire,
            kind,
            presence: Presence::Defaulted,
        }
    }

    /// Value under the wire name, falling back to the Rust name.
    fn lookup<'v>(&self, object: &'v Map<String, Value>) -> Option<&'v Value> {
        object.get(self.wire).or_else(|| object.get(self.name))
    }
}

/// Validate `value` against `fields`, returning every error found.
pub fn validate(fields: &[Field], value: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_object(fields, value, "", &mut errors);
    errors
}

fn check_object(fields: &[Field], value: &Value, prefix: &str, errors: &mut Vec<FieldError>) {
    let Some(object) = value.as_object() else {
        errors.push(wrong_type(prefix, "object", value));
        return;
    };

    for field in fields {
        let path = if prefix.is_empty() {
            field.wire.to_string()
        } else {
            format!("{prefix}.{}", field.wire)
        };

        match (field.lookup(object), field.presence) {
            (None, Presence::Required) => errors.push(FieldError {
                path,
                kind: FieldErrorKind::Missing,
            }),
            (Some(Value::Null), Presence::Required) => {
                errors.push(wrong_type(&path, field.kind.describe(), &Value::Null))
            }
            (None, _) | (Some(Value::Null), _) => {}
            (Some(found), _) => check_kind(field.kind, found, &path, errors),
        }
    }
}

fn check_kind(kind: Kind, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
    let ok = match kind {
        Kind::Str => value.is_string(),
        Kind::Int => int_from_value(value).is_ok(),
        Kind::Float => float_from_value(value).is_ok(),
        Kind::Bool => value.is_boolean(),
        Kind::Timestamp => match value {
            Value::String(_) | Value::Number(_) => {
                if timestamp_from_value(value).is_err() {
                    errors.push(FieldError {
                        path: path.to_string(),
                        kind: FieldErrorKind::BadTimestamp(value.to_string()),
                    });
                }
                true
            }
            _ => false,
        },
        Kind::StringOrList => match value {
            Value::String(_) => true,
            Value::Array(items) => items.iter().all(Value::is_string),
            _ => false,
        },
        Kind::Strings => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
        Kind::Object => value.is_object(),
        Kind::Nested(fields) => {
            check_object(fields, value, path, errors);
            true
        }
        Kind::Many(fields) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    check_object(fields, item, &format!("{path}[{index}]"), errors);
                }
                true
            }
            None => false,
        },
        Kind::Any => true,
    };

    if !ok {
        errors.push(wrong_type(path, kind.describe(), value));
    }
}

fn wrong_type(path: &str, expected: &'static str, found: &Value) -> FieldError {
    FieldError {
        path: path.to_string(),
        kind: FieldErrorKind::WrongType {
            expected,
            found: json_type(found),
        },
    }
}

/// JSON type name of a value, for error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
