//! Argument binding: validates an untyped argument bundle against a schema.

use serde_json::{Map, Value};
use thiserror::Error;

use super::schema::{ParamKind, ParamLocation, ParameterSpec, SchemaDescriptor};

/// Why a bundle could not be bound to a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Invalid arguments object")]
    NotAnObject,

    #[error("Missing required {}: {key}", label(.location))]
    MissingRequired {
        key: String,
        location: ParamLocation,
    },

    #[error("Invalid {}: {key}", label(.location))]
    InvalidType {
        key: String,
        location: ParamLocation,
        expected: ParamKind,
    },
}

impl BindingError {
    /// The parameter key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NotAnObject => None,
            Self::MissingRequired { key, .. } | Self::InvalidType { key, .. } => Some(key),
        }
    }
}

fn label(location: &ParamLocation) -> &'static str {
    match location {
        ParamLocation::Path => "path parameter",
        ParamLocation::Query => "parameter",
    }
}

/// A parameter that passed binding, with its value rendered as request text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArgument {
    pub key: &'static str,
    pub location: ParamLocation,
    pub value: String,
}

/// The subset of declared parameters present in a bundle, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArguments {
    arguments: Vec<BoundArgument>,
}

impl BoundArguments {
    pub fn iter(&self) -> impl Iterator<Item = &BoundArgument> {
        self.arguments.iter()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|arg| arg.key == key)
            .map(|arg| arg.value.as_str())
    }

    /// Bound query parameters in declaration order.
    pub fn query(&self) -> impl Iterator<Item = &BoundArgument> {
        self.arguments
            .iter()
            .filter(|arg| arg.location == ParamLocation::Query)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// Bind an argument bundle to a schema.
///
/// Required parameters must be present and non-null. Present values must have
/// the coarse shape of their declared kind. Undeclared keys are ignored and
/// absent optional parameters are simply left out.
pub fn bind(bundle: &Value, schema: &SchemaDescriptor) -> Result<BoundArguments, BindingError> {
    let args = bundle.as_object().ok_or(BindingError::NotAnObject)?;
    bind_object(args, schema)
}

/// Bind an argument map that is already known to be an object.
pub fn bind_object(
    args: &Map<String, Value>,
    schema: &SchemaDescriptor,
) -> Result<BoundArguments, BindingError> {
    let mut arguments = Vec::with_capacity(args.len());

    for spec in schema.parameters() {
        match args.get(spec.key).filter(|v| !v.is_null()) {
            Some(value) => {
                let rendered = render(value, spec.kind).ok_or_else(|| BindingError::InvalidType {
                    key: spec.key.to_string(),
                    location: spec.location,
                    expected: spec.kind,
                })?;
                arguments.push(bound(spec, rendered));
            }
            None if spec.required => {
                return Err(BindingError::MissingRequired {
                    key: spec.key.to_string(),
                    location: spec.location,
                });
            }
            None => {}
        }
    }

    Ok(BoundArguments { arguments })
}

fn bound(spec: &ParameterSpec, value: String) -> BoundArgument {
    BoundArgument {
        key: spec.key,
        location: spec.location,
        value,
    }
}

/// Render a value as request text if it fits the declared kind.
fn render(value: &Value, kind: ParamKind) -> Option<String> {
    match kind {
        ParamKind::String => scalar(value),
        ParamKind::Number => match value {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|_| s.clone()),
            _ => None,
        },
        ParamKind::Boolean => match value {
            Value::Bool(b) => Some(b.to_string()),
            Value::String(s) if s == "true" || s == "false" => Some(s.clone()),
            _ => None,
        },
        ParamKind::Array => match value {
            Value::Array(items) => items
                .iter()
                .map(scalar)
                .collect::<Option<Vec<_>>>()
                .map(|items| items.join(",")),
            Value::String(s) => Some(s.clone()),
            _ => None,
        },
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
