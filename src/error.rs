use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field error of one record, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First error reported for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Body shape handed to the transport layer, one entry per field error.
    pub fn detail(&self) -> Value {
        let detail: Vec<Value> = self
            .0
            .iter()
            .map(|e| json!({ "loc": [e.field], "msg": e.message }))
            .collect();
        json!({ "detail": detail })
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

/// Failure to turn an untrusted document into a validated record.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Wrong JSON type, missing required field, unknown enum value.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl SchemaError {
    pub fn detail(&self) -> Value {
        match self {
            SchemaError::Malformed(e) => {
                json!({ "detail": [{ "loc": ["body"], "msg": e.to_string() }] })
            }
            SchemaError::Invalid(errors) => errors.detail(),
        }
    }
}

impl IntoResponse for SchemaError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self.detail())).into_response()
    }
}
