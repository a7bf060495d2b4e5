//! User account records for the college backend and the field rules that
//! every incoming record must pass before it reaches storage or auth.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod users;

use serde::de::DeserializeOwned;
use tracing::debug;

pub use error::{FieldError, SchemaError, ValidationErrors};
pub use users::Validate;

/// Decodes a JSON document into `T` and runs its field validators.
pub fn parse<T>(json: &str) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_str(json).map_err(|e| {
        debug!(kind = std::any::type_name::<T>(), error = %e, "malformed record");
        e
    })?;
    checked(record)
}

/// Same as [`parse`] for an already-decoded JSON value.
pub fn from_value<T>(value: serde_json::Value) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_value(value).map_err(|e| {
        debug!(kind = std::any::type_name::<T>(), error = %e, "malformed record");
        e
    })?;
    checked(record)
}

fn checked<T: Validate>(record: T) -> Result<T, SchemaError> {
    if let Err(errors) = record.validate() {
        debug!(
            kind = std::any::type_name::<T>(),
            errors = errors.len(),
            "record rejected"
        );
        return Err(SchemaError::Invalid(errors));
    }
    Ok(record)
}
