use thiserror::Error;

use crate::validate::FieldErrors;
use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Per-field validation errors; surfaces as HTTP 400 with the field map.
    #[error("validation failed")]
    Validation(FieldErrors),
    /// Anything else; `kind` is a category name safe to echo to the caller,
    /// `detail` is logged server-side only.
    #[error("{kind}: {detail}")]
    Storage { kind: String, detail: String },
}

impl ServiceError {
    pub fn storage(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Storage { kind: kind.into(), detail: detail.into() }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            // A unique-key rejection on insert is the same "already exists"
            // outcome as the service-level lookup, not a server fault.
            ModelError::Conflict(field) => {
                let label = field.replace('_', " ");
                ServiceError::Validation(FieldErrors::single(
                    &field,
                    format!("A signup with this {label} already exists."),
                ))
            }
            ModelError::Db(detail) => ServiceError::Storage { kind: "DatabaseError".into(), detail },
        }
    }
}
