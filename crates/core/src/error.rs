use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A validation failure attributable to one request field.
    #[error("Validation failed for '{field}': {message}")]
    FieldValidation {
        field: &'static str,
        message: String,
    },
}
