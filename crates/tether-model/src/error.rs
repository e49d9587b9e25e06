//! Error types for the entity model

/// Errors raised by typed field access
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// State has no field with this name
    #[error("unknown field: {key}")]
    UnknownField {
        /// Offending field name
        key: String,
    },

    /// Value kind does not match the field's declared kind
    #[error("field kind mismatch for: {key}")]
    FieldKindMismatch {
        /// Offending field name
        key: String,
    },
}
