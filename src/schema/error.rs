/// Errors that can occur while decoding a schema line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("expected line marker '{expected}', found '{found}'")]
    WrongMarker { expected: String, found: String },

    #[error("line has {found} cells but the schema defines only {expected}")]
    TooManyCells { expected: usize, found: usize },

    #[error("invalid {kind} cell for field {field}: '{token}'")]
    InvalidCell {
        field: &'static str,
        kind: &'static str,
        token: String,
    },

    #[error("unknown field '{0}' in header line")]
    UnknownField(String),

    #[error("duplicate field '{0}' in header line")]
    DuplicateField(String),
}
