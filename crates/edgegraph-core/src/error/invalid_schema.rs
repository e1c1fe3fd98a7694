use super::{Error, ErrorKind};

/// Error when a model declaration is invalid.
///
/// This occurs when:
/// - Two models are registered under the same qualified name
/// - A declaration lists the same field twice
/// - A field name is empty
///
/// These errors surface when a model is first reflected.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::InvalidSchema(_)))
    }
}
