use super::{Error, ErrorKind};

/// Error when a builder already holds a field with the same name.
#[derive(Debug)]
pub(super) struct DuplicateFieldError {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicateFieldError {}

impl core::fmt::Display for DuplicateFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate field: `{}` already exists in {}",
            self.field, self.model
        )
    }
}

impl Error {
    /// Creates a duplicate field error.
    pub fn duplicate_field(model: impl core::fmt::Display, field: impl Into<String>) -> Error {
        Error::from(ErrorKind::DuplicateField(DuplicateFieldError {
            model: model.to_string().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate field error.
    pub fn is_duplicate_field(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::DuplicateField(_)))
    }
}
