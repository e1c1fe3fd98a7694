use super::{Error, ErrorKind};

/// Error when a referenced field is absent from the model's reflected fields.
#[derive(Debug)]
pub(super) struct UnknownFieldError {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnknownFieldError {}

impl core::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown field: `{}` does not exist in {}",
            self.field, self.model
        )
    }
}

impl Error {
    /// Creates an unknown field error.
    pub fn unknown_field(model: impl core::fmt::Display, field: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnknownField(UnknownFieldError {
            model: model.to_string().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::UnknownField(_)))
    }
}
