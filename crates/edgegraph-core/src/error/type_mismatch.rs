use super::{Error, ErrorKind};

/// Error when a literal's declared type contradicts the field it is assigned to.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    field: Box<str>,
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch for `{}`: expected {}, found {}",
            self.field, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl core::fmt::Display,
        actual: impl core::fmt::Display,
    ) -> Error {
        Error::from(ErrorKind::TypeMismatch(TypeMismatchError {
            field: field.into().into(),
            expected: expected.to_string().into(),
            actual: actual.to_string().into(),
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::TypeMismatch(_)))
    }
}
