use super::{Error, ErrorKind};

/// Error when a field or literal is missing part of its specification.
///
/// This occurs when:
/// - A field is given none of value, expression or subquery (or more than one)
/// - A literal is given without its declared primitive type
#[derive(Debug)]
pub(super) struct MissingSpecificationError {
    subject: Box<str>,
    message: Box<str>,
}

impl std::error::Error for MissingSpecificationError {}

impl core::fmt::Display for MissingSpecificationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing specification for {}: {}",
            self.subject, self.message
        )
    }
}

impl Error {
    /// Creates a missing specification error.
    pub fn missing_specification(subject: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(ErrorKind::MissingSpecification(MissingSpecificationError {
            subject: subject.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing specification error.
    pub fn is_missing_specification(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::MissingSpecification(_)))
    }
}
