use super::{Error, ErrorKind};

/// Error when a property token, expression or subquery belongs to a different
/// model than the builder it is handed to.
///
/// This occurs when:
/// - A property reflected from model `A` is added to a builder bound to `B`
/// - A subquery's model does not match the declared link target of its field
/// - A path segment does not continue from the previous segment's link target
#[derive(Debug)]
pub(super) struct ContextMismatchError {
    subject: Box<str>,
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for ContextMismatchError {}

impl core::fmt::Display for ContextMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "context mismatch: {} expected {}, found {}",
            self.subject, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a context mismatch error.
    pub fn context_mismatch(
        subject: impl core::fmt::Display,
        expected: impl core::fmt::Display,
        actual: impl core::fmt::Display,
    ) -> Error {
        Error::from(ErrorKind::ContextMismatch(ContextMismatchError {
            subject: subject.to_string().into(),
            expected: expected.to_string().into(),
            actual: actual.to_string().into(),
        }))
    }

    /// Returns `true` if this error is a context mismatch error.
    pub fn is_context_mismatch(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::ContextMismatch(_)))
    }
}
