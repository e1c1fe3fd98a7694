use super::{Error, ErrorKind};

/// Error when something other than a property token is passed where one is
/// required (for example a bare field name for a subquery field).
#[derive(Debug)]
pub(super) struct WrongTokenKindError {
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for WrongTokenKindError {}

impl core::fmt::Display for WrongTokenKindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "wrong token kind: expected {}, found {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a wrong token kind error.
    pub fn wrong_token_kind(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::from(ErrorKind::WrongTokenKind(WrongTokenKindError {
            expected: expected.into().into(),
            actual: actual.into().into(),
        }))
    }

    /// Returns `true` if this error is a wrong token kind error.
    pub fn is_wrong_token_kind(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::WrongTokenKind(_)))
    }
}
