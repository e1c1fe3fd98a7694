use super::{Error, ErrorKind};

/// Error when a clause conflicts with the builder's current state.
///
/// This occurs when:
/// - The same filter expression is added twice
/// - An UPDATE is given both a target subquery and filters
#[derive(Debug)]
pub(super) struct InvalidConditionError {
    condition: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidConditionError {}

impl core::fmt::Display for InvalidConditionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid condition `{}`: {}", self.condition, self.message)
    }
}

impl Error {
    /// Creates an invalid condition error.
    pub fn invalid_condition(condition: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidCondition(InvalidConditionError {
            condition: condition.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid condition error.
    pub fn is_invalid_condition(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::InvalidCondition(_)))
    }
}
