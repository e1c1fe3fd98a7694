use super::{Error, ErrorKind};

/// An error carrying only a message, created through `err!` / `bail!` or by
/// adding a plain string as context.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> AdhocError {
        AdhocError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad-hoc error from format arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }
}
