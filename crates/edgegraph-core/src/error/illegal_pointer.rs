use super::{Error, ErrorKind};

/// Error when a shape item's pointer kind is not legal for its shape context
/// or for the kind of value it points at.
#[derive(Debug)]
pub(super) struct IllegalPointerError {
    item: Box<str>,
    pointer: Box<str>,
    context: Box<str>,
    message: Box<str>,
}

impl std::error::Error for IllegalPointerError {}

impl core::fmt::Display for IllegalPointerError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "illegal pointer kind: {} on `{}` in {} shape: {}",
            self.pointer, self.item, self.context, self.message
        )
    }
}

impl Error {
    /// Creates an illegal pointer kind error.
    pub fn illegal_pointer(
        item: impl Into<String>,
        pointer: impl core::fmt::Debug,
        context: impl core::fmt::Display,
        message: impl Into<String>,
    ) -> Error {
        Error::from(ErrorKind::IllegalPointer(IllegalPointerError {
            item: item.into().into(),
            pointer: format!("{pointer:?}").into(),
            context: context.to_string().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an illegal pointer kind error.
    pub fn is_illegal_pointer(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::IllegalPointer(_)))
    }
}
