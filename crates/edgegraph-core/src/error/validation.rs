use super::{Error, ErrorKind};

/// One finding of a schema validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEntry {
    pub module: Option<String>,
    pub ty: Option<String>,
    pub property: Option<String>,
    pub message: String,
}

impl ValidationEntry {
    pub fn new(message: impl Into<String>) -> ValidationEntry {
        ValidationEntry {
            module: None,
            ty: None,
            property: None,
            message: message.into(),
        }
    }

    pub fn model(mut self, module: impl Into<String>, ty: impl Into<String>) -> ValidationEntry {
        self.module = Some(module.into());
        self.ty = Some(ty.into());
        self
    }

    pub fn property(mut self, property: impl Into<String>) -> ValidationEntry {
        self.property = Some(property.into());
        self
    }
}

impl core::fmt::Display for ValidationEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match (&self.module, &self.ty, &self.property) {
            (Some(module), Some(ty), Some(property)) => {
                write!(f, "{module}::{ty}.{property}: {}", self.message)
            }
            (Some(module), Some(ty), None) => write!(f, "{module}::{ty}: {}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

/// Aggregate error raised once a validation pass completes (or on the first
/// finding when fail-fast is enabled).
#[derive(Debug)]
pub(super) struct ValidationError {
    message: Box<str>,
    entries: Vec<ValidationEntry>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} errors in validation: {}",
            self.entries.len(),
            self.message
        )
    }
}

impl Error {
    /// Creates an aggregate validation error.
    pub fn validation(message: impl Into<String>, entries: Vec<ValidationEntry>) -> Error {
        Error::from(ErrorKind::Validation(ValidationError {
            message: message.into().into(),
            entries,
        }))
    }

    /// Returns `true` if this error is an aggregate validation error.
    pub fn is_validation(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::Validation(_)))
    }

    /// Returns the entries of an aggregate validation error.
    pub fn validation_entries(&self) -> Option<&[ValidationEntry]> {
        self.find_kind(|kind| match kind {
            ErrorKind::Validation(err) => Some(&err.entries),
            _ => None,
        })
        .map(Vec::as_slice)
    }
}
