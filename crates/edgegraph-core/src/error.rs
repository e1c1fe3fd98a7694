mod adhoc;
mod context_mismatch;
mod duplicate_field;
mod illegal_pointer;
mod invalid_condition;
mod invalid_schema;
mod missing_specification;
mod type_mismatch;
mod unknown_field;
mod validation;
mod wrong_token_kind;

use adhoc::AdhocError;
use context_mismatch::ContextMismatchError;
use duplicate_field::DuplicateFieldError;
use illegal_pointer::IllegalPointerError;
use invalid_condition::InvalidConditionError;
use invalid_schema::InvalidSchemaError;
use missing_specification::MissingSpecificationError;
use std::sync::Arc;
use type_mismatch::TypeMismatchError;
use unknown_field::UnknownFieldError;
use validation::ValidationError;
pub use validation::ValidationEntry;
use wrong_token_kind::WrongTokenKindError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while declaring models or building queries.
///
/// Every builder call validates its input eagerly, so an `Error` always points
/// at the exact call that violated a contract. Errors are cheap to clone and
/// carry an optional chain of context added with [`Error::context`].
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                Err(shared) => ErrorKind::Shared(Error {
                    inner: Some(shared),
                }),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        match self.inner.as_ref().map(|inner| &inner.kind) {
            Some(ErrorKind::Shared(err)) => err.kind(),
            Some(kind) => kind,
            None => &ErrorKind::Unknown,
        }
    }

    /// Walks the context chain and returns the first kind matching `f`.
    fn find_kind<T>(&self, f: impl Fn(&ErrorKind) -> Option<&T>) -> Option<&T> {
        self.chain().find_map(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .inner
                .as_ref()
                .and_then(|inner| inner.cause.as_ref())
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ContextMismatch(ContextMismatchError),
    DuplicateField(DuplicateFieldError),
    IllegalPointer(IllegalPointerError),
    InvalidCondition(InvalidConditionError),
    InvalidSchema(InvalidSchemaError),
    MissingSpecification(MissingSpecificationError),
    TypeMismatch(TypeMismatchError),
    UnknownField(UnknownFieldError),
    Validation(ValidationError),
    WrongTokenKind(WrongTokenKindError),

    /// Context that was still referenced elsewhere when it was attached
    Shared(Error),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ContextMismatch(err) => core::fmt::Display::fmt(err, f),
            DuplicateField(err) => core::fmt::Display::fmt(err, f),
            IllegalPointer(err) => core::fmt::Display::fmt(err, f),
            InvalidCondition(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            MissingSpecification(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
            WrongTokenKind(err) => core::fmt::Display::fmt(err, f),
            Shared(err) => core::fmt::Display::fmt(err.kind(), f),
            Unknown => f.write_str("unknown edgegraph error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::duplicate_field("default::Memo", "content").context("Memo.insert()");

        assert!(err.is_duplicate_field());
        assert_eq!(
            err.to_string(),
            "Memo.insert(): duplicate field: `content` already exists in default::Memo"
        );
    }

    #[test]
    fn shared_context_keeps_its_kind() {
        let context = Error::duplicate_field("default::Memo", "content");
        let held = context.clone();

        let err = Error::from_args(format_args!("insert failed")).context(context);

        assert!(err.is_duplicate_field());
        assert_eq!(
            err.to_string(),
            "duplicate field: `content` already exists in default::Memo: insert failed"
        );
        assert!(held.is_duplicate_field());
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("connection reset");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "connection reset");
    }

    #[test]
    fn context_mismatch_display() {
        let err = Error::context_mismatch("field `created_at`", "default::Memo", "default::User");
        assert_eq!(
            err.to_string(),
            "context mismatch: field `created_at` expected default::Memo, found default::User"
        );
    }

    #[test]
    fn validation_entries_are_exposed() {
        let err = Error::validation(
            "outline inspection failed",
            vec![ValidationEntry::new("2 models found in database, 3 expected")],
        );

        assert!(err.is_validation());
        assert_eq!(err.validation_entries().map(<[_]>::len), Some(1));
        assert_eq!(
            err.to_string(),
            "1 errors in validation: outline inspection failed"
        );
    }
}
