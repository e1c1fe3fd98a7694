use super::{PrimitiveType, Value};
use crate::{Error, Result};

/// A raw value together with the primitive type it is cast to in the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Value,

    /// Declared type. A literal without one is rejected before it can reach
    /// a query.
    pub ty: Option<PrimitiveType>,
}

impl Literal {
    pub fn new(value: impl Into<Value>, ty: PrimitiveType) -> Literal {
        Literal {
            value: value.into(),
            ty: Some(ty),
        }
    }

    /// A literal with no declared type. Builders reject it; it exists so the
    /// omission is reported rather than guessed around.
    pub fn untyped(value: impl Into<Value>) -> Literal {
        Literal {
            value: value.into(),
            ty: None,
        }
    }

    pub fn str(value: impl Into<String>) -> Literal {
        Literal::new(value.into(), PrimitiveType::Str)
    }

    pub fn bool(value: bool) -> Literal {
        Literal::new(value, PrimitiveType::Bool)
    }

    pub fn is_typed(&self) -> bool {
        self.ty.is_some()
    }

    /// Returns the declared type or a missing-specification error for
    /// `subject`.
    pub fn expect_ty(&self, subject: &str) -> Result<PrimitiveType> {
        self.ty.ok_or_else(|| {
            Error::missing_specification(
                subject,
                format!("literal `{}` has no declared primitive type", self.value),
            )
        })
    }
}
