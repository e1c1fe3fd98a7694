use super::{Expr, PrimitiveType, Value};
use crate::{Error, Result};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOp {
    Like,
    ILike,
    NotLike,
    NotILike,
}

/// Pattern test. A literal pattern is always bound as `<str>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub target: Box<Expr>,
    pub op: LikeOp,
    pub pattern: Box<Expr>,
}

impl Expr {
    pub fn like(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Result<Expr> {
        Expr::pattern(target, LikeOp::Like, pattern)
    }

    pub fn ilike(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Result<Expr> {
        Expr::pattern(target, LikeOp::ILike, pattern)
    }

    pub fn not_like(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Result<Expr> {
        Expr::pattern(target, LikeOp::NotLike, pattern)
    }

    pub fn not_ilike(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Result<Expr> {
        Expr::pattern(target, LikeOp::NotILike, pattern)
    }

    fn pattern(target: impl Into<Expr>, op: LikeOp, pattern: impl Into<Expr>) -> Result<Expr> {
        let target = target.into().check_operand("pattern test")?;
        let mut pattern = pattern.into();

        if let Expr::Literal(literal) = &mut pattern {
            if !matches!(literal.value, Value::String(_)) {
                return Err(Error::type_mismatch("pattern", "str", &literal.value));
            }

            match literal.ty {
                None | Some(PrimitiveType::Str) => literal.ty = Some(PrimitiveType::Str),
                Some(ty) => return Err(Error::type_mismatch("pattern", "str", ty)),
            }
        }

        Ok(ExprLike {
            target: Box::new(target),
            op,
            pattern: Box::new(pattern),
        }
        .into())
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Expr {
        Expr::Like(value)
    }
}

impl fmt::Display for LikeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LikeOp::Like => "like",
            LikeOp::ILike => "ilike",
            LikeOp::NotLike => "not like",
            LikeOp::NotILike => "not ilike",
        })
    }
}
