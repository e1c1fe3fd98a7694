use super::{Expr, Value};
use crate::{Error, Result};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InOp {
    In,
    NotIn,
}

/// Membership test against a set expression or a literal list.
///
/// A literal list is bound as one array parameter whose declared type is the
/// element type: `.tags in <array<str>>$in_0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIn {
    pub target: Box<Expr>,
    pub op: InOp,
    pub list: Box<Expr>,
}

impl Expr {
    pub fn in_list(target: impl Into<Expr>, list: impl Into<Expr>) -> Result<Expr> {
        Expr::membership(target, InOp::In, list)
    }

    pub fn not_in_list(target: impl Into<Expr>, list: impl Into<Expr>) -> Result<Expr> {
        Expr::membership(target, InOp::NotIn, list)
    }

    fn membership(target: impl Into<Expr>, op: InOp, list: impl Into<Expr>) -> Result<Expr> {
        let target = target.into().check_operand("membership test")?;
        let list = list.into().check_operand("membership test")?;

        if let Expr::Literal(literal) = &list {
            if !matches!(literal.value, Value::List(_)) {
                return Err(Error::type_mismatch(
                    "membership test",
                    "list",
                    &literal.value,
                ));
            }
        }

        Ok(ExprIn {
            target: Box::new(target),
            op,
            list: Box::new(list),
        }
        .into())
    }
}

impl From<ExprIn> for Expr {
    fn from(value: ExprIn) -> Expr {
        Expr::In(value)
    }
}

impl fmt::Display for InOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InOp::In => "in",
            InOp::NotIn => "not in",
        })
    }
}
