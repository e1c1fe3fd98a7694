use super::Expr;
use crate::Result;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `?=`, equality that treats empty sets as values
    EmptyEq,
    /// `?!=`
    EmptyNe,
    Gt,
    Ge,
    Lt,
    Le,
}

/// A binary comparison.
///
/// # Examples
///
/// ```text
/// eq(.name, <str>$name)        // .name = <str>$name
/// eeq(.deleted_at, <datetime>) // .deleted_at ?= <datetime>$...
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCompare {
    pub lhs: Box<Expr>,
    pub op: CompareOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn compare(lhs: impl Into<Expr>, op: CompareOp, rhs: impl Into<Expr>) -> Result<Expr> {
        Ok(ExprCompare {
            lhs: Box::new(lhs.into().check_operand("comparison")?),
            op,
            rhs: Box::new(rhs.into().check_operand("comparison")?),
        }
        .into())
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::Ne, rhs)
    }

    pub fn eeq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::EmptyEq, rhs)
    }

    pub fn neeq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::EmptyNe, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::Ge, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Expr::compare(lhs, CompareOp::Le, rhs)
    }
}

impl From<ExprCompare> for Expr {
    fn from(value: ExprCompare) -> Expr {
        Expr::Compare(value)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::EmptyEq => "?=",
            CompareOp::EmptyNe => "?!=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
        })
    }
}
