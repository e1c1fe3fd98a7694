use super::Expr;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    Distinct,
    Exists,
}

/// A set reducer applied to one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprReduce {
    pub op: ReduceOp,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn reduce(op: ReduceOp, expr: impl Into<Expr>) -> Expr {
        ExprReduce {
            op,
            expr: Box::new(expr.into()),
        }
        .into()
    }

    pub fn distinct(expr: impl Into<Expr>) -> Expr {
        Expr::reduce(ReduceOp::Distinct, expr)
    }

    pub fn exists(expr: impl Into<Expr>) -> Expr {
        Expr::reduce(ReduceOp::Exists, expr)
    }
}

impl From<ExprReduce> for Expr {
    fn from(value: ExprReduce) -> Expr {
        Expr::Reduce(value)
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReduceOp::Distinct => "distinct",
            ReduceOp::Exists => "exists",
        })
    }
}
