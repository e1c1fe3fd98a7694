use super::Expr;
use crate::Result;

/// `<lhs> ?? <rhs>`: `rhs` when `lhs` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCoalesce {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn coalesce(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Result<Expr> {
        Ok(ExprCoalesce {
            lhs: Box::new(lhs.into().check_operand("coalesce")?),
            rhs: Box::new(rhs.into().check_operand("coalesce")?),
        }
        .into())
    }
}

impl From<ExprCoalesce> for Expr {
    fn from(value: ExprCoalesce) -> Expr {
        Expr::Coalesce(value)
    }
}
