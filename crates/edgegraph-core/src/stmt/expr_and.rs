use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprAnd {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    /// Folds `operands` left to right with `and`. Returns `None` when empty.
    pub fn and_from_vec(operands: Vec<Expr>) -> Option<Expr> {
        operands.into_iter().reduce(Expr::and)
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Expr {
        Expr::And(value)
    }
}
