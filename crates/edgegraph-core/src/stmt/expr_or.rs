use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprOr {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Expr {
        Expr::Or(value)
    }
}
