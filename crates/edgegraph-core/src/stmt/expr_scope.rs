use super::Expr;

/// Parenthesizes the wrapped expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprScope {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn scope(expr: impl Into<Expr>) -> Expr {
        ExprScope {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprScope> for Expr {
    fn from(value: ExprScope) -> Expr {
        Expr::Scope(value)
    }
}
