use super::Expr;

/// Set union of two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnion {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn union(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprUnion {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }
}

impl From<ExprUnion> for Expr {
    fn from(value: ExprUnion) -> Expr {
        Expr::Union(value)
    }
}
