use super::Expr;
use crate::{Error, Result};

/// Binds an origin and a target with an arbitrary operator, e.g. `++` or
/// `+`.
///
/// Paths render bare (`.name`); any other nested expression is wrapped in
/// parentheses so the operator binds the way it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprSide {
    pub op: String,
    pub origin: Box<Expr>,
    pub target: Box<Expr>,
}

impl Expr {
    pub fn side(
        origin: impl Into<Expr>,
        op: impl Into<String>,
        target: impl Into<Expr>,
    ) -> Result<Expr> {
        let op = op.into();

        if op.trim().is_empty() {
            return Err(Error::missing_specification(
                "side expression",
                "operator is empty",
            ));
        }

        Ok(ExprSide {
            origin: Box::new(origin.into().check_operand("side expression origin")?),
            target: Box::new(target.into().check_operand("side expression target")?),
            op,
        }
        .into())
    }
}

impl From<ExprSide> for Expr {
    fn from(value: ExprSide) -> Expr {
        Expr::Side(value)
    }
}
