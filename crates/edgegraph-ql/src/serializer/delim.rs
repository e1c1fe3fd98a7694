use super::{declared_ty, Formatter, ToEdgeql};

use edgegraph_core::stmt::Expr;

/// Items separated by a fixed delimiter
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToEdgeql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToEdgeql,
{
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

/// An expression in an operand position. A literal operand is bound as a
/// parameter named after `context`; anything else is written as is.
pub(super) struct Operand<'a>(pub(super) &'a Expr, pub(super) &'static str);

impl ToEdgeql for Operand<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Expr::Literal(literal) => {
                let ty = declared_ty(literal);
                let placeholder = f.bind_next(self.1, &literal.value);
                fmt!(f, "<" ty ">" placeholder);
            }
            expr => expr.to_edgeql(f),
        }
    }
}
