use super::{declared_ty, Delimited, Formatter, Operand, ToEdgeql};

use edgegraph_core::stmt::{self, Expr};

impl ToEdgeql for &stmt::Expr {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, lhs " and " rhs);
            }
            Coalesce(expr) => {
                let lhs = Operand(&expr.lhs, "coalesce");
                let rhs = Operand(&expr.rhs, "coalesce");
                fmt!(f, lhs " ?? " rhs);
            }
            Compare(expr) => {
                let lhs = Operand(&expr.lhs, "equation");
                let rhs = Operand(&expr.rhs, "equation");
                fmt!(f, lhs " " expr.op " " rhs);
            }
            In(expr) => {
                let target = &*expr.target;
                fmt!(f, target " " expr.op " ");

                match &*expr.list {
                    Literal(literal) => {
                        let ty = declared_ty(literal);
                        let placeholder = f.bind_next("in", &literal.value);
                        fmt!(f, "<array<" ty ">>" placeholder);
                    }
                    list => fmt!(f, list),
                }
            }
            Invoke(expr) => {
                if let Some(module) = &expr.module {
                    fmt!(f, module);
                }

                let function = &expr.function;
                let args = expr.args.iter().map(|arg| Operand(arg, "invoke"));
                fmt!(f, "::" function "(" Delimited(args, ", ") ")");
            }
            Like(expr) => {
                let target = &*expr.target;
                let pattern = Operand(&expr.pattern, "like");
                fmt!(f, target " " expr.op " " pattern);
            }
            Literal(_) => {
                fmt!(f, Operand(self, "literal"));
            }
            Not(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "not " inner);
            }
            Or(expr) => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, lhs " or " rhs);
            }
            Path(expr) => {
                for segment in expr.segments() {
                    let name = &segment.name;
                    fmt!(f, "." name);
                }
            }
            Reduce(expr) => {
                let inner = &*expr.expr;
                fmt!(f, expr.op " " inner);
            }
            Scope(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "(" inner ")");
            }
            Side(expr) => {
                let op = &expr.op;
                fmt!(f, SideOperand(&expr.origin) " " op " " SideOperand(&expr.target));
            }
            Union(expr) => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, lhs " union " rhs);
            }
        }
    }
}

/// An operand of a side expression. Paths and literals are written bare,
/// anything else is parenthesized.
struct SideOperand<'a>(&'a Expr);

impl ToEdgeql for SideOperand<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Expr::Path(_) => fmt!(f, self.0),
            Expr::Literal(_) => fmt!(f, Operand(self.0, "equation")),
            expr => fmt!(f, "(" expr ")"),
        }
    }
}
