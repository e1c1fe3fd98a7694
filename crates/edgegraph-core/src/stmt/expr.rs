use super::{
    visit, ExprAnd, ExprCoalesce, ExprCompare, ExprIn, ExprInvoke, ExprLike, ExprNot, ExprOr,
    ExprPath, ExprReduce, ExprScope, ExprSide, ExprUnion, Literal, Visit,
};
use crate::schema::{ModelName, Property};
use crate::Result;

/// A node of the expression tree.
///
/// Expressions are plain owned trees. Constructors that accept literal
/// operands validate them eagerly and return a `Result`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `<lhs> and <rhs>`
    And(ExprAnd),

    /// `<lhs> ?? <rhs>`
    Coalesce(ExprCoalesce),

    /// Binary comparison
    Compare(ExprCompare),

    /// Membership test
    In(ExprIn),

    /// Function call
    Invoke(ExprInvoke),

    /// Pattern test
    Like(ExprLike),

    /// A typed parameter
    Literal(Literal),

    /// `not <expr>`
    Not(ExprNot),

    /// `<lhs> or <rhs>`
    Or(ExprOr),

    /// `.a.b.c`
    Path(ExprPath),

    /// `distinct <expr>` / `exists <expr>`
    Reduce(ExprReduce),

    /// `(<expr>)`
    Scope(ExprScope),

    /// Free-form binary operator with parenthesized operands
    Side(ExprSide),

    /// `<lhs> union <rhs>`
    Union(ExprUnion),
}

impl Expr {
    pub fn literal(value: impl Into<super::Value>, ty: super::PrimitiveType) -> Expr {
        Expr::Literal(Literal::new(value, ty))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Expr::Path(_))
    }

    /// Checks that every path in the tree starts at a field of `model`.
    pub fn verify_owner(&self, model: &ModelName) -> Result<()> {
        struct VerifyOwner<'a> {
            model: &'a ModelName,
            result: Result<()>,
        }

        impl Visit for VerifyOwner<'_> {
            fn visit_expr_path(&mut self, i: &ExprPath) {
                if self.result.is_ok() {
                    self.result = i.root().verify_owner(self.model);
                }
            }
        }

        let mut v = VerifyOwner {
            model,
            result: Ok(()),
        };
        v.visit_expr(self);
        v.result
    }

    /// Checks that every literal in the tree carries a declared type.
    pub fn verify_literals(&self) -> Result<()> {
        let mut result = Ok(());
        visit::for_each_literal(self, |literal| {
            if result.is_ok() {
                result = literal.expect_ty("expression").map(|_| ());
            }
        });
        result
    }

    /// Validates a literal operand in position `subject`; other expressions
    /// pass through untouched.
    pub(super) fn check_operand(self, subject: &str) -> Result<Expr> {
        if let Expr::Literal(literal) = &self {
            literal.expect_ty(subject)?;
        }
        Ok(self)
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Expr {
        Expr::Literal(value)
    }
}

impl From<Property> for Expr {
    fn from(value: Property) -> Expr {
        Expr::Path(ExprPath::from(value))
    }
}

impl From<&Property> for Expr {
    fn from(value: &Property) -> Expr {
        Expr::Path(ExprPath::from(value.clone()))
    }
}

impl std::fmt::Display for Expr {
    /// Renders the expression with literals inlined. Used in error messages;
    /// queries are rendered by the serializer.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::And(e) => write!(f, "{} and {}", e.lhs, e.rhs),
            Expr::Coalesce(e) => write!(f, "{} ?? {}", e.lhs, e.rhs),
            Expr::Compare(e) => write!(f, "{} {} {}", e.lhs, e.op, e.rhs),
            Expr::In(e) => write!(f, "{} {} {}", e.target, e.op, e.list),
            Expr::Invoke(e) => {
                write!(f, "{}::{}(", e.module.as_deref().unwrap_or(""), e.function)?;
                for (i, arg) in e.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expr::Like(e) => write!(f, "{} {} {}", e.target, e.op, e.pattern),
            Expr::Literal(literal) => match literal.ty {
                Some(ty) => write!(f, "<{ty}>'{}'", literal.value),
                None => write!(f, "'{}'", literal.value),
            },
            Expr::Not(e) => write!(f, "not {}", e.expr),
            Expr::Or(e) => write!(f, "{} or {}", e.lhs, e.rhs),
            Expr::Path(e) => {
                for segment in e.segments() {
                    write!(f, ".{}", segment.name)?;
                }
                Ok(())
            }
            Expr::Reduce(e) => write!(f, "{} {}", e.op, e.expr),
            Expr::Scope(e) => write!(f, "({})", e.expr),
            Expr::Side(e) => write!(f, "{} {} {}", e.origin, e.op, e.target),
            Expr::Union(e) => write!(f, "{} union {}", e.lhs, e.rhs),
        }
    }
}
