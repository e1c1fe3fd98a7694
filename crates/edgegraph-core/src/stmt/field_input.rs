use super::{Expr, Literal, PrimitiveType, Statement, Value};
use crate::schema::Property;
use crate::{Error, Result};

/// What the caller supplied for an INSERT or UPDATE field.
///
/// Exactly one of a literal value, an expression or a subquery must be set,
/// and a literal needs its declared type. [`FieldInput::resolve`] enforces
/// both against the target property.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    value: Option<Value>,
    ty: Option<PrimitiveType>,
    expr: Option<Expr>,
    subquery: Option<Statement>,
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Always typed once resolved
    Literal(Literal),
    Expr(Expr),
    Subquery(Box<Statement>),
}

impl FieldInput {
    pub fn new() -> FieldInput {
        FieldInput::default()
    }

    /// A literal value cast to `ty`.
    pub fn value(value: impl Into<Value>, ty: PrimitiveType) -> FieldInput {
        FieldInput::new().with_value(value).with_ty(ty)
    }

    pub fn expr(expr: impl Into<Expr>) -> FieldInput {
        FieldInput::new().with_expr(expr)
    }

    pub fn subquery(stmt: impl Into<Statement>) -> FieldInput {
        FieldInput::new().with_subquery(stmt)
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> FieldInput {
        self.value = Some(value.into());
        self
    }

    pub fn with_ty(mut self, ty: PrimitiveType) -> FieldInput {
        self.ty = Some(ty);
        self
    }

    pub fn with_expr(mut self, expr: impl Into<Expr>) -> FieldInput {
        self.expr = Some(expr.into());
        self
    }

    pub fn with_subquery(mut self, stmt: impl Into<Statement>) -> FieldInput {
        self.subquery = Some(stmt.into());
        self
    }

    pub fn resolve(self, property: &Property) -> Result<FieldValue> {
        let subject = format!("field `{}`", property.name);
        let supplied = [
            self.value.is_some(),
            self.expr.is_some(),
            self.subquery.is_some(),
        ]
        .into_iter()
        .filter(|supplied| *supplied)
        .count();

        match (self.value, self.expr, self.subquery) {
            (Some(value), None, None) => {
                let literal = Literal {
                    value,
                    ty: self.ty,
                };
                let ty = literal.expect_ty(&subject)?;

                if property.is_link() {
                    return Err(Error::type_mismatch(&property.name, &property.ty, ty));
                }

                if let Some(declared) = property.ty.primitive() {
                    if !ty.is_assignable_to(declared) {
                        return Err(Error::type_mismatch(&property.name, declared, ty));
                    }
                }

                Ok(FieldValue::Literal(literal))
            }
            (None, Some(expr), None) => {
                expr.verify_literals()?;
                Ok(FieldValue::Expr(expr))
            }
            (None, None, Some(stmt)) => {
                let Some(linked) = &property.linked else {
                    return Err(Error::type_mismatch(
                        &property.name,
                        &property.ty,
                        "subquery",
                    ));
                };

                if stmt.model_name() != linked {
                    return Err(Error::context_mismatch(
                        format!("subquery for `{}`", property.name),
                        linked,
                        stmt.model_name(),
                    ));
                }

                Ok(FieldValue::Subquery(Box::new(stmt)))
            }
            _ => Err(Error::missing_specification(
                subject,
                format!(
                    "exactly one of value, expression or subquery is required, {supplied} given"
                ),
            )),
        }
    }
}

impl FieldValue {
    pub fn is_subquery(&self) -> bool {
        matches!(self, FieldValue::Subquery(_))
    }
}
