use super::{visit, Expr, Literal, Statement};
use crate::schema::FieldRef;
use crate::{Error, Result};

use std::fmt;

/// The statement kind a shape is written for. It decides which pointer
/// kinds are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeContext {
    Select,
    Upsert,
}

/// Relates a shape item's name to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// `name`
    None,
    /// `name: { ... }`
    Linked,
    /// `name := value`
    Assign,
    /// `name += value`
    Append,
    /// `name -= value`
    Remove,
}

/// A nested projection or assignment block, `{ ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub context: ShapeContext,
    pub items: Vec<ShapeItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeItem {
    pub field: FieldRef,
    pub pointer: Pointer,
    pub value: Option<ShapeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeValue {
    Shape(Shape),
    Expr(Expr),
    Subquery(Box<Statement>),
    Literal(Literal),
}

impl Shape {
    pub fn new(context: ShapeContext) -> Shape {
        Shape {
            context,
            items: vec![],
        }
    }

    pub fn select() -> Shape {
        Shape::new(ShapeContext::Select)
    }

    pub fn upsert() -> Shape {
        Shape::new(ShapeContext::Upsert)
    }

    /// Validates `item` against this shape's context and appends it.
    pub fn push(&mut self, item: ShapeItem) -> Result<()> {
        item.verify(self.context)?;

        if self.items.iter().any(|i| i.field.name() == item.field.name()) {
            return Err(Error::duplicate_field("shape", item.field.name()));
        }

        self.items.push(item);
        Ok(())
    }

    pub fn item(mut self, item: ShapeItem) -> Result<Shape> {
        self.push(item)?;
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks every item against this shape's context, descending into
    /// nested shapes, and then every literal the shape binds.
    pub fn verify(&self) -> Result<()> {
        for item in &self.items {
            item.verify(self.context)?;

            if let Some(ShapeValue::Shape(shape)) = &item.value {
                shape.verify()?;
            }
        }

        self.verify_literals()
    }

    pub fn verify_literals(&self) -> Result<()> {
        visit::verify_shape_literals(self)
    }
}

impl ShapeContext {
    pub fn allows(self, pointer: Pointer) -> bool {
        match self {
            ShapeContext::Upsert => matches!(
                pointer,
                Pointer::Linked | Pointer::Assign | Pointer::Append | Pointer::Remove
            ),
            ShapeContext::Select => {
                matches!(pointer, Pointer::None | Pointer::Linked | Pointer::Assign)
            }
        }
    }
}

impl ShapeItem {
    pub fn new(field: impl Into<FieldRef>, pointer: Pointer, value: Option<ShapeValue>) -> Self {
        ShapeItem {
            field: field.into(),
            pointer,
            value,
        }
    }

    /// A plain projected field.
    pub fn field(field: impl Into<FieldRef>) -> Self {
        ShapeItem::new(field, Pointer::None, None)
    }

    pub fn linked(field: impl Into<FieldRef>, shape: Shape) -> Self {
        ShapeItem::new(field, Pointer::Linked, Some(ShapeValue::Shape(shape)))
    }

    pub fn assign(field: impl Into<FieldRef>, value: impl Into<ShapeValue>) -> Self {
        ShapeItem::new(field, Pointer::Assign, Some(value.into()))
    }

    pub fn append(field: impl Into<FieldRef>, value: impl Into<ShapeValue>) -> Self {
        ShapeItem::new(field, Pointer::Append, Some(value.into()))
    }

    pub fn remove(field: impl Into<FieldRef>, value: impl Into<ShapeValue>) -> Self {
        ShapeItem::new(field, Pointer::Remove, Some(value.into()))
    }

    /// Checks the pointer against `context` and against the kind of value.
    pub fn verify(&self, context: ShapeContext) -> Result<()> {
        let name = self.field.name();
        let illegal = |message: &str| Error::illegal_pointer(name, self.pointer, context, message);

        if !context.allows(self.pointer) {
            return Err(illegal("pointer kind is not allowed in this context"));
        }

        if context == ShapeContext::Select
            && self.pointer == Pointer::Assign
            && self.field.is_token()
        {
            return Err(illegal("assignment is only allowed for computed fields"));
        }

        match &self.value {
            Some(ShapeValue::Shape(_)) if self.pointer != Pointer::Linked => {
                Err(illegal("a nested shape requires a linked pointer"))
            }
            Some(ShapeValue::Expr(expr)) => {
                if self.pointer == Pointer::None {
                    return Err(illegal("an expression requires a pointer"));
                }
                expr.verify_literals()
            }
            Some(ShapeValue::Subquery(_))
                if matches!(self.pointer, Pointer::None | Pointer::Linked) =>
            {
                Err(illegal("a subquery cannot be linked or bare"))
            }
            Some(ShapeValue::Literal(literal)) => {
                literal.expect_ty(&format!("shape item `{name}`"))?;
                if self.pointer != Pointer::Assign {
                    return Err(illegal("a literal requires an assignment"));
                }
                Ok(())
            }
            None if self.pointer != Pointer::None => {
                Err(illegal("a pointer requires a value"))
            }
            _ => Ok(()),
        }
    }
}

impl From<Shape> for ShapeValue {
    fn from(value: Shape) -> ShapeValue {
        ShapeValue::Shape(value)
    }
}

impl From<Expr> for ShapeValue {
    fn from(value: Expr) -> ShapeValue {
        ShapeValue::Expr(value)
    }
}

impl From<Statement> for ShapeValue {
    fn from(value: Statement) -> ShapeValue {
        ShapeValue::Subquery(Box::new(value))
    }
}

impl From<Literal> for ShapeValue {
    fn from(value: Literal) -> ShapeValue {
        ShapeValue::Literal(value)
    }
}

impl fmt::Display for ShapeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeContext::Select => "SELECT",
            ShapeContext::Upsert => "UPSERT",
        })
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pointer::None => "",
            Pointer::Linked => ":",
            Pointer::Assign => ":=",
            Pointer::Append => "+=",
            Pointer::Remove => "-=",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Model;
    use crate::stmt::{PrimitiveType, Select};

    use std::sync::Arc;

    fn user() -> Arc<Model> {
        Arc::new(
            Model::builder("default", "User")
                .field("name", PrimitiveType::Str)
                .build()
                .unwrap(),
        )
    }

    fn users() -> ShapeValue {
        ShapeValue::from(Statement::from(Select::new(user())))
    }

    #[test]
    fn pointer_legality_per_context() {
        use Pointer::*;

        let select: Vec<_> = [None, Linked, Assign, Append, Remove]
            .into_iter()
            .filter(|p| ShapeContext::Select.allows(*p))
            .collect();
        assert_eq!(select, vec![None, Linked, Assign]);

        let upsert: Vec<_> = [None, Linked, Assign, Append, Remove]
            .into_iter()
            .filter(|p| ShapeContext::Upsert.allows(*p))
            .collect();
        assert_eq!(upsert, vec![Linked, Assign, Append, Remove]);
    }

    #[test]
    fn literal_needs_type_and_assignment() {
        let untyped = ShapeItem::assign("count", Literal::untyped(3));
        assert!(untyped
            .verify(ShapeContext::Upsert)
            .unwrap_err()
            .is_missing_specification());

        let appended = ShapeItem::append("count", Literal::new(3, PrimitiveType::Int64));
        assert!(appended
            .verify(ShapeContext::Upsert)
            .unwrap_err()
            .is_illegal_pointer());
    }

    #[test]
    fn nested_shape_must_be_linked() {
        let item = ShapeItem::assign("author", Shape::select());
        let err = item.verify(ShapeContext::Select).unwrap_err();
        assert!(err.is_illegal_pointer());
    }

    #[test]
    fn bare_item_in_upsert_is_rejected() {
        let err = ShapeItem::field("name")
            .verify(ShapeContext::Upsert)
            .unwrap_err();
        assert!(err.is_illegal_pointer());
    }

    #[test]
    fn bare_expression_in_select_is_rejected() {
        let user = user();
        let name = user.property("name").unwrap();

        let item = ShapeItem::new(
            "name_len",
            Pointer::None,
            Some(ShapeValue::Expr(Expr::from(name))),
        );
        let err = item.verify(ShapeContext::Select).unwrap_err();
        assert!(err.is_illegal_pointer());

        let err = Shape::select().item(item).unwrap_err();
        assert!(err.is_illegal_pointer());
    }

    #[test]
    fn bare_expression_in_upsert_is_rejected() {
        let item = ShapeItem::new(
            "count",
            Pointer::None,
            Some(ShapeValue::Expr(Expr::literal(1, PrimitiveType::Int64))),
        );
        let err = item.verify(ShapeContext::Upsert).unwrap_err();
        assert!(err.is_illegal_pointer());
    }

    #[test]
    fn subquery_cannot_be_bare_or_linked() {
        for pointer in [Pointer::None, Pointer::Linked] {
            let item = ShapeItem::new("friends", pointer, Some(users()));
            let err = item.verify(ShapeContext::Select).unwrap_err();
            assert!(err.is_illegal_pointer(), "{pointer:?}");
        }

        let linked = ShapeItem::new("friends", Pointer::Linked, Some(users()));
        assert!(linked
            .verify(ShapeContext::Upsert)
            .unwrap_err()
            .is_illegal_pointer());

        let appended = ShapeItem::append("friends", users());
        assert!(appended.verify(ShapeContext::Upsert).is_ok());
    }

    #[test]
    fn select_assignment_needs_a_computed_field() {
        let user = user();
        let name = user.property("name").unwrap();
        let len = Expr::invoke(Some("std"), "len", [Expr::from(name)]).unwrap();

        let token = ShapeItem::assign(name, len.clone());
        assert!(token
            .verify(ShapeContext::Select)
            .unwrap_err()
            .is_illegal_pointer());

        let computed = ShapeItem::assign("name_len", len);
        assert!(computed.verify(ShapeContext::Select).is_ok());
    }
}
