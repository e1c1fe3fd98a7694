use crate::{Model, Query, Result, Serializer};

use edgegraph_core::schema::FieldRef;
use edgegraph_core::stmt::{self, Expr, FieldInput, PrimitiveType, Statement, Value};
use std::{fmt, marker::PhantomData};

/// An INSERT of one `M`.
pub struct Insert<M> {
    untyped: stmt::Insert,
    _p: PhantomData<M>,
}

impl<M: Model> Insert<M> {
    pub fn new() -> Result<Insert<M>> {
        Ok(Insert {
            untyped: stmt::Insert::new(M::reflect()?),
            _p: PhantomData,
        })
    }

    /// Sets a field from a fully described input.
    pub fn field(mut self, field: impl Into<FieldRef>, input: FieldInput) -> Result<Self> {
        self.untyped.add_field(field, input)?;
        Ok(self)
    }

    /// Sets a field to a literal of primitive type `ty`.
    pub fn value(
        self,
        field: impl Into<FieldRef>,
        value: impl Into<Value>,
        ty: PrimitiveType,
    ) -> Result<Self> {
        self.field(field, FieldInput::value(value, ty))
    }

    pub fn expr(self, field: impl Into<FieldRef>, expr: impl Into<Expr>) -> Result<Self> {
        self.field(field, FieldInput::expr(expr))
    }

    /// Sets a link from the result of another statement.
    pub fn subquery(self, field: impl Into<FieldRef>, stmt: impl Into<Statement>) -> Result<Self> {
        self.field(field, FieldInput::subquery(stmt))
    }

    /// Skips the insert when an object with the same `fields` exists.
    pub fn unless_conflict<I>(mut self, fields: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FieldRef>,
    {
        self.untyped.unless_conflict(fields, None)?;
        Ok(self)
    }

    /// Like [`Insert::unless_conflict`], running `alternate` on conflict.
    pub fn unless_conflict_else<I>(
        mut self,
        fields: I,
        alternate: impl Into<Statement>,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FieldRef>,
    {
        self.untyped.unless_conflict(fields, Some(alternate.into()))?;
        Ok(self)
    }

    pub fn build(&self) -> Result<Query> {
        Serializer::new().serialize(&Statement::Insert(self.untyped.clone()))
    }

    pub fn untyped(&self) -> &stmt::Insert {
        &self.untyped
    }
}

impl<M> From<Insert<M>> for Statement {
    fn from(value: Insert<M>) -> Self {
        Statement::Insert(value.untyped)
    }
}

impl<M> fmt::Debug for Insert<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}
