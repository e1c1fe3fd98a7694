use super::Select;
use crate::{Model, Query, Result, Serializer};

use edgegraph_core::schema::FieldRef;
use edgegraph_core::stmt::{self, AssignOp, Expr, FieldInput, PrimitiveType, Statement, Value};
use std::{fmt, marker::PhantomData};

/// An UPDATE of the `M` objects picked either by filters or by a target
/// SELECT, never both.
pub struct Update<M> {
    untyped: stmt::Update,
    _p: PhantomData<M>,
}

impl<M: Model> Update<M> {
    pub fn new() -> Result<Update<M>> {
        Ok(Update {
            untyped: stmt::Update::new(M::reflect()?),
            _p: PhantomData,
        })
    }

    /// Updates the objects returned by `select`.
    pub fn target(mut self, select: Select<M>) -> Result<Self> {
        self.untyped.set_target(select.into_untyped())?;
        Ok(self)
    }

    pub fn filter(mut self, expr: Expr) -> Result<Self> {
        self.untyped.add_filter(expr)?;
        Ok(self)
    }

    /// Assigns a field, `name := value`.
    pub fn set(mut self, field: impl Into<FieldRef>, input: FieldInput) -> Result<Self> {
        self.untyped.add_field(field, input, AssignOp::Assign)?;
        Ok(self)
    }

    pub fn value(
        self,
        field: impl Into<FieldRef>,
        value: impl Into<Value>,
        ty: PrimitiveType,
    ) -> Result<Self> {
        self.set(field, FieldInput::value(value, ty))
    }

    /// Adds the objects selected by `select` to a multi link, `name += (...)`.
    pub fn append<N: Model>(
        mut self,
        field: impl Into<FieldRef>,
        select: Select<N>,
    ) -> Result<Self> {
        self.untyped
            .add_field(field, FieldInput::subquery(select), AssignOp::Append)?;
        Ok(self)
    }

    /// Removes the objects selected by `select` from a multi link,
    /// `name -= (...)`.
    pub fn remove<N: Model>(
        mut self,
        field: impl Into<FieldRef>,
        select: Select<N>,
    ) -> Result<Self> {
        self.untyped
            .add_field(field, FieldInput::subquery(select), AssignOp::Remove)?;
        Ok(self)
    }

    pub fn build(&self) -> Result<Query> {
        Serializer::new().serialize(&Statement::Update(self.untyped.clone()))
    }

    pub fn untyped(&self) -> &stmt::Update {
        &self.untyped
    }
}

impl<M> From<Update<M>> for Statement {
    fn from(value: Update<M>) -> Self {
        Statement::Update(value.untyped)
    }
}

impl<M> fmt::Debug for Update<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}
