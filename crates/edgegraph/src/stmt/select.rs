use crate::{Model, Query, Result, Serializer};

use edgegraph_core::schema::FieldRef;
use edgegraph_core::stmt::{self, Direction, EmptyStrategy, Expr, SelectFieldKind, Statement};
use std::{fmt, marker::PhantomData};

/// A SELECT over model `M`.
///
/// Every method validates its input against the reflected model before
/// accepting it, so a builder that was assembled without errors always
/// serializes.
pub struct Select<M> {
    untyped: stmt::Select,
    _p: PhantomData<M>,
}

impl<M: Model> Select<M> {
    pub fn new() -> Result<Select<M>> {
        Ok(Select::from_untyped(stmt::Select::new(M::reflect()?)))
    }

    pub(crate) const fn from_untyped(untyped: stmt::Select) -> Select<M> {
        Select {
            untyped,
            _p: PhantomData,
        }
    }

    /// Projects a field of `M` as is.
    pub fn field(mut self, field: impl Into<FieldRef>) -> Result<Self> {
        self.untyped.add_field(field, SelectFieldKind::Plain)?;
        Ok(self)
    }

    pub fn fields<I>(self, fields: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FieldRef>,
    {
        fields
            .into_iter()
            .try_fold(self, |select, field| select.field(field))
    }

    /// Projects a computed field, `name := expr`.
    pub fn computed(mut self, name: impl Into<String>, expr: impl Into<Expr>) -> Result<Self> {
        let name = FieldRef::from(name.into());
        self.untyped.add_field(name, SelectFieldKind::Expr(expr.into()))?;
        Ok(self)
    }

    /// Projects a link of `M` through a nested SELECT over the linked model.
    pub fn subquery<N: Model>(
        mut self,
        field: impl Into<FieldRef>,
        select: Select<N>,
    ) -> Result<Self> {
        self.untyped.add_field(
            field,
            SelectFieldKind::Subquery(Box::new(select.into_untyped())),
        )?;
        Ok(self)
    }

    pub fn filter(mut self, expr: Expr) -> Result<Self> {
        self.untyped.add_filter(expr)?;
        Ok(self)
    }

    pub fn order_by(self, field: impl Into<FieldRef>, direction: Direction) -> Result<Self> {
        self.order(field, direction, None)
    }

    pub fn order(
        mut self,
        field: impl Into<FieldRef>,
        direction: Direction,
        empty: Option<EmptyStrategy>,
    ) -> Result<Self> {
        self.untyped.set_order(field, direction, empty)?;
        Ok(self)
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.untyped.set_offset(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.untyped.set_limit(limit);
        self
    }

    pub fn build(&self) -> Result<Query> {
        Serializer::new().serialize(&Statement::Select(self.untyped.clone()))
    }

    pub fn untyped(&self) -> &stmt::Select {
        &self.untyped
    }

    pub fn into_untyped(self) -> stmt::Select {
        self.untyped
    }
}

impl<M> Clone for Select<M> {
    fn clone(&self) -> Self {
        Select {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<M> From<Select<M>> for Statement {
    fn from(value: Select<M>) -> Self {
        Statement::Select(value.untyped)
    }
}

impl<M> fmt::Debug for Select<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}
