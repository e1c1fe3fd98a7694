use super::{Direction, EmptyStrategy, Expr, OrderBy};
use crate::schema::{FieldRef, Model};
use crate::{Error, Result};

use std::sync::Arc;

/// SELECT statement state.
///
/// Every mutation validates its input against `model` before it is
/// accepted; a rejected call leaves the statement unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub model: Arc<Model>,

    /// Projected fields in insertion order. Serialization sorts them by name.
    pub fields: Vec<SelectField>,

    /// Joined with `and`, in insertion order
    pub filters: Vec<Expr>,

    pub order_by: Option<OrderBy>,

    pub offset: Option<u64>,

    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    pub field: FieldRef,
    pub kind: SelectFieldKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectFieldKind {
    /// The field as stored
    Plain,

    /// A computed field, `name := <expr>`
    Expr(Expr),

    /// A link projected through its own SELECT
    Subquery(Box<Select>),
}

impl Select {
    pub fn new(model: Arc<Model>) -> Select {
        Select {
            model,
            fields: vec![],
            filters: vec![],
            order_by: None,
            offset: None,
            limit: None,
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|field| field.field.name())
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.field_names().any(|field| field == name)
    }

    pub fn add_field(&mut self, field: impl Into<FieldRef>, kind: SelectFieldKind) -> Result<()> {
        let field = field.into();

        if let Some(property) = field.as_token() {
            property.verify_owner(&self.model.name)?;
        }

        if self.contains_field(field.name()) {
            return Err(Error::duplicate_field(&self.model.name, field.name()));
        }

        match &kind {
            SelectFieldKind::Plain => {
                self.model.property(field.name())?;
            }
            SelectFieldKind::Expr(expr) => {
                expr.verify_literals()?;
                expr.verify_owner(&self.model.name)?;
            }
            SelectFieldKind::Subquery(subquery) => {
                let property = field.expect_token("subquery field")?;
                let property = self.model.property(&property.name)?;

                let Some(linked) = &property.linked else {
                    return Err(Error::type_mismatch(
                        &property.name,
                        &property.ty,
                        "subquery",
                    ));
                };

                if subquery.model.name != *linked {
                    return Err(Error::context_mismatch(
                        format!("subquery for `{}`", property.name),
                        linked,
                        &subquery.model.name,
                    ));
                }
            }
        }

        self.fields.push(SelectField { field, kind });
        Ok(())
    }

    pub fn add_filter(&mut self, expr: Expr) -> Result<()> {
        expr.verify_literals()?;
        expr.verify_owner(&self.model.name)?;

        if self.filters.contains(&expr) {
            return Err(Error::invalid_condition(
                expr.to_string(),
                "filter already exists",
            ));
        }

        self.filters.push(expr);
        Ok(())
    }

    /// Orders by a field of the model or by an already projected field.
    pub fn set_order(
        &mut self,
        field: impl Into<FieldRef>,
        direction: Direction,
        empty: Option<EmptyStrategy>,
    ) -> Result<()> {
        let field = field.into();

        if let Some(property) = field.as_token() {
            property.verify_owner(&self.model.name)?;
        }

        let name = field.name();
        if !self.model.contains(name) && !self.contains_field(name) {
            return Err(Error::unknown_field(&self.model.name, name));
        }

        self.order_by = Some(OrderBy {
            field: name.to_string(),
            direction,
            empty,
        });
        Ok(())
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.limit = Some(limit);
    }

    /// Fields sorted by name, the order they are serialized in.
    pub fn sorted_fields(&self) -> Vec<&SelectField> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.field.name().cmp(b.field.name()));
        fields
    }
}
