use super::{Expr, FieldInput, FieldValue, Select};
use crate::schema::{FieldRef, Model, Property};
use crate::{Error, Result};

use std::fmt;
use std::sync::Arc;

/// How an UPDATE field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignOp {
    /// `:=`
    #[default]
    Assign,

    /// `+=`, subquery values only
    Append,

    /// `-=`, subquery values only
    Remove,
}

/// UPDATE statement state.
///
/// The updated set is either the result of a target SELECT or the model
/// narrowed by filters, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub model: Arc<Model>,

    pub target: Option<Box<Select>>,

    pub filters: Vec<Expr>,

    pub fields: Vec<UpdateField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateField {
    pub property: Property,
    pub op: AssignOp,
    pub value: FieldValue,
}

impl Update {
    pub fn new(model: Arc<Model>) -> Update {
        Update {
            model,
            target: None,
            filters: vec![],
            fields: vec![],
        }
    }

    /// Updates the result set of `select`. Replaces an earlier target.
    pub fn set_target(&mut self, select: Select) -> Result<()> {
        if !self.filters.is_empty() {
            return Err(Error::invalid_condition(
                "update target",
                "a target cannot be combined with filters",
            ));
        }

        if select.model.name != self.model.name {
            return Err(Error::context_mismatch(
                "update target",
                &self.model.name,
                &select.model.name,
            ));
        }

        self.target = Some(Box::new(select));
        Ok(())
    }

    pub fn add_filter(&mut self, expr: Expr) -> Result<()> {
        if self.target.is_some() {
            return Err(Error::invalid_condition(
                expr.to_string(),
                "filters cannot be combined with an update target",
            ));
        }

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

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.property.name == name)
    }

    /// Sets a field. `Append` and `Remove` only apply to subquery values and
    /// fall back to `Assign` for anything else.
    pub fn add_field(
        &mut self,
        field: impl Into<FieldRef>,
        input: FieldInput,
        op: AssignOp,
    ) -> Result<()> {
        let field = field.into();
        let property = field.expect_token("update field")?;
        property.verify_owner(&self.model.name)?;

        if self.contains_field(&property.name) {
            return Err(Error::duplicate_field(&self.model.name, &property.name));
        }

        let property = self.model.property(&property.name)?;
        let value = input.resolve(property)?;

        // Paths in the assigned value are evaluated against the updated object
        if let FieldValue::Expr(expr) = &value {
            expr.verify_owner(&self.model.name)?;
        }

        let op = if value.is_subquery() {
            op
        } else {
            AssignOp::Assign
        };

        self.fields.push(UpdateField {
            property: property.clone(),
            op,
            value,
        });
        Ok(())
    }

    pub fn sorted_fields(&self) -> Vec<&UpdateField> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.property.name.cmp(&b.property.name));
        fields
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssignOp::Assign => ":=",
            AssignOp::Append => "+=",
            AssignOp::Remove => "-=",
        })
    }
}
