use super::{FieldInput, FieldValue, Statement};
use crate::schema::{FieldRef, Model, Property};
use crate::{Error, Result};

use std::collections::BTreeSet;
use std::sync::Arc;

/// INSERT statement state.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub model: Arc<Model>,

    pub fields: Vec<InsertField>,

    pub unless_conflict: Option<UnlessConflict>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertField {
    pub property: Property,
    pub value: FieldValue,
}

/// `unless conflict on (...) [else (...)]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnlessConflict {
    /// Field names without a leading `.`; sorted and de-duplicated
    pub fields: BTreeSet<String>,

    /// Statement run instead when the insert conflicts
    pub alternate: Option<Box<Statement>>,
}

impl Insert {
    pub fn new(model: Arc<Model>) -> Insert {
        Insert {
            model,
            fields: vec![],
            unless_conflict: None,
        }
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.property.name == name)
    }

    pub fn add_field(&mut self, field: impl Into<FieldRef>, input: FieldInput) -> Result<()> {
        let field = field.into();
        let property = field.expect_token("insert field")?;
        property.verify_owner(&self.model.name)?;

        if self.contains_field(&property.name) {
            return Err(Error::duplicate_field(&self.model.name, &property.name));
        }

        let property = self.model.property(&property.name)?;
        let value = input.resolve(property)?;

        self.fields.push(InsertField {
            property: property.clone(),
            value,
        });
        Ok(())
    }

    /// Adds conflict keys. Repeated calls accumulate keys; an alternate
    /// replaces any earlier one.
    pub fn unless_conflict<I>(&mut self, fields: I, alternate: Option<Statement>) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<FieldRef>,
    {
        let mut names = vec![];

        for field in fields {
            let field = field.into();

            if let Some(property) = field.as_token() {
                property.verify_owner(&self.model.name)?;
            }

            let name = field.name();
            let name = name.strip_prefix('.').unwrap_or(name);
            self.model.property(name)?;
            names.push(name.to_string());
        }

        let conflict = self.unless_conflict.get_or_insert_with(Default::default);
        conflict.fields.extend(names);

        if let Some(alternate) = alternate {
            conflict.alternate = Some(Box::new(alternate));
        }

        Ok(())
    }

    pub fn sorted_fields(&self) -> Vec<&InsertField> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.property.name.cmp(&b.property.name));
        fields
    }
}
