use super::{FieldTy, Model, ModelName, Property};
use crate::{Error, Result};

use indexmap::{IndexMap, IndexSet};

/// Prefix of framework bookkeeping fields, which are never reflected.
const RESERVED_PREFIX: &str = "__";

/// Assembles a [`Model`] from a field-name to declared-type list.
#[derive(Debug)]
pub struct ModelBuilder {
    name: ModelName,
    is_abstract: bool,
    base: Option<Model>,
    fields: Vec<(String, FieldTy)>,
}

impl ModelBuilder {
    pub(super) fn new(name: ModelName) -> ModelBuilder {
        ModelBuilder {
            name,
            is_abstract: false,
            base: None,
            fields: vec![],
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    pub fn abstract_type(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Inherits every field of `base`. Inherited tokens keep `base` as their
    /// origin but are owned by the model being built.
    pub fn extends(mut self, base: &Model) -> Self {
        self.base = Some(base.clone());
        self
    }

    pub fn build(self) -> Result<Model> {
        let mut properties = IndexMap::new();

        if let Some(base) = &self.base {
            for property in base.properties() {
                let mut property = property.clone();
                property.owner = self.name.clone();
                property.inherited = true;
                properties.insert(property.name.clone(), property);
            }
        }

        let mut declared = IndexSet::new();

        for (name, ty) in self.fields {
            if name.starts_with(RESERVED_PREFIX) {
                continue;
            }

            if name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "{} declares a field with an empty name",
                    self.name
                )));
            }

            if !declared.insert(name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "{} declares field `{name}` more than once",
                    self.name
                )));
            }

            // A redeclared base field is replaced in place.
            let property = Property::new(self.name.clone(), name.clone(), ty);
            properties.insert(name, property);
        }

        Ok(Model {
            name: self.name,
            is_abstract: self.is_abstract,
            base: self.base.map(|base| base.name),
            properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{FieldTy, Model, ModelName};
    use crate::stmt::PrimitiveType;

    #[test]
    fn bookkeeping_fields_are_skipped() {
        let model = Model::builder("default", "Memo")
            .field("content", PrimitiveType::Str)
            .field("__config__", PrimitiveType::Json)
            .build()
            .unwrap();

        assert_eq!(model.properties().len(), 1);
        assert!(model.get_property("__config__").is_none());
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let err = Model::builder("default", "Memo")
            .field("content", PrimitiveType::Str)
            .field("content", PrimitiveType::Str)
            .build()
            .unwrap_err();

        assert!(err.is_invalid_schema());
    }

    #[test]
    fn subclass_owns_inherited_fields() {
        let base = Model::builder("default", "Named")
            .abstract_type(true)
            .field("name", PrimitiveType::Str)
            .build()
            .unwrap();

        let user = Model::builder("default", "User")
            .extends(&base)
            .field("friends", FieldTy::list(FieldTy::link("default::User")))
            .build()
            .unwrap();

        let name = user.property("name").unwrap();
        assert!(name.inherited);
        assert_eq!(name.owner, ModelName::new("default", "User"));
        assert_eq!(name.origin, ModelName::new("default", "Named"));
        assert_eq!(user.base, Some(ModelName::new("default", "Named")));

        let friends = user.property("friends").unwrap();
        assert!(friends.multi);
        assert_eq!(friends.linked, Some(ModelName::new("default", "User")));
        assert_eq!(friends.origin, friends.owner);
    }
}
