use super::{ModelBuilder, ModelName, Property};
use crate::{Error, Result};

use indexmap::IndexMap;

/// A declared model: its qualified name, abstract flag and reflected fields.
///
/// Models are immutable once built. Share them behind an `Arc`, which is how
/// the registry hands them out.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: ModelName,

    pub is_abstract: bool,

    /// Model this one extends, if any
    pub base: Option<ModelName>,

    /// Reflected fields in declaration order, inherited fields first
    pub properties: IndexMap<String, Property>,
}

impl Model {
    pub fn builder(module: impl Into<String>, name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(ModelName::new(module, name))
    }

    pub fn module(&self) -> &str {
        &self.name.module
    }

    pub fn type_name(&self) -> &str {
        &self.name.name
    }

    /// Returns the reflected field `name` or an unknown-field error.
    pub fn property(&self, name: &str) -> Result<&Property> {
        self.properties
            .get(name)
            .ok_or_else(|| Error::unknown_field(&self.name, name))
    }

    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn properties(&self) -> impl ExactSizeIterator<Item = &Property> + '_ {
        self.properties.values()
    }

    pub fn links(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties().filter(|property| property.is_link())
    }

    pub fn scalars(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties().filter(|property| !property.is_link())
    }
}
