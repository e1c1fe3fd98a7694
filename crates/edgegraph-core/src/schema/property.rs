use super::{FieldTy, ModelName};
use crate::{Error, Result};

use std::hash::{Hash, Hasher};

/// A reflected field of one declared model.
///
/// Tokens are only valid against the model they were reflected from: `owner`
/// is compared against a builder's model before the token is accepted.
#[derive(Debug, Clone)]
pub struct Property {
    /// Model this token was reflected from
    pub owner: ModelName,

    /// Model that declared the field. Differs from `owner` for inherited
    /// fields.
    pub origin: ModelName,

    pub name: String,

    pub ty: FieldTy,

    /// Target model when the field is a link
    pub linked: Option<ModelName>,

    /// True when the field is a one-to-many link
    pub multi: bool,

    pub inherited: bool,
}

impl Property {
    pub(crate) fn new(owner: ModelName, name: String, ty: FieldTy) -> Property {
        let linked = ty.link_target().cloned();
        let multi = ty.is_multi_link();

        Property {
            origin: owner.clone(),
            owner,
            name,
            ty,
            linked,
            multi,
            inherited: false,
        }
    }

    pub fn is_link(&self) -> bool {
        self.linked.is_some()
    }

    /// Checks that this token was reflected from `model`.
    pub fn verify_owner(&self, model: &ModelName) -> Result<()> {
        if self.owner != *model {
            return Err(Error::context_mismatch(
                format!("field `{}`", self.name),
                model,
                &self.owner,
            ));
        }
        Ok(())
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Property) -> bool {
        self.owner == other.owner && self.name == other.name && self.ty == other.ty
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.name.hash(state);
        self.ty.hash(state);
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// Names a field either by a reflected token or by a bare name.
///
/// Bare names are accepted where a field need not exist on the model (a
/// computed SELECT field). Everywhere else a token is required and a bare name
/// is rejected with a wrong-token-kind error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldRef {
    ByName(String),
    ByToken(Property),
}

impl FieldRef {
    pub fn name(&self) -> &str {
        match self {
            FieldRef::ByName(name) => name,
            FieldRef::ByToken(property) => &property.name,
        }
    }

    pub fn as_token(&self) -> Option<&Property> {
        match self {
            FieldRef::ByToken(property) => Some(property),
            FieldRef::ByName(_) => None,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, FieldRef::ByToken(_))
    }

    /// Returns the token, or a wrong-token-kind error naming `usage`.
    pub fn expect_token(&self, usage: &str) -> Result<&Property> {
        match self {
            FieldRef::ByToken(property) => Ok(property),
            FieldRef::ByName(name) => Err(Error::wrong_token_kind(
                format!("property token for {usage}"),
                format!("field name `{name}`"),
            )),
        }
    }
}

impl From<Property> for FieldRef {
    fn from(src: Property) -> FieldRef {
        FieldRef::ByToken(src)
    }
}

impl From<&Property> for FieldRef {
    fn from(src: &Property) -> FieldRef {
        FieldRef::ByToken(src.clone())
    }
}

impl From<&str> for FieldRef {
    fn from(src: &str) -> FieldRef {
        FieldRef::ByName(src.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(src: String) -> FieldRef {
        FieldRef::ByName(src)
    }
}

impl From<&FieldRef> for FieldRef {
    fn from(src: &FieldRef) -> FieldRef {
        src.clone()
    }
}
