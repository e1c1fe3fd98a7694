use super::ModelName;
use crate::stmt::PrimitiveType;

use std::fmt;

/// The declared type of a model field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldTy {
    /// A scalar stored inline
    Primitive(PrimitiveType),

    /// A single link to another declared model
    Link(ModelName),

    /// The wrapped type or empty
    Optional(Box<FieldTy>),

    /// A collection of the wrapped type
    List(Box<FieldTy>),

    /// Any one of the member types
    Union(Vec<FieldTy>),
}

impl FieldTy {
    pub fn link(target: impl Into<ModelName>) -> FieldTy {
        FieldTy::Link(target.into())
    }

    pub fn optional(ty: impl Into<FieldTy>) -> FieldTy {
        FieldTy::Optional(Box::new(ty.into()))
    }

    pub fn list(ty: impl Into<FieldTy>) -> FieldTy {
        FieldTy::List(Box::new(ty.into()))
    }

    pub fn union(members: impl IntoIterator<Item = FieldTy>) -> FieldTy {
        FieldTy::Union(members.into_iter().collect())
    }

    /// Resolves the model this field links to.
    ///
    /// A field is a link when its type is a link directly, an optional or a
    /// union wrapping exactly one link, or a single-level list of such a link.
    /// A list of lists is not a link.
    pub fn link_target(&self) -> Option<&ModelName> {
        match self {
            FieldTy::List(inner) => inner.scalar_link(),
            FieldTy::Optional(inner) if inner.is_multi_link() => inner.link_target(),
            _ => self.scalar_link(),
        }
    }

    /// True for one-to-many links.
    pub fn is_multi_link(&self) -> bool {
        match self {
            FieldTy::List(inner) => inner.scalar_link().is_some(),
            FieldTy::Optional(inner) => inner.is_multi_link(),
            _ => false,
        }
    }

    /// The primitive type of a scalar field, seen through optionals.
    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            FieldTy::Primitive(ty) => Some(*ty),
            FieldTy::Optional(inner) => inner.primitive(),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, FieldTy::Optional(_))
    }

    fn scalar_link(&self) -> Option<&ModelName> {
        match self {
            FieldTy::Link(name) => Some(name),
            FieldTy::Optional(inner) => inner.scalar_link(),
            FieldTy::Union(members) => {
                let mut links = members.iter().filter_map(FieldTy::scalar_link);
                let link = links.next()?;
                match links.next() {
                    Some(_) => None,
                    None => Some(link),
                }
            }
            _ => None,
        }
    }
}

impl From<PrimitiveType> for FieldTy {
    fn from(ty: PrimitiveType) -> FieldTy {
        FieldTy::Primitive(ty)
    }
}

impl From<ModelName> for FieldTy {
    fn from(name: ModelName) -> FieldTy {
        FieldTy::Link(name)
    }
}

impl fmt::Display for FieldTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTy::Primitive(ty) => write!(f, "{ty}"),
            FieldTy::Link(name) => write!(f, "{name}"),
            FieldTy::Optional(inner) => write!(f, "optional {inner}"),
            FieldTy::List(inner) => write!(f, "array<{inner}>"),
            FieldTy::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}
