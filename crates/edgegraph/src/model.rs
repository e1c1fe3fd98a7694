use crate::stmt::{Insert, Select, Update};
use crate::Result;

use edgegraph_core::schema::{self, Property};
use std::sync::Arc;

/// A Rust type backed by a declared database model.
///
/// Implementors only describe the model; reflection happens once per type and
/// the result is shared for the lifetime of the process.
///
/// ```ignore
/// struct Memo;
///
/// impl Model for Memo {
///     fn declare() -> Result<schema::Model> {
///         schema::Model::builder("default", "Memo")
///             .field("content", PrimitiveType::Str)
///             .field("created_by", FieldTy::link("default::User"))
///             .build()
///     }
/// }
///
/// let query = Memo::select()?.field(Memo::field("content")?)?.build()?;
/// ```
pub trait Model: Sized + 'static {
    /// Describes the model. Called at most once per type.
    fn declare() -> Result<schema::Model>;

    /// The reflected model, declaring and registering it on first use.
    fn reflect() -> Result<Arc<schema::Model>> {
        schema::reflect_type::<Self>(Self::declare)
    }

    /// The property token for field `name`.
    fn field(name: &str) -> Result<Property> {
        Ok(Self::reflect()?.property(name)?.clone())
    }

    fn select() -> Result<Select<Self>> {
        Select::new()
    }

    fn insert() -> Result<Insert<Self>> {
        Insert::new()
    }

    fn update() -> Result<Update<Self>> {
        Update::new()
    }
}
